//! Property tests for the append contract.

use dtr_store::sheet::records_sheet_mut;
use dtr_store::{Action, RetryPolicy, Store, StoreConfig};
use proptest::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::TimeIn), Just(Action::TimeOut)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Any non-empty (id, name) pair and either action appends exactly
    /// one row whose first two columns equal the trimmed inputs.
    #[test]
    fn record_appends_exactly_one_matching_row(
        id in "[A-Za-z0-9][A-Za-z0-9-]{0,9}",
        name in "[A-Za-z]([A-Za-z ]{0,12}[A-Za-z])?",
        action in action_strategy(),
    ) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig {
            path: dir.path().join("offline_dtr.xlsx"),
            retry: RetryPolicy { max_attempts: 3, delay: Duration::ZERO },
        }).unwrap();

        let recorded = store.record(&id, &name, action).unwrap();
        prop_assert_eq!(&recorded.name, &name);
        prop_assert_eq!(recorded.action, action);

        let mut book = umya_spreadsheet::reader::xlsx::read(store.path()).unwrap();
        let sheet = records_sheet_mut(&mut book).unwrap();
        let (_, max_row) = sheet.get_highest_column_and_row();

        // Exactly one data row past the header.
        prop_assert_eq!(max_row, 2);
        prop_assert_eq!(sheet.get_formatted_value((1, 2)), id);
        prop_assert_eq!(sheet.get_formatted_value((2, 2)), name);
        prop_assert_eq!(sheet.get_formatted_value((5, 2)), action.as_str());
    }
}
