//! # Attendance Record Store
//!
//! An append-only store for employee time-in/time-out events, persisted
//! as a spreadsheet workbook shared informally with spreadsheet
//! viewers.
//!
//! ## Core Concepts
//!
//! - **Records**: one immutable row per attendance event (employee id,
//!   name, date, time, action)
//! - **Store Initializer**: creates the workbook with its bold, frozen
//!   header row when absent; never touches an existing file
//! - **Save-with-Retry**: bounded-attempt persistence that tolerates
//!   transient file locks and nothing else
//!
//! ## Example
//!
//! ```ignore
//! use dtr_store::{Action, Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig {
//!     path: "./offline_dtr.xlsx".into(),
//!     ..Default::default()
//! })?;
//!
//! let recorded = store.record("E-1042", "Ada Lovelace", Action::TimeIn)?;
//! println!("{recorded}");
//! ```

pub mod error;
pub mod retry;
pub mod sheet;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use retry::{run_with_retry, save_workbook, RetryPolicy};
pub use sheet::{HEADERS, HEADER_ROW, SHEET_NAME};
pub use store::{ensure_store, Store, StoreConfig, DEFAULT_STORE_PATH};
pub use types::{Action, AttendanceRecord, Recorded};
