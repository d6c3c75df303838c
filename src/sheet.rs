//! Workbook layer: the one sheet the store writes to.

use crate::error::{Result, StoreError};
use crate::types::AttendanceRecord;
use umya_spreadsheet::{Coordinate, Pane, PaneStateValues, PaneValues, SheetView, Spreadsheet, Worksheet};

/// Name of the sole sheet in the store workbook.
pub const SHEET_NAME: &str = "DTR Records";

/// Header row, in column order. Header identity is the store's only
/// schema invariant.
pub const HEADERS: [&str; 5] = ["Employee ID", "Name", "Date", "Time", "Action"];

/// Row number of the header.
pub const HEADER_ROW: u32 = 1;

/// Build a fresh store workbook: one sheet named [`SHEET_NAME`] with the
/// bold header row frozen in place.
pub fn new_store_workbook() -> Result<Spreadsheet> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = records_sheet_mut(&mut book)?;
    sheet.set_name(SHEET_NAME);

    for (i, header) in HEADERS.iter().enumerate() {
        let cell = sheet.get_cell_mut((i as u32 + 1, HEADER_ROW));
        cell.set_value_string(*header);
        cell.get_style_mut().get_font_mut().set_bold(true);
    }

    freeze_header_row(sheet);
    Ok(book)
}

/// Append one record after the current highest row. Returns the row it
/// was written to.
pub fn append_record(book: &mut Spreadsheet, record: &AttendanceRecord) -> Result<u32> {
    let sheet = records_sheet_mut(book)?;
    let (_, max_row) = sheet.get_highest_column_and_row();
    let row = max_row + 1;

    for (i, value) in record.cells().iter().enumerate() {
        sheet
            .get_cell_mut((i as u32 + 1, row))
            .set_value_string(*value);
    }

    Ok(row)
}

/// The records sheet of a store workbook (always the first sheet).
pub fn records_sheet_mut(book: &mut Spreadsheet) -> Result<&mut Worksheet> {
    book.get_sheet_mut(&0)
        .ok_or_else(|| StoreError::Workbook("workbook has no sheet".to_string()))
}

/// Keep the header row visible under scrolling: a frozen pane split
/// below row 1.
fn freeze_header_row(sheet: &mut Worksheet) {
    let mut top_left = Coordinate::default();
    top_left.set_coordinate("A2");

    let mut pane = Pane::default();
    pane.set_vertical_split(1f64);
    pane.set_top_left_cell(top_left);
    pane.set_active_pane(PaneValues::BottomLeft);
    pane.set_state(PaneStateValues::Frozen);

    let views = sheet.get_sheet_views_mut().get_sheet_view_list_mut();
    if views.is_empty() {
        views.push(SheetView::default());
    }
    views[0].set_pane(pane);
}
