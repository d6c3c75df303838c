//! Main store: initialization and validated append of attendance
//! records.

use crate::error::{Result, StoreError};
use crate::retry::{self, RetryPolicy};
use crate::sheet;
use crate::types::{local_now, Action, AttendanceRecord, Recorded};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use umya_spreadsheet::{Spreadsheet, XlsxError};

/// Default location of the persisted workbook.
pub const DEFAULT_STORE_PATH: &str = "offline_dtr.xlsx";

/// Store configuration.
///
/// The external configuration file recognizes a single option,
/// `store_path`; the retry policy is code-level configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct StoreConfig {
    /// Path of the persisted workbook.
    #[serde(rename = "store_path", default = "default_store_path")]
    pub path: PathBuf,

    /// Retry policy for persistence.
    #[serde(skip)]
    pub retry: RetryPolicy,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            retry: RetryPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| StoreError::Config(e.to_string()))
    }
}

/// Ensure a store workbook exists at `path`, creating it with the
/// header schema if absent. Idempotent: an existing file is left
/// untouched, with no validation or migration.
pub fn ensure_store(path: impl AsRef<Path>) -> Result<()> {
    ensure_store_with(path.as_ref(), &RetryPolicy::default())
}

fn ensure_store_with(path: &Path, retry: &RetryPolicy) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    let book = sheet::new_store_workbook()?;
    retry::save_workbook(&book, path, retry)?;
    debug!(path = %path.display(), "created record store");
    Ok(())
}

/// The attendance record store.
///
/// Holds no record state in memory: every [`Store::record`] call
/// reloads the workbook from disk, so the file is the sole source of
/// truth and external edits are picked up on the next call.
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Open the store, creating the workbook on first run.
    ///
    /// An initialization failure is fatal by design: no further
    /// operation is meaningful without a store, so callers should
    /// surface the error and terminate.
    pub fn open(config: StoreConfig) -> Result<Self> {
        ensure_store_with(&config.path, &config.retry)
            .map_err(|e| StoreError::Initialization(Box::new(e)))?;
        Ok(Self { config })
    }

    /// Path of the persisted workbook.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Validate inputs, stamp them with the current local time, and
    /// append one row to the store.
    ///
    /// Inputs are trimmed of surrounding whitespace; an empty employee
    /// id or name fails before anything touches disk. No in/out pairing
    /// is enforced: the action label is trusted as given.
    pub fn record(&self, employee_id: &str, name: &str, action: Action) -> Result<Recorded> {
        let employee_id = employee_id.trim();
        if employee_id.is_empty() {
            return Err(StoreError::MissingField("employee ID"));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::MissingField("name"));
        }

        let record = AttendanceRecord::stamped(employee_id, name, action, local_now());

        let mut book = self.load_workbook()?;
        let row = sheet::append_record(&mut book, &record)?;
        retry::save_workbook(&book, &self.config.path, &self.config.retry)?;

        debug!(
            row,
            employee_id = %record.employee_id,
            action = %record.action,
            "appended attendance record"
        );

        Ok(Recorded {
            action,
            name: record.name,
            time: record.time,
        })
    }

    /// Load the workbook, recreating it first if the file was deleted
    /// externally since initialization.
    fn load_workbook(&self) -> Result<Spreadsheet> {
        match umya_spreadsheet::reader::xlsx::read(&self.config.path) {
            Ok(book) => Ok(book),
            Err(XlsxError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                ensure_store_with(&self.config.path, &self.config.retry)?;
                umya_spreadsheet::reader::xlsx::read(&self.config.path)
                    .map_err(retry::classify_xlsx_error)
            }
            Err(e) => Err(retry::classify_xlsx_error(e)),
        }
    }
}
