//! Save-with-retry: bounded-attempt persistence tolerating transient
//! file locks.
//!
//! Lock contention is the only common recoverable failure in this
//! domain (a workbook shared informally with spreadsheet viewers), so
//! it is the only thing retried; every other error aborts on the first
//! attempt.

use crate::error::{Result, StoreError};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::warn;
use umya_spreadsheet::{Spreadsheet, XlsxError};

/// Bounded retry policy for persistence.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Run `attempt` under `policy`, sleeping via `sleep` between retries.
///
/// Only lock-contention errors are retried; after `max_attempts` of
/// those the result is [`StoreError::Locked`] naming `path` so the
/// message can tell the user which file to close. Non-lock errors
/// propagate unchanged from the first attempt that hit them.
///
/// `attempt` and `sleep` are injected so tests can drive the policy
/// with fake failures and a recording clock instead of real sleeps.
pub fn run_with_retry<T>(
    policy: &RetryPolicy,
    path: &Path,
    mut attempt: impl FnMut() -> Result<T>,
    mut sleep: impl FnMut(Duration),
) -> Result<T> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        match attempt() {
            Ok(value) => return Ok(value),
            Err(e) if e.is_lock_contention() => {
                if attempts >= policy.max_attempts.max(1) {
                    return Err(StoreError::Locked {
                        path: path.to_path_buf(),
                        attempts,
                    });
                }
                warn!(
                    path = %path.display(),
                    attempt = attempts,
                    max_attempts = policy.max_attempts,
                    "store file locked, retrying"
                );
                sleep(policy.delay);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Persist a workbook to `path` under the given retry policy.
pub fn save_workbook(book: &Spreadsheet, path: &Path, policy: &RetryPolicy) -> Result<()> {
    run_with_retry(
        policy,
        path,
        || umya_spreadsheet::writer::xlsx::write(book, path).map_err(classify_xlsx_error),
        thread::sleep,
    )
}

/// Map a workbook read/write error into the store taxonomy: io errors
/// keep their kind (so lock contention stays recognizable), everything
/// else is a workbook failure.
pub(crate) fn classify_xlsx_error(e: XlsxError) -> StoreError {
    match e {
        XlsxError::Io(e) => StoreError::Io(e),
        other => StoreError::Workbook(other.to_string()),
    }
}
