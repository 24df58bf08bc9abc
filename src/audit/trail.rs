//! In-memory audit record store.

use std::sync::{Mutex, MutexGuard};

use super::{AuditRecord, Context, Severity};
use crate::logging::AuditLogger;

/// Logger that keeps every record in memory.
///
/// Useful in tests and for applications that batch audit records before
/// shipping them elsewhere. Safe to share between threads.
///
/// # Example
///
/// ```
/// use allegro_api_sdk::audit::{AuditTrail, Context, Severity};
/// use allegro_api_sdk::AuditLogger;
///
/// let trail = AuditTrail::new();
/// trail.log(Severity::Debug, "doLogin - OK", &Context::new());
///
/// assert_eq!(trail.len(), 1);
/// assert_eq!(trail.records()[0].summary(), "doLogin - OK");
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    records: Mutex<Vec<AuditRecord>>,
}

impl AuditTrail {
    /// Creates an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn record(&self, record: AuditRecord) {
        self.lock().push(record);
    }

    /// Returns a snapshot of all records in arrival order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.lock().clone()
    }

    /// Returns the most recent record.
    pub fn last(&self) -> Option<AuditRecord> {
        self.lock().last().cloned()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes all records.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while holding the lock cannot leave a half-pushed Vec, so a
    // poisoned mutex is still safe to read.
    fn lock(&self) -> MutexGuard<'_, Vec<AuditRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AuditLogger for AuditTrail {
    fn log(&self, severity: Severity, message: &str, context: &Context) {
        self.record(AuditRecord::new(severity, message, context.clone()));
    }
}
