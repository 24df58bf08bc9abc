//! Audit record schema.
//!
//! One [`AuditRecord`] is produced per audited exchange. The context is a
//! JSON object so that any structured logger can carry it unchanged.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Named context fields attached to a record.
pub type Context = Map<String, Value>;

/// Level a record is emitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The call completed normally
    Debug,
    /// No response, a non-2xx status, or a SOAP fault
    Error,
}

impl Severity {
    /// Lower-case level name, as understood by most log backends.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Error => "error",
        }
    }

    /// Classifies a REST outcome: `Debug` only for a status of 299 or below.
    pub fn for_status(status: Option<u16>) -> Self {
        match status {
            Some(code) if code <= 299 => Severity::Debug,
            _ => Severity::Error,
        }
    }

    /// Classifies a SOAP outcome: `Error` iff a fault was raised.
    pub fn for_fault(faulted: bool) -> Self {
        if faulted {
            Severity::Error
        } else {
            Severity::Debug
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured, severity-classified log entry for one exchange.
///
/// # Example
///
/// ```
/// use allegro_api_sdk::audit::{AuditRecord, Context, Severity};
/// use serde_json::json;
///
/// let mut context = Context::new();
/// context.insert("requestHash".to_string(), json!("abc"));
///
/// let record = AuditRecord::new(Severity::Debug, "GET /me - 200", context);
/// assert_eq!(record.request_hash(), Some("abc"));
/// assert_eq!(record.to_string(), "[debug] GET /me - 200");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    severity: Severity,
    summary: String,
    context: Context,
}

impl AuditRecord {
    /// Creates a record.
    pub fn new(severity: Severity, summary: impl Into<String>, context: Context) -> Self {
        Self {
            severity,
            summary: summary.into(),
            context,
        }
    }

    /// Returns the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the one-line summary used as the log message.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the full context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Returns one context field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.context.get(name)
    }

    /// Returns the `requestHash` field when it is a string.
    pub fn request_hash(&self) -> Option<&str> {
        self.field("requestHash").and_then(Value::as_str)
    }

    /// Consumes the record, returning its parts.
    pub fn into_parts(self) -> (Severity, String, Context) {
        (self.severity, self.summary, self.context)
    }
}

impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.summary)
    }
}
