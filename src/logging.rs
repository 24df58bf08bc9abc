use std::sync::Arc;

use crate::audit::{Context, Severity};

/// `tracing` target every audit record is emitted under.
pub const AUDIT_TARGET: &str = "allegro_audit";

/// A leveled structured logger that receives audit records.
///
/// The audit builder calls `log` exactly once per exchange. Implementations
/// decide what "logging" means: forwarding to `tracing`, storing in memory,
/// shipping to an external collector.
pub trait AuditLogger {
    /// Records one entry.
    fn log(&self, severity: Severity, message: &str, context: &Context);
}

impl<L: AuditLogger + ?Sized> AuditLogger for &L {
    fn log(&self, severity: Severity, message: &str, context: &Context) {
        (**self).log(severity, message, context)
    }
}

impl<L: AuditLogger + ?Sized> AuditLogger for Box<L> {
    fn log(&self, severity: Severity, message: &str, context: &Context) {
        (**self).log(severity, message, context)
    }
}

impl<L: AuditLogger + ?Sized> AuditLogger for Arc<L> {
    fn log(&self, severity: Severity, message: &str, context: &Context) {
        (**self).log(severity, message, context)
    }
}

/// Forwards audit records to the `tracing` infrastructure.
///
/// Records are emitted under the [`AUDIT_TARGET`] target at `DEBUG` or
/// `ERROR` level. The summary becomes the event message; the context is
/// attached as a single JSON-encoded `context` field next to a top-level
/// `request_hash` so that subscribers can filter without parsing JSON.
///
/// # Example
///
/// ```no_run
/// use allegro_api_sdk::audit::{Context, Severity};
/// use allegro_api_sdk::{AuditLogger, TracingLogger};
///
/// TracingLogger.log(Severity::Debug, "GET /me - 200", &Context::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl AuditLogger for TracingLogger {
    fn log(&self, severity: Severity, message: &str, context: &Context) {
        let request_hash = context
            .get("requestHash")
            .and_then(|value| value.as_str())
            .unwrap_or_default();
        let context = serde_json::Value::Object(context.clone());

        match severity {
            Severity::Debug => tracing::debug!(
                target: AUDIT_TARGET,
                severity = %severity,
                request_hash = %request_hash,
                context = %context,
                "{}",
                message
            ),
            Severity::Error => tracing::error!(
                target: AUDIT_TARGET,
                severity = %severity,
                request_hash = %request_hash,
                context = %context,
                "{}",
                message
            ),
        }
    }
}
