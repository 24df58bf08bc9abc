//! Unified audit logging for REST and SOAP calls.
//!
//! This module provides:
//! - `Exchange`: a finished REST or SOAP call, as a tagged union
//! - `LogFactory`: turns an exchange into one severity-classified `AuditRecord`
//! - `AuditRecord` / `Severity`: the structured output
//! - `AuditTrail`: an in-memory logger for tests and batching
//!
//! Audit logging is best-effort by construction:
//! - Building a record never fails and never panics on malformed input
//! - Unparseable tokens and bodies degrade to `null` or raw text
//! - A factory without a logger silently does nothing

mod call_site;
mod exchange;
mod factory;
mod fingerprint;
mod record;
mod trail;

pub use exchange::{Exchange, RestExchange, SoapExchange};
pub use factory::{LogFactory, NO_STATUS, SOAP_ACTION_HEADER, UNKNOWN_METHOD};
pub use fingerprint::{rest_fingerprint, soap_fingerprint};
pub use record::{AuditRecord, Context, Severity};
pub use trail::AuditTrail;
