//! Request fingerprints.
//!
//! A fingerprint is the lowercase hex SHA-256 of a canonical rendering of
//! the request, so identical calls correlate across log lines.

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Fingerprint of a REST call.
///
/// Hashes the compact JSON array `[method, path, query, body]`, where `body`
/// is the decoded JSON value or the raw string. Object keys hash in the
/// order they appeared on the wire.
pub fn rest_fingerprint(method: &str, path: &str, query: &str, body: &Value) -> String {
    let canonical = Value::Array(vec![
        Value::from(method),
        Value::from(path),
        Value::from(query),
        body.clone(),
    ]);
    sha256_hex(canonical.to_string().as_bytes())
}

/// Fingerprint of a SOAP call: the raw request envelope, verbatim.
pub fn soap_fingerprint(raw_request: &str) -> String {
    sha256_hex(raw_request.as_bytes())
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}
