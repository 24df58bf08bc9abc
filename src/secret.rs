use std::fmt;

use serde::{Deserialize, Deserializer};

/// Wrapper for credentials that must never show up in formatted output.
///
/// Used for the application's client secret and for raw bearer tokens.
/// `Debug` and `Display` always render `[REDACTED]`, so a `Secret` can sit
/// inside structs that derive `Debug` without leaking through `{:?}`.
///
/// # Examples
///
/// ```
/// use allegro_api_sdk::Secret;
///
/// let client_secret = Secret::new("s3cr3t".to_string());
///
/// assert_eq!(format!("{:?}", client_secret), "[REDACTED]");
/// assert_eq!(client_secret.to_string(), "[REDACTED]");
/// assert_eq!(client_secret.expose_secret(), "s3cr3t");
/// ```
// Do NOT derive Clone, Copy or Default, and do NOT implement Deref or AsRef:
// expose_secret() must stay the only way to reach the inner value.
pub struct Secret<T> {
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Returns the wrapped value.
    ///
    /// Call sites are easy to grep for; keep the result out of log fields.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Secret<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Secret::new)
    }
}
