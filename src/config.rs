//! SDK configuration.
//!
//! Configuration is plain data: it can be built in code, deserialized with
//! `serde` from whatever format the host application uses, or read from the
//! process environment with [`SdkConfig::from_env`].

use serde::Deserialize;

use crate::error::ConfigError;
use crate::secret::Secret;

/// Environment variable holding the application client id.
pub const ENV_CLIENT_ID: &str = "ALLEGRO_CLIENT_ID";
/// Environment variable holding the application client secret.
pub const ENV_CLIENT_SECRET: &str = "ALLEGRO_CLIENT_SECRET";
/// Environment variable holding the OAuth redirect URI (optional).
pub const ENV_REDIRECT_URI: &str = "ALLEGRO_REDIRECT_URI";
/// Environment variable selecting the sandbox environment (optional).
pub const ENV_SANDBOX: &str = "ALLEGRO_SANDBOX";

/// Which Allegro deployment requests are addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// The live marketplace
    #[default]
    Production,
    /// The public sandbox
    Sandbox,
}

impl Environment {
    /// Base URL of the REST API for this environment.
    pub fn rest_base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.allegro.pl",
            Environment::Sandbox => "https://api.allegro.pl.allegrosandbox.pl",
        }
    }
}

/// Credentials identifying the calling application.
#[derive(Debug, Deserialize)]
pub struct AppCredentials {
    /// OAuth client id, recorded as `clientId` in REST audit records
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: Secret<String>,
    /// Redirect URI registered for the application
    #[serde(default)]
    pub redirect_uri: Option<String>,
}

impl AppCredentials {
    /// Creates credentials without a redirect URI.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: Secret::new(client_secret.into()),
            redirect_uri: None,
        }
    }

    /// Sets the redirect URI.
    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }
}

/// Settings for the audit log builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Attach a `backtrace` field with the caller's stack to every record
    pub capture_call_site: bool,
    /// Upper bound on the number of call-site frames kept per record
    pub max_call_site_frames: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            capture_call_site: true,
            max_call_site_frames: 64,
        }
    }
}

/// Top-level SDK configuration.
#[derive(Debug, Deserialize)]
pub struct SdkConfig {
    /// Target deployment
    #[serde(default)]
    pub environment: Environment,
    /// Application credentials
    pub credentials: AppCredentials,
    /// Audit logging settings
    #[serde(default)]
    pub audit: AuditConfig,
}

impl SdkConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when the client id or secret is unset and
    /// `ConfigError::Invalid` when `ALLEGRO_SANDBOX` is not a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = lookup(ENV_CLIENT_ID).ok_or(ConfigError::Missing(ENV_CLIENT_ID))?;
        let client_secret =
            lookup(ENV_CLIENT_SECRET).ok_or(ConfigError::Missing(ENV_CLIENT_SECRET))?;

        let sandbox = match lookup(ENV_SANDBOX) {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                key: ENV_SANDBOX,
                reason: format!("expected a boolean, got '{}'", raw),
            })?,
        };
        let environment = if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        };

        let mut credentials = AppCredentials::new(client_id, client_secret);
        credentials.redirect_uri = lookup(ENV_REDIRECT_URI);

        Ok(Self {
            environment,
            credentials,
            audit: AuditConfig::default(),
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn base_urls() {
        assert_eq!(
            Environment::Production.rest_base_url(),
            "https://api.allegro.pl"
        );
        assert_eq!(
            Environment::Sandbox.rest_base_url(),
            "https://api.allegro.pl.allegrosandbox.pl"
        );
    }

    #[test]
    fn from_lookup_minimal() {
        let config = SdkConfig::from_lookup(lookup_from(&[
            (ENV_CLIENT_ID, "app-1"),
            (ENV_CLIENT_SECRET, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.credentials.client_id, "app-1");
        assert_eq!(config.credentials.client_secret.expose_secret(), "secret");
        assert!(config.credentials.redirect_uri.is_none());
        assert!(config.audit.capture_call_site);
    }

    #[test]
    fn from_lookup_sandbox_and_redirect() {
        let config = SdkConfig::from_lookup(lookup_from(&[
            (ENV_CLIENT_ID, "app-1"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_SANDBOX, "true"),
            (ENV_REDIRECT_URI, "https://example.com/cb"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(
            config.credentials.redirect_uri.as_deref(),
            Some("https://example.com/cb")
        );
    }

    #[test]
    fn from_lookup_missing_client_id() {
        let err = SdkConfig::from_lookup(lookup_from(&[(ENV_CLIENT_SECRET, "s")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ENV_CLIENT_ID)));
    }

    #[test]
    fn from_lookup_rejects_bad_sandbox_flag() {
        let err = SdkConfig::from_lookup(lookup_from(&[
            (ENV_CLIENT_ID, "app-1"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_SANDBOX, "maybe"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ENV_SANDBOX, .. }));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: SdkConfig = serde_json::from_str(
            r#"{"credentials": {"client_id": "app-2", "client_secret": "xyz"}}"#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.audit, AuditConfig::default());
        assert_eq!(format!("{:?}", config.credentials.client_secret), "[REDACTED]");
    }

    #[test]
    fn deserializes_sandbox_and_audit_overrides() {
        let config: SdkConfig = serde_json::from_str(
            r#"{
                "environment": "sandbox",
                "credentials": {"client_id": "app-3", "client_secret": "xyz"},
                "audit": {"capture_call_site": false}
            }"#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
        assert!(!config.audit.capture_call_site);
        assert_eq!(config.audit.max_call_site_frames, 64);
    }
}
