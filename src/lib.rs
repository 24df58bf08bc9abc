//! Client-side building blocks for the Allegro REST and legacy SOAP APIs.
//!
//! This crate provides:
//! - **Request descriptors**: one small type per REST operation, turned into an
//!   `http::Request` by [`request::build_http_request`]
//! - **Token claims**: reading the seller id out of a bearer token without
//!   contacting the authorization server
//! - **Audit logging**: one structured, severity-classified record per REST or
//!   SOAP exchange, emitted through a pluggable [`AuditLogger`]
//!
//! Transport is out of scope: any HTTP or SOAP client can execute the requests.
//!
//! # Core Types
//!
//! - [`audit::LogFactory`]: builds and emits audit records
//! - [`audit::Exchange`]: a finished REST or SOAP call
//! - [`AccessToken`] / [`TokenParser`]: bearer token claims
//! - [`Secret<T>`]: wrapper that redacts credentials in formatted output
//! - [`SdkConfig`]: environment, credentials and audit settings
//!
//! # Examples
//!
//! ```
//! use allegro_api_sdk::audit::{AuditTrail, Context, LogFactory, Severity};
//! use allegro_api_sdk::AppCredentials;
//!
//! let trail = AuditTrail::new();
//! let audit = LogFactory::new(&AppCredentials::new("app-1", "secret"), Some(&trail));
//!
//! let request = http::Request::get("https://api.allegro.pl/me")
//!     .body(Vec::new())
//!     .unwrap();
//!
//! // No response at all: logged as an error
//! audit.log_rest(&request, None, Context::new());
//!
//! let record = trail.last().unwrap();
//! assert_eq!(record.severity(), Severity::Error);
//! assert_eq!(record.summary(), "GET /me - NO_STATUS");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod config;
mod error;
mod logging;
pub mod request;
mod secret;
pub mod soap;
mod token;

pub use config::{
    AppCredentials, AuditConfig, Environment, SdkConfig, ENV_CLIENT_ID, ENV_CLIENT_SECRET,
    ENV_REDIRECT_URI, ENV_SANDBOX,
};
pub use error::{ConfigError, RequestError, TokenError};
pub use logging::{AuditLogger, TracingLogger, AUDIT_TARGET};
pub use secret::Secret;
pub use token::{
    bearer_from_authorization, AccessToken, JwtClaimsParser, TokenParser, USER_ID_CLAIM,
};
