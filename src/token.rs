//! Bearer token claims.
//!
//! Allegro access tokens are compact JWS strings. The SDK never verifies
//! them; it only reads claims (chiefly `user_name`) to fill query parameters
//! and to enrich audit records.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::error::TokenError;
use crate::secret::Secret;

/// Claim carrying the seller's user identifier.
pub const USER_ID_CLAIM: &str = "user_name";

/// A parsed access token: the raw bearer string plus its decoded claims.
#[derive(Debug)]
pub struct AccessToken {
    raw: Secret<String>,
    claims: Map<String, Value>,
}

impl AccessToken {
    /// Builds a token from an already-known raw string and claim set.
    pub fn from_parts(raw: impl Into<String>, claims: Map<String, Value>) -> Self {
        Self {
            raw: Secret::new(raw.into()),
            claims,
        }
    }

    /// Returns a claim by name.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Returns all claims.
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Returns the `user_name` claim, rendering numeric ids as strings.
    pub fn user_id(&self) -> Option<String> {
        match self.claim(USER_ID_CLAIM)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Returns the raw token.
    pub fn raw(&self) -> &Secret<String> {
        &self.raw
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.raw.expose_secret())
    }
}

/// Turns a raw bearer string into an [`AccessToken`].
pub trait TokenParser {
    /// Parses `raw` into claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` when the string is not a well-formed token.
    fn parse(&self, raw: &str) -> Result<AccessToken, TokenError>;
}

impl<P: TokenParser + ?Sized> TokenParser for &P {
    fn parse(&self, raw: &str) -> Result<AccessToken, TokenError> {
        (**self).parse(raw)
    }
}

impl<P: TokenParser + ?Sized> TokenParser for Box<P> {
    fn parse(&self, raw: &str) -> Result<AccessToken, TokenError> {
        (**self).parse(raw)
    }
}

/// Reads claims from a compact JWS without checking its signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtClaimsParser;

impl TokenParser for JwtClaimsParser {
    fn parse(&self, raw: &str) -> Result<AccessToken, TokenError> {
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.len() != 3 {
            return Err(TokenError::Malformed(segments.len()));
        }

        let payload = URL_SAFE_NO_PAD.decode(segments[1].trim_end_matches('='))?;
        let claims = match serde_json::from_slice::<Value>(&payload) {
            Ok(Value::Object(claims)) => claims,
            Ok(_) => return Err(TokenError::Claims(None)),
            Err(e) => return Err(TokenError::Claims(Some(e))),
        };

        Ok(AccessToken::from_parts(raw, claims))
    }
}

/// Extracts the credential from an `Authorization` header value.
///
/// The value is split on spaces and the second piece is returned, so
/// `"Bearer abc"` yields `"abc"` and a value without a space yields `None`.
pub fn bearer_from_authorization(value: &str) -> Option<&str> {
    value.split(' ').nth(1).filter(|token| !token.is_empty())
}
