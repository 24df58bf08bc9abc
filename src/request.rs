//! REST request descriptors.
//!
//! Each endpoint is a small value type implementing [`ApiRequest`]; it knows
//! its method, path, query and body but nothing about transport.
//! [`build_http_request`] turns a descriptor into an `http::Request` ready to
//! hand to whichever HTTP client the application uses.
//!
//! # Example
//!
//! ```
//! use allegro_api_sdk::request::{build_http_request, GetOfferEventsRequestV1};
//! use allegro_api_sdk::{AccessToken, Environment};
//!
//! let token = AccessToken::from_parts("h.p.s", Default::default());
//! let events = GetOfferEventsRequestV1::new().with_param("limit", "10");
//!
//! let request = build_http_request(&events, Environment::Production, &token).unwrap();
//! assert_eq!(request.method(), "GET");
//! assert_eq!(
//!     request.uri().to_string(),
//!     "https://api.allegro.pl/sale/offer-events?limit=10"
//! );
//! ```

mod after_sales;
mod order;
mod points_of_service;
mod sale;

pub use after_sales::GetWarrantyRequestV1;
pub use order::GetRefundClaimsRequestV1;
pub use points_of_service::GetPointsOfServiceRequestV2;
pub use sale::{DeleteOfferVariantRequestV1, GetOfferEventsRequestV1, GetUserRatingsRequest};

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use serde_json::Value;
use url::Url;

use crate::config::Environment;
use crate::error::RequestError;
use crate::token::AccessToken;

/// Media types negotiated with the REST API.
pub struct ContentType;

impl ContentType {
    /// Stable public API, version 1
    pub const PUBLIC_V1: &'static str = "application/vnd.allegro.public.v1+json";
    /// Beta API, version 1
    pub const BETA_V1: &'static str = "application/vnd.allegro.beta.v1+json";
}

/// Description of a single REST API operation.
pub trait ApiRequest {
    /// HTTP method.
    fn method(&self) -> Method;

    /// Path relative to the API base URL, starting with `/`.
    fn path(&self) -> String;

    /// Query parameters in the order they should appear.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Media type sent as both `Accept` and `Content-Type`.
    fn content_type(&self) -> Option<&'static str> {
        Some(ContentType::PUBLIC_V1)
    }

    /// JSON body, if the operation sends one.
    fn body(&self) -> Option<Value> {
        None
    }
}

/// Assembles the HTTP request for `request` against `environment`.
///
/// # Errors
///
/// Returns `RequestError` if the URL cannot be formed, the body cannot be
/// serialized, or the `http` builder rejects a header value.
pub fn build_http_request<R>(
    request: &R,
    environment: Environment,
    token: &AccessToken,
) -> Result<http::Request<Vec<u8>>, RequestError>
where
    R: ApiRequest + ?Sized,
{
    let mut url = Url::parse(environment.rest_base_url())?;
    url.set_path(&request.path());

    let query = request.query();
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    let mut builder = http::Request::builder()
        .method(request.method())
        .uri(url.as_str())
        .header(AUTHORIZATION, token.authorization_header());

    if let Some(content_type) = request.content_type() {
        builder = builder
            .header(ACCEPT, content_type)
            .header(CONTENT_TYPE, content_type);
    }

    let body = match request.body() {
        Some(value) => serde_json::to_vec(&value)?,
        None => Vec::new(),
    };

    Ok(builder.body(body)?)
}
