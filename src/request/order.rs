use http::Method;

use super::ApiRequest;

/// `GET /order/refund-claims`: commission refund claims.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRefundClaimsRequestV1 {
    params: Vec<(String, String)>,
}

impl GetRefundClaimsRequestV1 {
    /// Lists claims without filtering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter, e.g. `status` or `lineItem.offer.id`.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}

impl ApiRequest for GetRefundClaimsRequestV1 {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/order/refund-claims".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        self.params.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::build_http_request;
    use crate::{AccessToken, Environment};

    #[test]
    fn refund_claims_with_filter() {
        let token = AccessToken::from_parts("t.t.t", Default::default());
        let descriptor = GetRefundClaimsRequestV1::new().with_param("status", "IN_PROGRESS");
        let request = build_http_request(&descriptor, Environment::Production, &token).unwrap();

        assert_eq!(request.uri().path(), "/order/refund-claims");
        assert_eq!(request.uri().query(), Some("status=IN_PROGRESS"));
    }
}
