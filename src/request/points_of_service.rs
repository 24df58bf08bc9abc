use http::Method;

use super::ApiRequest;
use crate::token::AccessToken;

/// `GET /points-of-service?seller.id=...`: pickup points of a seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPointsOfServiceRequestV2 {
    seller_id: String,
}

impl GetPointsOfServiceRequestV2 {
    /// Points of service for an explicit seller.
    pub fn new(seller_id: impl Into<String>) -> Self {
        Self {
            seller_id: seller_id.into(),
        }
    }

    /// Points of service for the seller the token was issued to.
    ///
    /// Returns `None` when the token carries no `user_name` claim.
    pub fn for_token(token: &AccessToken) -> Option<Self> {
        token.user_id().map(Self::new)
    }
}

impl ApiRequest for GetPointsOfServiceRequestV2 {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/points-of-service".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        vec![("seller.id".to_string(), self.seller_id.clone())]
    }
}
