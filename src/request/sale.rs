use http::Method;

use super::ApiRequest;

/// `GET /sale/offer-events`: the seller's recent offer change events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOfferEventsRequestV1 {
    params: Vec<(String, String)>,
}

impl GetOfferEventsRequestV1 {
    /// Creates the request with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a query parameter such as `from`, `limit` or `type`.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}

impl ApiRequest for GetOfferEventsRequestV1 {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/sale/offer-events".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        self.params.clone()
    }
}

/// `DELETE /sale/offer-variants/{setId}`: removes a variant set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOfferVariantRequestV1 {
    set_id: String,
}

impl DeleteOfferVariantRequestV1 {
    /// Targets the variant set with the given id.
    pub fn new(set_id: impl Into<String>) -> Self {
        Self {
            set_id: set_id.into(),
        }
    }
}

impl ApiRequest for DeleteOfferVariantRequestV1 {
    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/sale/offer-variants/{}", self.set_id)
    }
}

/// `GET /sale/user-ratings`: ratings received by a seller.
///
/// Unset filters are left out of the query string. No media type is
/// negotiated for this endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserRatingsRequest {
    user_id: String,
    recommended: Option<bool>,
    offset: Option<u32>,
    limit: Option<u32>,
}

impl GetUserRatingsRequest {
    /// Ratings for `user_id`, usually the token's `user_name` claim.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            recommended: None,
            offset: None,
            limit: None,
        }
    }

    /// Only positive (`true`) or negative (`false`) ratings.
    pub fn recommended(mut self, recommended: bool) -> Self {
        self.recommended = Some(recommended);
        self
    }

    /// Skips the first `offset` ratings.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Caps the page size.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl ApiRequest for GetUserRatingsRequest {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/sale/user-ratings".to_string()
    }

    fn query(&self) -> Vec<(String, String)> {
        [
            ("user.id", Some(self.user_id.clone())),
            ("recommended", self.recommended.map(|r| r.to_string())),
            ("offset", self.offset.map(|o| o.to_string())),
            ("limit", self.limit.map(|l| l.to_string())),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
        .collect()
    }
    fn content_type(&self) -> Option<&'static str> {
        None
    }
}
