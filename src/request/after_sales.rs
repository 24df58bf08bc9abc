use http::Method;

use super::ApiRequest;

/// `GET /after-sales-service-conditions/warranties/{warrantyId}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWarrantyRequestV1 {
    warranty_id: String,
}

impl GetWarrantyRequestV1 {
    /// Fetches the warranty definition with the given id.
    pub fn new(warranty_id: impl Into<String>) -> Self {
        Self {
            warranty_id: warranty_id.into(),
        }
    }
}

impl ApiRequest for GetWarrantyRequestV1 {
    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!(
            "/after-sales-service-conditions/warranties/{}",
            self.warranty_id
        )
    }
}
