//! WebAPI message types used with the generic SOAP client.
//!
//! Field names follow the WSDL (`camelCase`), so these serialize straight
//! into whatever encoder the SOAP client uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `doLoginWithAccessToken` input: opens a WebAPI session from a REST token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoLoginWithAccessTokenRequest {
    /// REST access token
    pub access_token: String,
    /// Country code of the marketplace (1 = Poland)
    pub country_code: i32,
    /// WebAPI key of the application
    pub webapi_key: String,
}

impl DoLoginWithAccessTokenRequest {
    /// Builds the login request.
    pub fn new(
        access_token: impl Into<String>,
        country_code: i32,
        webapi_key: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            country_code,
            webapi_key: webapi_key.into(),
        }
    }
}

/// `doRequestPayout` input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoRequestPayoutRequest {
    /// WebAPI session handle
    pub session_id: String,
}

/// `doMyBilling` output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoMyBillingResponse {
    /// Billing summary text
    #[serde(default)]
    pub my_billing: Option<String>,
}

/// `doMyAccount2` output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoMyAccount2Response {
    /// Account entries (`MyAccountStruct2`), kept as raw values
    #[serde(default)]
    pub myaccount_list: Option<Vec<Value>>,
}

/// `doGetMyPayments` output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoGetMyPaymentsResponse {
    /// Payments (`UserPaymentStruct`), kept as raw values
    #[serde(default)]
    pub pay_trans_payment: Option<Vec<Value>>,
}
