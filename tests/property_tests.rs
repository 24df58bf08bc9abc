//! Property tests for the audit builder.
//!
//! These check the invariants that hold for every exchange: fingerprints
//! are deterministic, severity follows the status/fault rules, and record
//! building never panics on arbitrary input.

use allegro_api_sdk::audit::{
    rest_fingerprint, soap_fingerprint, Context, LogFactory, Severity, NO_STATUS,
};
use allegro_api_sdk::soap::{parse_header_block, SoapCall, SoapFault};
use allegro_api_sdk::{AppCredentials, AuditConfig};
use proptest::prelude::*;
use serde_json::{json, Value};

fn factory() -> LogFactory {
    LogFactory::disabled(&AppCredentials::new("prop-client", "s")).with_config(AuditConfig {
        capture_call_site: false,
        ..AuditConfig::default()
    })
}

fn arb_method() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("GET"), Just("POST"), Just("PUT"), Just("DELETE"), Just("PATCH")]
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("(/[a-z0-9-]{1,12}){1,4}").unwrap()
}

fn arb_query() -> impl Strategy<Value = String> {
    prop::string::string_regex("([a-z.]{1,8}=[a-z0-9]{1,8}(&[a-z.]{1,8}=[a-z0-9]{1,8}){0,3})?")
        .unwrap()
}

proptest! {
    /// Property: the REST fingerprint is a pure function of its inputs.
    #[test]
    fn proptest_rest_fingerprint_deterministic(
        method in arb_method(),
        path in arb_path(),
        query in arb_query(),
        body in prop::string::string_regex("[ -~]{0,40}").unwrap(),
    ) {
        let body = Value::from(body);
        prop_assert_eq!(
            rest_fingerprint(method, &path, &query, &body),
            rest_fingerprint(method, &path, &query, &body)
        );
    }

    /// Property: changing the path changes the fingerprint.
    #[test]
    fn proptest_rest_fingerprint_sensitive_to_path(
        method in arb_method(),
        path in arb_path(),
        suffix in "[a-z]{1,5}",
    ) {
        let other = format!("{}{}", path, suffix);
        prop_assert_ne!(
            rest_fingerprint(method, &path, "", &Value::Null),
            rest_fingerprint(method, &other, "", &Value::Null)
        );
    }

    /// Property: the SOAP fingerprint depends only on the request payload.
    #[test]
    fn proptest_soap_hash_ignores_headers(
        payload in prop::string::string_regex("[ -~]{0,80}").unwrap(),
        action_a in "[a-zA-Z]{1,20}",
        action_b in "[a-zA-Z]{1,20}",
    ) {
        let a = SoapCall::new()
            .with_request(payload.clone())
            .with_request_headers(format!("SOAPAction: {}", action_a));
        let b = SoapCall::new()
            .with_request(payload.clone())
            .with_request_headers(format!("SOAPAction: {}", action_b))
            .with_response("<r/>");

        let ra = factory().build_soap(&a, None, Context::new());
        let rb = factory().build_soap(&b, Some(&SoapFault::new("E", "e")), Context::new());

        prop_assert_eq!(ra.request_hash(), rb.request_hash());
        let expected = soap_fingerprint(&payload);
        prop_assert_eq!(ra.request_hash(), Some(expected.as_str()));
    }

    /// Property: severity is DEBUG exactly for statuses up to 299.
    #[test]
    fn proptest_rest_severity_follows_status(status in 100u16..600) {
        let request = http::Request::get("https://api.allegro.pl/me").body(Vec::new()).unwrap();
        let response = http::Response::builder().status(status).body(Vec::new()).unwrap();

        let record = factory().build_rest(&request, Some(&response), Context::new());

        let expected = if status <= 299 { Severity::Debug } else { Severity::Error };
        prop_assert_eq!(record.severity(), expected);
        prop_assert_eq!(record.summary(), format!("GET /me - {}", status));
    }

    /// Property: SOAP severity is ERROR iff a fault is supplied.
    #[test]
    fn proptest_soap_severity_follows_fault(faulted in any::<bool>()) {
        let fault = SoapFault::new("E", "m");
        let record = factory().build_soap(
            &SoapCall::new(),
            if faulted { Some(&fault) } else { None },
            Context::new(),
        );
        let expected = if faulted { Severity::Error } else { Severity::Debug };
        prop_assert_eq!(record.severity(), expected);
    }

    /// Property: arbitrary bodies and headers never make record building panic,
    /// and every record carries the stable base schema.
    #[test]
    fn proptest_rest_never_panics(
        body in prop::collection::vec(any::<u8>(), 0..128),
        content_type in prop_oneof![
            Just("application/json"),
            Just("text/plain"),
            Just("application/vnd.allegro.public.v1+json"),
        ],
        authorization in "[ -~]{0,40}",
        with_response in any::<bool>(),
    ) {
        let request = http::Request::post("https://api.allegro.pl/sale/offers")
            .header("Content-Type", content_type)
            .header("Authorization", authorization.as_str())
            .body(body.clone())
            .unwrap();
        let response = http::Response::builder()
            .status(500)
            .header("Content-Type", content_type)
            .body(body)
            .unwrap();

        let record = factory().build_rest(
            &request,
            if with_response { Some(&response) } else { None },
            Context::new(),
        );

        for key in [
            "clientId", "userId", "requestMethod", "requestUrl", "requestUriPath",
            "requestHeaders", "requestQuery", "requestBody", "responseStatusCode",
            "responseHeaders", "responseBody", "requestHash",
        ] {
            prop_assert!(record.field(key).is_some(), "missing {}", key);
        }
        prop_assert_eq!(record.severity(), Severity::Error);
        if !with_response {
            prop_assert_eq!(record.field("responseStatusCode").cloned(), Some(json!(NO_STATUS)));
        }
    }

    /// Property: extra fields always win over computed ones.
    #[test]
    fn proptest_extra_fields_override(value in "[a-z0-9]{1,16}") {
        let request = http::Request::get("https://api.allegro.pl/me").body(Vec::new()).unwrap();
        let mut extra = Context::new();
        extra.insert("userId".to_string(), json!(value.clone()));
        extra.insert("requestHash".to_string(), json!(value.clone()));

        let record = factory().build_rest(&request, None, extra);

        prop_assert_eq!(record.field("userId").cloned(), Some(json!(value.clone())));
        prop_assert_eq!(record.request_hash(), Some(value.as_str()));
    }

    /// Property: with several SOAPAction lines, the last one names the method.
    #[test]
    fn proptest_header_block_last_wins(
        actions in prop::collection::vec("[a-zA-Z#]{1,12}", 1..5),
    ) {
        let raw = actions
            .iter()
            .map(|a| format!("SOAPAction: {}", a))
            .collect::<Vec<_>>()
            .join("\r\n");

        let headers = parse_header_block(&raw);
        prop_assert_eq!(headers.get("SOAPAction"), actions.last().map(String::as_str));
    }
}
