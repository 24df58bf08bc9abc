//! Audit logging demonstration.
//!
//! This example shows the full flow an application goes through:
//! 1. Load configuration and build a request descriptor
//! 2. Execute the call with any HTTP client (simulated here)
//! 3. Hand the finished exchange to the audit builder
//! 4. Do the same for a legacy SOAP call that faulted
//!
//! Run with: `RUST_LOG=allegro_audit=debug cargo run --example audit_rest_call`

use allegro_api_sdk::audit::{Context, LogFactory, RestExchange, SoapExchange};
use allegro_api_sdk::request::{build_http_request, GetOfferEventsRequestV1};
use allegro_api_sdk::soap::{SoapCall, SoapFault};
use allegro_api_sdk::{AccessToken, AppCredentials, Environment};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Audit Logging Example ===\n");

    let credentials = AppCredentials::new("demo-client", "demo-secret");
    let audit = LogFactory::tracing(&credentials);
    let token = AccessToken::from_parts("header.payload.signature", Default::default());

    // Scenario 1: successful REST call
    println!("--- Scenario 1: REST call ---");

    let descriptor = GetOfferEventsRequestV1::new().with_param("limit", "10");
    let request = match build_http_request(&descriptor, Environment::Sandbox, &token) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("could not build request: {}", e);
            return;
        }
    };
    println!("Request: {} {}", request.method(), request.uri());

    let response = http::Response::builder()
        .status(200)
        .header("Content-Type", "application/vnd.allegro.public.v1+json")
        .body(br#"{"offerEvents":[]}"#.to_vec())
        .expect("static response is valid");

    let exchange = RestExchange::new(request).with_response(response);
    let record = audit.build(&exchange.clone().into(), Context::new());
    println!("Record: {}", record);
    println!("Fingerprint: {}", record.request_hash().unwrap_or("<none>"));
    audit.log(&exchange.into(), Context::new());

    // Scenario 2: faulted SOAP call with a business annotation
    println!("\n--- Scenario 2: SOAP fault ---");

    let call = SoapCall::new()
        .with_request("<SOAP-ENV:Envelope><ns1:DoMyBillingRequest/></SOAP-ENV:Envelope>")
        .with_request_headers("POST /service.php HTTP/1.1\r\nSOAPAction: \"#doMyBilling\"")
        .with_response("<SOAP-ENV:Fault/>");
    let exchange = SoapExchange::capture(&call)
        .with_fault(SoapFault::new("ERR_INVALID_SESSION_HANDLE", "Session expired"));

    let mut extra = Context::new();
    extra.insert("transactionId".to_string(), json!("tx-2024-0001"));

    let record = audit.build(&exchange.clone().into(), extra.clone());
    println!("Record: {}", record);
    audit.log(&exchange.into(), extra);

    println!("\n=== Done ===");
}
