//! The audit log builder.
//!
//! [`LogFactory`] turns a finished REST or SOAP exchange into exactly one
//! [`AuditRecord`] and hands it to the configured logger. Nothing in here
//! returns an error or panics on bad input: every fallible step has a
//! defined fallback value.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderMap;
use serde_json::{json, Value};

use super::call_site;
use super::exchange::Exchange;
use super::fingerprint::{rest_fingerprint, soap_fingerprint};
use super::record::{AuditRecord, Context, Severity};
use crate::config::{AppCredentials, AuditConfig};
use crate::logging::{AuditLogger, TracingLogger};
use crate::soap::{parse_header_block, SoapFault, SoapTrace};
use crate::token::{bearer_from_authorization, JwtClaimsParser, TokenParser};

/// Summary/status placeholder when no HTTP response was received.
pub const NO_STATUS: &str = "NO_STATUS";
/// Method placeholder when the SOAP request carried no `SOAPAction` header.
pub const UNKNOWN_METHOD: &str = "UNKNOWN_METHOD";
/// Header naming the SOAP operation.
pub const SOAP_ACTION_HEADER: &str = "SOAPAction";

/// Builds and emits audit records for REST and SOAP exchanges.
///
/// The logger is optional: a factory without one still builds records on
/// request ([`build`](Self::build)) but every `log*` call is a no-op.
///
/// # Example
///
/// ```
/// use allegro_api_sdk::audit::{AuditTrail, Context, LogFactory, Severity};
/// use allegro_api_sdk::AppCredentials;
///
/// let trail = AuditTrail::new();
/// let factory = LogFactory::new(&AppCredentials::new("app-1", "secret"), Some(&trail));
///
/// let request = http::Request::get("https://api.allegro.pl/sale/offer-events")
///     .body(Vec::new())
///     .unwrap();
/// let response = http::Response::builder()
///     .status(200)
///     .header("Content-Type", "application/json")
///     .body(br#"{"items":[]}"#.to_vec())
///     .unwrap();
///
/// factory.log_rest(&request, Some(&response), Context::new());
///
/// let record = trail.last().unwrap();
/// assert_eq!(record.severity(), Severity::Debug);
/// assert_eq!(record.summary(), "GET /sale/offer-events - 200");
/// ```
#[derive(Debug)]
pub struct LogFactory<L = TracingLogger, P = JwtClaimsParser> {
    client_id: String,
    parser: P,
    logger: Option<L>,
    config: AuditConfig,
}

impl LogFactory<TracingLogger, JwtClaimsParser> {
    /// A factory that emits through `tracing`.
    pub fn tracing(credentials: &AppCredentials) -> Self {
        Self::new(credentials, Some(TracingLogger))
    }

    /// A factory with no logger; `log*` calls do nothing.
    pub fn disabled(credentials: &AppCredentials) -> Self {
        Self::new(credentials, None)
    }
}

impl<L: AuditLogger> LogFactory<L, JwtClaimsParser> {
    /// Creates a factory reading token claims with [`JwtClaimsParser`].
    pub fn new(credentials: &AppCredentials, logger: Option<L>) -> Self {
        Self {
            client_id: credentials.client_id.clone(),
            parser: JwtClaimsParser,
            logger,
            config: AuditConfig::default(),
        }
    }
}

impl<L: AuditLogger, P: TokenParser> LogFactory<L, P> {
    /// Replaces the token parser.
    pub fn with_parser<Q: TokenParser>(self, parser: Q) -> LogFactory<L, Q> {
        LogFactory {
            client_id: self.client_id,
            parser,
            logger: self.logger,
            config: self.config,
        }
    }

    /// Replaces the audit settings.
    pub fn with_config(mut self, config: AuditConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether a logger is configured.
    pub fn is_enabled(&self) -> bool {
        self.logger.is_some()
    }

    /// Builds and emits the record for `exchange`.
    pub fn log(&self, exchange: &Exchange, extra: Context) {
        if let Some(logger) = &self.logger {
            emit(logger, self.build(exchange, extra));
        }
    }

    /// Builds and emits the record for a REST call.
    pub fn log_rest(
        &self,
        request: &http::Request<Vec<u8>>,
        response: Option<&http::Response<Vec<u8>>>,
        extra: Context,
    ) {
        if let Some(logger) = &self.logger {
            emit(logger, self.build_rest(request, response, extra));
        }
    }

    /// Builds and emits the record for a SOAP call.
    pub fn log_soap<T>(&self, trace: &T, fault: Option<&SoapFault>, extra: Context)
    where
        T: SoapTrace + ?Sized,
    {
        if let Some(logger) = &self.logger {
            emit(logger, self.build_soap(trace, fault, extra));
        }
    }

    /// Builds the record for `exchange` without emitting it.
    pub fn build(&self, exchange: &Exchange, extra: Context) -> AuditRecord {
        match exchange {
            Exchange::Rest(rest) => self.build_rest(&rest.request, rest.response.as_ref(), extra),
            Exchange::Soap(soap) => self.build_soap(&soap.call, soap.fault.as_ref(), extra),
        }
    }

    /// Builds the record for a REST call.
    pub fn build_rest(
        &self,
        request: &http::Request<Vec<u8>>,
        response: Option<&http::Response<Vec<u8>>>,
        extra: Context,
    ) -> AuditRecord {
        let method = request.method().as_str();
        let uri = request.uri();
        let path = uri.path();
        let query = uri.query().unwrap_or_default();
        let status = response.map(|r| r.status().as_u16());

        let request_body = decode_body(request.body(), is_json(request.headers()));
        let response_body = response.map(|r| decode_body(r.body(), is_json(r.headers())));

        let mut context = Context::new();
        context.insert("clientId".into(), json!(self.client_id));
        context.insert("userId".into(), json!(self.user_id(request.headers())));
        context.insert("requestMethod".into(), json!(method));
        context.insert("requestUrl".into(), json!(uri.to_string()));
        context.insert("requestUriPath".into(), json!(path));
        context.insert("requestHeaders".into(), headers_to_json(request.headers()));
        context.insert("requestQuery".into(), json!(query));
        context.insert(
            "requestHash".into(),
            json!(rest_fingerprint(method, path, query, &request_body)),
        );
        context.insert("requestBody".into(), request_body);
        context.insert(
            "responseStatusCode".into(),
            status.map_or_else(|| json!(NO_STATUS), |code| json!(code)),
        );
        context.insert(
            "responseHeaders".into(),
            response.map_or(Value::Null, |r| headers_to_json(r.headers())),
        );
        if let Some((code, message)) = response_body.as_ref().and_then(first_error) {
            context.insert("faultCode".into(), code);
            context.insert("faultString".into(), message);
        }
        context.insert("responseBody".into(), response_body.unwrap_or(Value::Null));
        self.attach_call_site(&mut context);
        context.extend(extra);

        let status_text = status.map_or_else(|| NO_STATUS.to_string(), |code| code.to_string());
        AuditRecord::new(
            Severity::for_status(status),
            format!("{} {} - {}", method, path, status_text),
            context,
        )
    }

    /// Builds the record for a SOAP call.
    pub fn build_soap<T>(&self, trace: &T, fault: Option<&SoapFault>, extra: Context) -> AuditRecord
    where
        T: SoapTrace + ?Sized,
    {
        let method = soap_action(trace.last_request_headers())
            .unwrap_or_else(|| UNKNOWN_METHOD.to_string());

        let mut context = Context::new();
        context.insert("requestMethod".into(), json!(method));
        context.insert("request".into(), json!(trace.last_request()));
        context.insert("requestHeaders".into(), json!(trace.last_request_headers()));
        context.insert(
            "requestHash".into(),
            json!(soap_fingerprint(trace.last_request().unwrap_or_default())),
        );
        context.insert("response".into(), json!(trace.last_response()));
        context.insert("responseHeaders".into(), json!(trace.last_response_headers()));
        context.insert("faultCode".into(), json!(fault.map(|f| &f.code)));
        context.insert("faultString".into(), json!(fault.map(|f| &f.message)));
        self.attach_call_site(&mut context);
        context.extend(extra);

        let outcome = if fault.is_some() { "ERROR" } else { "OK" };
        AuditRecord::new(
            Severity::for_fault(fault.is_some()),
            format!("{} - {}", method, outcome),
            context,
        )
    }

    fn user_id(&self, headers: &HeaderMap) -> Option<String> {
        let authorization = header_line(headers, AUTHORIZATION.as_str());
        let bearer = bearer_from_authorization(&authorization)?;

        match self.parser.parse(bearer) {
            Ok(token) => token.user_id(),
            Err(error) => {
                tracing::trace!(%error, "ignoring unparseable bearer token");
                None
            }
        }
    }

    fn attach_call_site(&self, context: &mut Context) {
        if !self.config.capture_call_site {
            return;
        }
        if let Some(frames) = call_site::capture(self.config.max_call_site_frames) {
            context.insert("backtrace".into(), frames);
        }
    }
}

fn emit<L: AuditLogger>(logger: &L, record: AuditRecord) {
    let (severity, summary, context) = record.into_parts();
    logger.log(severity, &summary, &context);
}

/// All values of `name` joined with `", "`, empty when absent.
fn header_line(headers: &HeaderMap, name: &str) -> String {
    headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Substring sniff: any `Content-Type` mentioning `json` counts as JSON.
fn is_json(headers: &HeaderMap) -> bool {
    header_line(headers, CONTENT_TYPE.as_str()).contains("json")
}

/// Headers as `{name: [values...]}`, values in the order they were added.
fn headers_to_json(headers: &HeaderMap) -> Value {
    let mut map = Context::new();
    for name in headers.keys() {
        let values: Vec<Value> = headers
            .get_all(name)
            .iter()
            .map(|value| Value::from(String::from_utf8_lossy(value.as_bytes()).into_owned()))
            .collect();
        map.insert(name.as_str().to_string(), Value::Array(values));
    }
    Value::Object(map)
}

fn decode_body(body: &[u8], json: bool) -> Value {
    let raw = || Value::from(String::from_utf8_lossy(body).into_owned());

    if !json {
        return raw();
    }
    if body.is_empty() {
        return Value::Null;
    }

    try_decode_json(body).unwrap_or_else(|error| {
        tracing::trace!(%error, "body labelled as JSON did not decode, keeping raw text");
        raw()
    })
}

fn try_decode_json(body: &[u8]) -> Result<Value, serde_json::Error> {
    serde_json::from_slice(body)
}

/// `code` and `message` of the first entry of a non-empty `errors` list.
fn first_error(body: &Value) -> Option<(Value, Value)> {
    let first = body.get("errors")?.as_array()?.first()?;
    let field = |name: &str| first.get(name).cloned().unwrap_or(Value::Null);
    Some((field("code"), field("message")))
}

fn soap_action(raw_headers: Option<&str>) -> Option<String> {
    parse_header_block(raw_headers?)
        .get(SOAP_ACTION_HEADER)
        .map(str::to_owned)
}
