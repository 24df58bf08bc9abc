//! SOAP collaborator surface.
//!
//! The SDK does not speak SOAP itself. A generic SOAP client performs the
//! call; afterwards the audit builder only needs what that client kept
//! about the last exchange, exposed through [`SoapTrace`].

mod headers;
pub mod wsdl;

pub use headers::{parse_header_block, HeaderBlock};

/// Read access to the last raw exchange performed by a SOAP client.
pub trait SoapTrace {
    /// Raw XML of the last request envelope.
    fn last_request(&self) -> Option<&str>;
    /// Raw header block of the last request (CRLF-separated `Name: Value`).
    fn last_request_headers(&self) -> Option<&str>;
    /// Raw XML of the last response envelope.
    fn last_response(&self) -> Option<&str>;
    /// Raw header block of the last response.
    fn last_response_headers(&self) -> Option<&str>;
}

/// Owned snapshot of a SOAP exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoapCall {
    request: Option<String>,
    request_headers: Option<String>,
    response: Option<String>,
    response_headers: Option<String>,
}

impl SoapCall {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures everything `trace` currently exposes.
    pub fn capture<T: SoapTrace + ?Sized>(trace: &T) -> Self {
        Self {
            request: trace.last_request().map(str::to_owned),
            request_headers: trace.last_request_headers().map(str::to_owned),
            response: trace.last_response().map(str::to_owned),
            response_headers: trace.last_response_headers().map(str::to_owned),
        }
    }

    /// Sets the request envelope.
    pub fn with_request(mut self, xml: impl Into<String>) -> Self {
        self.request = Some(xml.into());
        self
    }

    /// Sets the request header block.
    pub fn with_request_headers(mut self, raw: impl Into<String>) -> Self {
        self.request_headers = Some(raw.into());
        self
    }

    /// Sets the response envelope.
    pub fn with_response(mut self, xml: impl Into<String>) -> Self {
        self.response = Some(xml.into());
        self
    }

    /// Sets the response header block.
    pub fn with_response_headers(mut self, raw: impl Into<String>) -> Self {
        self.response_headers = Some(raw.into());
        self
    }
}

impl SoapTrace for SoapCall {
    fn last_request(&self) -> Option<&str> {
        self.request.as_deref()
    }

    fn last_request_headers(&self) -> Option<&str> {
        self.request_headers.as_deref()
    }

    fn last_response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    fn last_response_headers(&self) -> Option<&str> {
        self.response_headers.as_deref()
    }
}

/// A SOAP fault returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapFault {
    /// `faultcode`, e.g. `ERR_INVALID_SESSION`
    pub code: String,
    /// `faultstring`
    pub message: String,
}

impl SoapFault {
    /// Creates a fault.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
