//! The two shapes of call the audit builder understands.

use crate::soap::{SoapCall, SoapFault, SoapTrace};

/// A completed REST call.
///
/// `response` is `None` when the HTTP client produced no response at all
/// (connection failure, timeout).
#[derive(Debug, Clone)]
pub struct RestExchange {
    /// The request as sent
    pub request: http::Request<Vec<u8>>,
    /// The response, if one was received
    pub response: Option<http::Response<Vec<u8>>>,
}

impl RestExchange {
    /// An exchange that never got a response.
    pub fn new(request: http::Request<Vec<u8>>) -> Self {
        Self {
            request,
            response: None,
        }
    }

    /// Attaches the response.
    pub fn with_response(mut self, response: http::Response<Vec<u8>>) -> Self {
        self.response = Some(response);
        self
    }
}

/// A completed SOAP call.
#[derive(Debug, Clone, Default)]
pub struct SoapExchange {
    /// Raw payloads and header blocks of the call
    pub call: SoapCall,
    /// The fault, if the service raised one
    pub fault: Option<SoapFault>,
}

impl SoapExchange {
    /// Snapshots `trace` as a successful call.
    pub fn capture<T: SoapTrace + ?Sized>(trace: &T) -> Self {
        Self {
            call: SoapCall::capture(trace),
            fault: None,
        }
    }

    /// Marks the call as faulted.
    pub fn with_fault(mut self, fault: SoapFault) -> Self {
        self.fault = Some(fault);
        self
    }
}

/// One audited interaction.
#[derive(Debug, Clone)]
pub enum Exchange {
    /// REST over HTTP
    Rest(RestExchange),
    /// Legacy SOAP WebAPI
    Soap(SoapExchange),
}

impl From<RestExchange> for Exchange {
    fn from(exchange: RestExchange) -> Self {
        Exchange::Rest(exchange)
    }
}

impl From<SoapExchange> for Exchange {
    fn from(exchange: SoapExchange) -> Self {
        Exchange::Soap(exchange)
    }
}
