use crate::config::config;
use crate::http::headers::{HeaderInit, HeaderStore};
use crate::http::{HttpMethod, write_header_lines};

/// Common HTTP request headers
/// This enum defines the set of headers that can be explicitly set on an
/// [`HttpRequest`] through its safe wrapper API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestHeader {
    Host,
    Accept,
    UserAgent,
    ContentLength,
    ContentType,
}

impl RequestHeader {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestHeader::Host => "Host",
            RequestHeader::Accept => "Accept",
            RequestHeader::UserAgent => "User-Agent",
            RequestHeader::ContentLength => "Content-Length",
            RequestHeader::ContentType => "Content-Type",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: String,

    // headers
    pub headers: HeaderStore,
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a request with headers built from `init`.
    ///
    /// Configured default request headers are added afterwards, only for
    /// names `init` did not provide.
    pub fn new(method: HttpMethod, uri: &str, init: impl Into<HeaderInit>) -> Self {
        let mut headers = HeaderStore::with_init(init);
        headers.fill_missing(&config().request_defaults());

        Self {
            method,
            uri: uri.to_string(),
            headers,
            body: Vec::new(),
        }
    }

    /// Sets a request header constrained to the allowed [`RequestHeader`] variants.
    ///
    /// This method acts as a safe wrapper around [`HeaderStore::set`],
    /// ensuring that only headers explicitly supported by [`RequestHeader`]
    /// can be added through this API.
    ///
    /// No validation is performed on the header value itself.
    pub fn set_header(&mut self, h: RequestHeader, value: &str) {
        self.headers.set(h.as_str(), value);
    }

    /// Replaces the body and keeps `Content-Length` in sync.
    pub fn set_body(&mut self, body: Vec<u8>) {
        self.set_header(RequestHeader::ContentLength, &body.len().to_string());
        self.body = body;
    }

    pub fn build_head(&self) -> String {
        // <METHOD> <uri> HTTP/1.1\r\n
        // <header_name>: <header_value>\r\n
        // ...
        // \r\n
        let mut head = format!("{} {} HTTP/1.1\r\n", self.method.as_str(), self.uri);
        write_header_lines(&self.headers, &mut head);
        head.push_str("\r\n");
        head
    }
}
