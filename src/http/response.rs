use crate::config::config;
use crate::http::headers::HeaderStore;
use crate::http::status::HttpStatus;
use crate::http::write_header_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseHeader {
    ContentLength,
    ContentType,
    Connection,
    Server,
    Location,
    CacheControl,
}

impl ResponseHeader {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseHeader::ContentType => "Content-Type",
            ResponseHeader::ContentLength => "Content-Length",
            ResponseHeader::Connection => "Connection",
            ResponseHeader::Server => "Server",
            ResponseHeader::Location => "Location",
            ResponseHeader::CacheControl => "Cache-Control",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: HttpStatus,
    pub headers: HeaderStore,
    pub body: Vec<u8>,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse {
    /// Creates a `200 OK` response carrying the `Server` header and the
    /// configured default response headers.
    pub fn new() -> Self {
        let cfg = config();
        let mut headers = HeaderStore::new();
        headers.set(ResponseHeader::Server.as_str(), cfg.server_name.as_str());
        headers.fill_missing(&cfg.response_defaults());

        Self {
            status: HttpStatus::Ok,
            headers,
            body: Vec::new(),
        }
    }

    pub fn with_status(status: HttpStatus) -> Self {
        Self {
            status,
            ..Self::new()
        }
    }

    pub fn set_header(&mut self, h: ResponseHeader, value: &str) {
        self.headers.set(h.as_str(), value);
    }

    /// Appends a value to any header, see [`HeaderStore::append`].
    pub fn append_header(&mut self, name: &str, value: &str) {
        self.headers.append(name, value);
    }

    /// Adds a cookie. Every cookie is written on its own `Set-Cookie` line.
    pub fn set_cookie(&mut self, cookie: &str) {
        self.headers.append("Set-Cookie", cookie);
    }

    /// Replaces the body and keeps `Content-Length` in sync.
    pub fn set_body(&mut self, body: Vec<u8>, content_type: &str) {
        self.set_header(ResponseHeader::ContentLength, &body.len().to_string());
        self.set_header(ResponseHeader::ContentType, content_type);
        self.body = body;
    }

    pub fn build_headers(&self) -> String {
        // HTTP/1.1 <status> <reason>\r\n
        // <header_name>: <header_value>\r\n
        // ...
        // \r\n
        let mut head = format!(
            "HTTP/1.1 {} {}\r\n",
            self.status.code(),
            self.status.reason()
        );
        write_header_lines(&self.headers, &mut head);
        head.push_str("\r\n");
        head
    }
}
