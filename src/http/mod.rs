pub mod headers;
pub mod request;
pub mod response;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Connect,
    Options,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }
}

/// Renders `Name: value\r\n` lines for every header, in order.
///
/// Headers are written under their original casing with their joined value,
/// except `Set-Cookie` which gets one line per cookie.
pub(crate) fn write_header_lines(store: &headers::HeaderStore, out: &mut String) {
    for (key, name, values) in store.raw_lines() {
        if key == headers::SET_COOKIE {
            for cookie in values {
                out.push_str(&format!("{}: {}\r\n", name, cookie));
            }
        } else {
            out.push_str(&format!("{}: {}\r\n", name, values.join(headers::SEPARATOR)));
        }
    }
}
