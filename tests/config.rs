use headerstore::config::{HeadersConfig, config, set_config};
use headerstore::http::HttpMethod;
use headerstore::http::request::HttpRequest;
use headerstore::http::response::HttpResponse;

const CONFIG: &str = r#"
server_name = "edge/1.0"
default_request_headers = [["User-Agent", "edge"], ["Accept", "*/*"]]

[default_response_headers]
X-Frame-Options = "DENY"
Server = "ignored"
"#;

#[test]
fn test_installed_defaults() {
    let cfg = HeadersConfig::from_toml(CONFIG).unwrap();
    assert!(set_config(cfg).is_ok());
    assert!(set_config(HeadersConfig::default()).is_err());
    assert_eq!(config().server_name, "edge/1.0");

    let req = HttpRequest::new(HttpMethod::Get, "/", [("accept", "text/html")]);
    assert_eq!(
        req.build_head(),
        "GET / HTTP/1.1\r\n\
         accept: text/html\r\n\
         User-Agent: edge\r\n\
         \r\n"
    );

    let mut res = HttpResponse::new();
    res.set_cookie("a=1");
    assert_eq!(
        res.build_headers(),
        "HTTP/1.1 200 OK\r\n\
         Server: edge/1.0\r\n\
         X-Frame-Options: DENY\r\n\
         Set-Cookie: a=1\r\n\
         \r\n"
    );
}
