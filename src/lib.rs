//! Case-insensitive, order-preserving HTTP header container.
//!
//! [`HeaderStore`] keeps every header under its lowercased name while
//! remembering the casing it was first created with. Repeated values are
//! joined with `", "` when read back, except through
//! [`HeaderStore::get_set_cookie`], which hands out `Set-Cookie` values one
//! by one.
//!
//! ```
//! use headerstore::HeaderStore;
//!
//! let mut headers = HeaderStore::new();
//! headers.append("Set-Cookie", "a=1");
//! headers.append("set-cookie", "b=2");
//!
//! assert_eq!(headers.get("SET-COOKIE").as_deref(), Some("a=1, b=2"));
//! assert_eq!(headers.get_set_cookie(), ["a=1", "b=2"]);
//! ```
mod log;

pub mod config;
pub mod http;

pub use http::headers::{HeaderInit, HeaderSource, HeaderStore, HeaderValues};
