//! Transport adapter
//!
//! [`ApiCaller`] binds a base URL to the [`HttpTransport`](crate::ports::HttpTransport)
//! port; [`RequestParts`] collects headers, query parameters and body.

pub mod caller;
pub mod request;

pub use caller::{decode, ApiCaller};
pub use request::{join_url, RequestParts};
