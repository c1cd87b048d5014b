//! # Bugout Core
//!
//! Client logic for the Brood identity service and the Spire content
//! service, with no networking code of its own.
//!
//! This crate contains:
//! - The [`HttpTransport`] port that infrastructure implements
//! - The [`ApiCaller`] adapter that builds requests and normalizes outcomes
//! - One service per resource family (users, groups, journals)
//! - The [`Bugout`] facade that forwards to those services
//!
//! ## Architecture Principles
//! - Only depends on `bugout-domain`
//! - All I/O goes through the transport port
//! - Every operation awaits exactly one request; no retries, no caching

pub mod api;
pub mod facade;
pub mod group;
pub mod journal;
pub mod ports;
pub mod selectors;
pub mod user;

pub use api::{decode, ApiCaller, RequestParts};
pub use facade::Bugout;
pub use group::GroupService;
pub use journal::{EntryContext, JournalService, NewEntry, SearchQuery};
pub use ports::{HttpRequest, HttpResponse, HttpTransport};
pub use selectors::{GroupSelector, UserSelector};
pub use user::{FieldUpdate, TokenUpdate, UserService};
