//! Brood groups and memberships

pub mod service;

pub use service::GroupService;
