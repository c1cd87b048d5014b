//! Brood user accounts and tokens

pub mod service;

pub use service::{FieldUpdate, TokenUpdate, UserService};
