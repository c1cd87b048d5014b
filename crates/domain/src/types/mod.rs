//! Domain records and enumerations
//!
//! Every record is an immutable value deserialized from a service response.
//! Unknown fields are ignored; optional fields default to `None`.

pub mod group;
pub mod journal;
pub mod kinds;
pub mod scope;
pub mod timestamp;
pub mod user;

pub use group::{Group, GroupMembers, GroupUser, UserGroups};
pub use journal::{
    Journal, JournalEntries, JournalEntry, JournalEntryContent, JournalEntryTags, Journals,
    SearchResult, SearchResults,
};
pub use kinds::{HolderType, Method, Role, TokenType};
pub use scope::{JournalScopeSpec, JournalScopeSpecs, Scope, Scopes};
pub use user::{Token, User, UserShort, UserTokens};
