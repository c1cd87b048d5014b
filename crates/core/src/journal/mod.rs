pub mod requests;
pub mod service;

pub use requests::{EntryContext, NewEntry, SearchQuery};
pub use service::JournalService;
