//! Contact search core
//!
//! - `trie`: the prefix index over contact names
//! - `store`: the ordered in-memory contact collection
//! - `service`: keeps both in sync and answers queries
//!
//! Everything here is synchronous and infallible: a query with no match is an
//! empty result, not an error.

pub mod service;
pub mod store;
pub mod trie;

pub use service::SearchService;
pub use store::{ContactStore, MemoryContactStore};
pub use trie::{NameIndex, PrefixIndex};
