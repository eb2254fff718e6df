//! Contact Book - a terminal contact manager with prefix search
//!
//! Contacts (name, phone, email) are indexed by lowercased name in a prefix
//! trie. A search combines prefix matches on the name with substring matches
//! on phone and email.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `search`: The prefix index, the contact store and the search service
//! - `models`: The contact record and its validation rules
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `storage`: CSV file storage layer
//! - `audit`: Audit logging of added and deleted contacts
//! - `services`: Business logic layer
//! - `display`: Table formatting for terminal output
//! - `cli`: Command handlers and the console menu
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use contact_book::models::Contact;
//! use contact_book::search::{MemoryContactStore, PrefixIndex, SearchService};
//!
//! let mut book = SearchService::new(MemoryContactStore::new(), PrefixIndex::new());
//! book.add(Contact::new("Alice", "5551234567", "alice@x.com"));
//! assert_eq!(book.search("ali").len(), 1);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod search;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ContactError;
