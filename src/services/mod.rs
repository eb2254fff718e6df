//! Service layer for the contact book
//!
//! The service layer provides business logic on top of the storage layer and
//! the search core, handling validation, persistence and auditing.

pub mod contact;

pub use contact::ContactService;
