//! Core data models for the contact book

pub mod contact;

pub use contact::{is_valid_email, is_valid_phone, to_title_case, Contact, ContactValidationError};
