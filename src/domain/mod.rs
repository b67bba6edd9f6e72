//! # Domain Module
//!
//! Core domain logic of the action server:
//!
//! * Action descriptors and request validation
//! * Token program and compressed-token instruction construction
//! * The transaction build pipeline

mod action;
pub use action::*;

mod compression;
pub use compression::*;

mod token;
pub use token::*;

mod transaction;
pub use transaction::*;
