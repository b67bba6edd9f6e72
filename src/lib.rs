//! Solana Actions server for transfers and compressed token mints.
//!
//! Exposes action descriptors and builds partially signed transactions that
//! the caller's wallet completes and submits.

pub mod api;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;
