//! Configuration for the action server.
//!
//! Everything is read from the environment (optionally seeded from a `.env`
//! file) once at start-up. Invalid values fail start-up with a [`ConfigError`].

mod server_config;
pub use server_config::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid public key for {name}: {value} ({reason})")]
    InvalidPubkey {
        name: String,
        value: String,
        reason: String,
    },
    #[error("Invalid URL for {name}: {value} ({reason})")]
    InvalidUrl {
        name: String,
        value: String,
        reason: String,
    },
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}
