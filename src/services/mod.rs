//! # Services Module
//!
//! External collaborators of the action server. Currently only the Solana RPC
//! provider used to read rent, blockhash and account state.

mod provider;
pub use provider::*;
