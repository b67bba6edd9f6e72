//! The transaction build pipeline.
//!
//! A build runs four stages in order:
//!
//! * validate the caller's account and resolve the query parameters,
//! * fetch the network state the strategy needs (rent, token account
//!   existence, blockhash),
//! * sequence the instructions in dependency order,
//! * finalize the envelope: fee payer, blockhash, ephemeral signatures.
//!
//! Every failure aborts the whole build; no partial transaction is returned.

mod builder;
mod finalizer;
mod network_state;
mod sequencer;
mod step;

pub use builder::*;
pub use finalizer::*;
pub use network_state::*;
pub use sequencer::*;
pub use step::*;
