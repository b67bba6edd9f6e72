//! Constants shared across the action endpoints, the transaction pipeline and
//! the server bootstrap.

mod actions;
pub use actions::*;

mod compression;
pub use compression::*;

mod logging;
pub use logging::*;

mod server;
pub use server::*;
