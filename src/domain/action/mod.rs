//! Request-facing half of an action: the descriptor a client renders, and the
//! validation of what it sends back.
mod descriptor;
mod params;
mod validation;

pub use descriptor::*;
pub use params::*;
pub use validation::*;
