mod action;
pub use action::*;

mod params;
pub use params::*;

mod transaction;
pub use transaction::*;

mod app_state;
pub use app_state::*;

mod error;
pub use error::*;
