mod api;
pub use api::*;

mod transaction;
pub use transaction::*;
