mod base64;
pub use base64::*;

mod url;
pub use url::*;
