// Utils compartidos

pub mod constants;
pub mod url;

pub use constants::*;
pub use url::*;
