pub mod serde_helpers;
pub mod short_path;
pub mod url_validator;

pub use short_path::validate_short_path;
pub use url_validator::validate_destination;
