mod types;

pub use types::{ConfigError, ListingError, ValidationError};
