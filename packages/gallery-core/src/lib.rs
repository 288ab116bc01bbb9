pub mod config;
pub mod constants;
pub mod errors;
pub mod listing;
pub mod model;
pub mod sections;
pub mod transform;
pub mod validation;

// 公開API
pub use config::GalleryConfig;
pub use constants::{
    DEFAULT_QUALITY, FULL_SCREEN_QUALITY, FULL_SCREEN_WIDTH, SUPPORTED_EXTENSIONS,
    THUMBNAIL_WIDTH,
};
pub use errors::{ConfigError, ListingError, ValidationError};
pub use listing::{FolderListingClient, ListingShape, RemoteFileRecord, normalize_folder_path};
pub use model::{GalleryImage, RenderedImage};
pub use sections::{DEFAULT_SECTIONS, GallerySection, find_section};
pub use transform::{TransformParams, UrlTransformer};
pub use validation::validate_folder;
