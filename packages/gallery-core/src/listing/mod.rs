pub mod client;
pub mod normalize;
pub mod record;
pub mod shape;

pub use client::{FolderListingClient, basic_auth_header, normalize_folder_path};
pub use normalize::{is_supported_image, normalize_records, strip_extension};
pub use record::RemoteFileRecord;
pub use shape::ListingShape;
