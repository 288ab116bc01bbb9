pub mod folder;

pub use folder::validate_folder;
