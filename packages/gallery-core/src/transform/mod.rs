pub mod params;
pub mod url;

pub use params::TransformParams;
pub use url::UrlTransformer;
