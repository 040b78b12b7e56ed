pub mod config;
pub mod logging;

pub mod digest;
pub mod error;
pub mod headers;

pub use error::MetadataError;
pub use headers::{extension_from_mime, FilenameMatch, HeaderMetadata};
