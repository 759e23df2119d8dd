//! External catalog adapters.

mod http_source;

pub use http_source::{HttpMetadataSource, HttpMetadataSourceConfig};
