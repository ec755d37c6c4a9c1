pub mod error;
pub mod file;
pub mod http;
pub mod source;
pub mod static_source;

pub use error::SourceError;
pub use file::FilePlacesSource;
pub use http::HttpPlacesSource;
pub use source::{validate_places, PlacesSource};
pub use static_source::{madrid_places, StaticPlacesSource};
