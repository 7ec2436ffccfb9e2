//! Utilities: logging setup and request extractors

pub mod json;
pub mod logger;
pub mod query;

pub use json::JsonBody;
pub use logger::init_logger_with_file;
pub use query::QueryParams;
