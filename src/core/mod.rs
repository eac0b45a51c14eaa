//! Parsing core: raw document schema and the parse pipeline

pub mod parser;
pub mod schema;

pub use parser::{parse_collection, parse_collection_from_path};
