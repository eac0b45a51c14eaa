//! Collection location configuration

pub mod paths;

pub use paths::{collection_location, is_available};
