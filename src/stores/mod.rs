//! In-memory collection index and its lazy loader

mod collection;
pub mod collection_store;

pub use collection::Collection;
pub use collection_store::CollectionStore;
