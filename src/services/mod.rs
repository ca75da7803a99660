//! Storage handoff for serialized documents.

pub mod store;

pub use store::{DirectoryStore, DocumentStore};
