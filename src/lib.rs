//! custard-kit
//!
//! Authoring library for custard documents, the JSON keyboard definitions read
//! by the azooKey input method. Build a [`models::Custard`] tree, then
//! serialize it or hand it to a [`services::DocumentStore`].

// Module declarations
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{CustardError, Result};
