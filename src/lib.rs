//! Title and Open Graph metadata extraction from HTML byte streams.
//!
//! The core is [`scanner::extract`]: one forward pass over the tokens of a
//! document, no tree construction. The remaining modules wrap it in a small
//! HTTP service that accepts document bodies and answers with JSON.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod scanner;
pub mod state;

pub use models::{LinkPreview, MetaProperty, MetaRecord};
pub use scanner::{extract, scan};
