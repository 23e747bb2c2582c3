//! Built-in markers demo: the Rust attributes and their mirror records

pub mod metadata;
pub mod service;

pub use metadata::TYPE_DESCRIPTOR;
pub use service::BuiltInAnnotations;
