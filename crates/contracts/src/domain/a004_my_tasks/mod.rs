//! Repeatable markers demo

pub mod metadata;
pub mod service;

pub use metadata::TYPE_DESCRIPTOR;
pub use service::MyTasks;
