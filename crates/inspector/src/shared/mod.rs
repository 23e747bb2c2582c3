pub mod config;
pub mod invoke;
pub mod metadata_registry;
pub mod render;
