//! Subtype of OrderService that declares no `Service` marker of its own

pub mod metadata;
pub mod service;

pub use metadata::TYPE_DESCRIPTOR;
pub use service::ExpressOrderService;
