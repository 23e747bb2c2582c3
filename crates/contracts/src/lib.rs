//! Static metadata model and demo fixtures
//!
//! - **shared::metadata**: descriptors, kind schemas, records and report types
//! - **kinds**: the declared metadata kinds (built-in, custom, repeatable)
//! - **domain**: demo types with their attached metadata

pub mod domain;
pub mod kinds;
pub mod shared;
