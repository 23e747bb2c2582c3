//! Metadata types for describing types, operations and the records attached to them
//!
//! Everything declared here is compile-time data: kinds, records and
//! descriptors are `const` items with 'static lifetimes, and a scan only reads
//! them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::a002_order_service::TYPE_DESCRIPTOR;
//! use contracts::shared::metadata::Annotated;
//!
//! for op in TYPE_DESCRIPTOR.declared_operations() {
//!     for record in op.metadata_of("Action") {
//!         println!("{}: {:?}", op.name, record.value("priority"));
//!     }
//! }
//! ```

mod field_type;
mod report;
mod types;
mod validation;

pub use field_type::{ElementTarget, FieldType, FieldValue, FieldValueOwned, Retention};
pub use report::{
    KindId,
    KindRecords,
    OperationFinding,
    ResolvedField,
    ResolvedRecord,
    TypeScanReport,
};
pub use types::{
    Annotated,
    FieldAssignment,
    FieldSchema,
    MetadataKindSchema,
    MetadataRecord,
    OperationDescriptor,
    TypeDescriptor,
};
pub use validation::{validate_element, validate_type};
