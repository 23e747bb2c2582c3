use crate::kinds::SERVICE;
use crate::shared::metadata::{
    FieldAssignment, MetadataRecord, OperationDescriptor, TypeDescriptor,
};

use super::service;

/// Type descriptor for ProductService
///
/// `manageInventory` carries no metadata at all.
pub const TYPE_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "ProductService",
    metadata: &[MetadataRecord::new(
        &SERVICE,
        &[FieldAssignment::text("name", "ProductService")],
    )],
    operations: &[OperationDescriptor {
        name: "manageInventory",
        metadata: &[],
        handler: service::manage_inventory,
    }],
    supertype: None,
};
