use crate::domain::a002_order_service;
use crate::kinds::ACTION;
use crate::shared::metadata::{
    FieldAssignment, MetadataRecord, OperationDescriptor, TypeDescriptor,
};

use super::service;

/// Type descriptor for ExpressOrderService
///
/// The `Service` record comes from OrderService through inheritance.
pub const TYPE_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "ExpressOrderService",
    metadata: &[],
    operations: &[OperationDescriptor {
        name: "expediteOrder",
        metadata: &[MetadataRecord::new(
            &ACTION,
            &[
                FieldAssignment::text("description", "Processes the order ahead of the queue"),
                FieldAssignment::integer("priority", 5),
            ],
        )],
        handler: service::expedite_order,
    }],
    supertype: Some(&a002_order_service::TYPE_DESCRIPTOR),
};
