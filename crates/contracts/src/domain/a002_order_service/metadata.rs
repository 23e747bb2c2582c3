use crate::kinds::{ACTION, DEPRECATED_FEATURE, SERVICE};
use crate::shared::metadata::{
    FieldAssignment, MetadataRecord, OperationDescriptor, TypeDescriptor,
};

use super::service;

/// Type descriptor for OrderService
pub const TYPE_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "OrderService",
    metadata: &[MetadataRecord::new(
        &SERVICE,
        &[FieldAssignment::text("name", "OrderService")],
    )],
    operations: &[
        OperationDescriptor {
            name: "processOrder",
            metadata: &[MetadataRecord::new(
                &ACTION,
                &[
                    FieldAssignment::text("description", "Processes the order"),
                    FieldAssignment::integer("priority", 2),
                ],
            )],
            handler: service::process_order,
        },
        OperationDescriptor {
            name: "cancelOrder",
            metadata: &[
                // priority left to the schema default
                MetadataRecord::new(
                    &ACTION,
                    &[FieldAssignment::text("description", "Cancels the order")],
                ),
                MetadataRecord::new(
                    &DEPRECATED_FEATURE,
                    &[
                        FieldAssignment::text("reason", "This feature is obsolete"),
                        FieldAssignment::text("alternative", "Use cancelOrderV2()"),
                    ],
                ),
            ],
            handler: service::cancel_order,
        },
    ],
    supertype: None,
};
