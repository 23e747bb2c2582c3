use crate::kinds::TASK;
use crate::shared::metadata::{
    FieldAssignment, MetadataRecord, OperationDescriptor, TypeDescriptor,
};

use super::service;

/// Type descriptor for MyTasks
pub const TYPE_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "MyTasks",
    metadata: &[],
    operations: &[OperationDescriptor {
        name: "performMultipleTasks",
        metadata: &[
            MetadataRecord::new(
                &TASK,
                &[
                    FieldAssignment::text("description", "Task 1"),
                    FieldAssignment::integer("priority", 3),
                ],
            ),
            MetadataRecord::new(
                &TASK,
                &[
                    FieldAssignment::text("description", "Task 2"),
                    FieldAssignment::integer("priority", 2),
                ],
            ),
        ],
        handler: service::perform_multiple_tasks,
    }],
    supertype: None,
};
