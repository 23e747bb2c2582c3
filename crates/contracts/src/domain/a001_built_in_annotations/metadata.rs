use crate::kinds::{DEPRECATED, OVERRIDE, SUPPRESS_WARNINGS};
use crate::shared::metadata::{
    FieldAssignment, MetadataRecord, OperationDescriptor, TypeDescriptor,
};

use super::service;

/// Type descriptor for BuiltInAnnotations
pub const TYPE_DESCRIPTOR: TypeDescriptor = TypeDescriptor {
    name: "BuiltInAnnotations",
    metadata: &[],
    operations: &[
        OperationDescriptor {
            name: "toString",
            metadata: &[MetadataRecord::marker(&OVERRIDE)],
            handler: service::to_string,
        },
        OperationDescriptor {
            name: "oldMethod",
            metadata: &[MetadataRecord::marker(&DEPRECATED)],
            handler: service::old_method,
        },
        OperationDescriptor {
            name: "uncheckedWarningExample",
            metadata: &[MetadataRecord::new(
                &SUPPRESS_WARNINGS,
                &[FieldAssignment::text_list("value", &["unchecked"])],
            )],
            handler: service::unchecked_warning_example,
        },
    ],
    supertype: None,
};
