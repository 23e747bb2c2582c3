use crate::shared::metadata::{
    ElementTarget, FieldSchema, FieldType, FieldValue, MetadataKindSchema, Retention,
};

/// Unit of work attached to an operation; may be stacked
pub const TASK: MetadataKindSchema = MetadataKindSchema {
    id: "Task",
    fields: &[
        FieldSchema::required("description", "Description", FieldType::Text),
        FieldSchema::optional("priority", "Priority", FieldType::Integer, FieldValue::Integer(1)),
    ],
    targets: &[ElementTarget::Operation],
    repeatable: true,
    retention: Retention::Runtime,
    inherited: false,
};
