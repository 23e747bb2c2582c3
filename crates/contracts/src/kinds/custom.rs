//! User-defined markers for the service demo

use crate::shared::metadata::{
    ElementTarget, FieldSchema, FieldType, FieldValue, MetadataKindSchema, Retention,
};

/// Marks a type as a service; subtypes inherit it
pub const SERVICE: MetadataKindSchema = MetadataKindSchema {
    id: "Service",
    fields: &[FieldSchema::required("name", "Name", FieldType::Text)],
    targets: &[ElementTarget::Type],
    repeatable: false,
    retention: Retention::Runtime,
    inherited: true,
};

pub const ACTION: MetadataKindSchema = MetadataKindSchema {
    id: "Action",
    fields: &[
        FieldSchema::required("description", "Description", FieldType::Text),
        FieldSchema::optional("priority", "Priority", FieldType::Integer, FieldValue::Integer(1)),
    ],
    targets: &[ElementTarget::Operation],
    repeatable: false,
    retention: Retention::Runtime,
    inherited: false,
};

pub const DEPRECATED_FEATURE: MetadataKindSchema = MetadataKindSchema {
    id: "DeprecatedFeature",
    fields: &[
        FieldSchema::required("reason", "Reason", FieldType::Text),
        FieldSchema::optional(
            "alternative",
            "Alternative",
            FieldType::Text,
            FieldValue::Text("None"),
        ),
    ],
    targets: &[ElementTarget::Operation],
    repeatable: false,
    retention: Retention::Runtime,
    inherited: false,
};
