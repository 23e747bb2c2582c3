//! Built-in markers
//!
//! In Rust the compiler already understands the real thing (`#[deprecated]`,
//! `#[allow(..)]`, trait impls). These schemas mirror them so the inspector
//! can see what tooling sees. `Override` and `SuppressWarnings` only matter at
//! compile time and are source-retained.

use crate::shared::metadata::{
    ElementTarget, FieldSchema, FieldType, FieldValue, MetadataKindSchema, Retention,
};

/// Operation implements a member declared by a supertype or trait
pub const OVERRIDE: MetadataKindSchema = MetadataKindSchema {
    id: "Override",
    fields: &[],
    targets: &[ElementTarget::Operation],
    repeatable: false,
    retention: Retention::Source,
    inherited: false,
};

/// Element should no longer be used
pub const DEPRECATED: MetadataKindSchema = MetadataKindSchema {
    id: "Deprecated",
    fields: &[
        FieldSchema::optional("since", "Since", FieldType::Text, FieldValue::Text("")),
        FieldSchema::optional(
            "for_removal",
            "For removal",
            FieldType::Boolean,
            FieldValue::Boolean(false),
        ),
    ],
    targets: &[ElementTarget::Type, ElementTarget::Operation],
    repeatable: false,
    retention: Retention::Runtime,
    inherited: false,
};

/// Compiler warnings silenced on the element
pub const SUPPRESS_WARNINGS: MetadataKindSchema = MetadataKindSchema {
    id: "SuppressWarnings",
    fields: &[FieldSchema::required("value", "Warnings", FieldType::TextList)],
    targets: &[ElementTarget::Type, ElementTarget::Operation],
    repeatable: false,
    retention: Retention::Source,
    inherited: false,
};
