//! Core metadata types: kinds, records, and the descriptors they attach to
//!
//! All types use 'static lifetimes so fixtures can be plain `const` items.

use super::field_type::{ElementTarget, FieldType, FieldValue, FieldValueOwned, Retention};
use super::report::{KindId, ResolvedField, ResolvedRecord};

// ============================================================================
// Kind schemas
// ============================================================================

/// Schema of one field of a metadata kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    /// Human-readable label used by renderers
    pub label: &'static str,
    pub field_type: FieldType,
    /// `None` means the field is required at the attachment site
    pub default: Option<FieldValue>,
}

impl FieldSchema {
    pub const fn required(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            default: None,
        }
    }

    pub const fn optional(
        name: &'static str,
        label: &'static str,
        field_type: FieldType,
        default: FieldValue,
    ) -> Self {
        Self {
            name,
            label,
            field_type,
            default: Some(default),
        }
    }

    pub const fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Declaration of a metadata kind: its fields and where it may appear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataKindSchema {
    pub id: &'static str,
    pub fields: &'static [FieldSchema],
    pub targets: &'static [ElementTarget],
    /// More than one record of this kind may sit on the same element
    pub repeatable: bool,
    pub retention: Retention,
    /// Type-level records of this kind are visible on subtypes
    pub inherited: bool,
}

impl MetadataKindSchema {
    pub fn kind_id(&self) -> KindId {
        KindId::new(self.id)
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn allows(&self, target: ElementTarget) -> bool {
        self.targets.contains(&target)
    }

    pub fn is_runtime_visible(&self) -> bool {
        self.retention == Retention::Runtime
    }
}

// ============================================================================
// Records
// ============================================================================

/// A single `name = value` pair written at the attachment site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAssignment {
    pub name: &'static str,
    pub value: FieldValue,
}

impl FieldAssignment {
    pub const fn text(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            value: FieldValue::Text(value),
        }
    }

    pub const fn integer(name: &'static str, value: i64) -> Self {
        Self {
            name,
            value: FieldValue::Integer(value),
        }
    }

    pub const fn boolean(name: &'static str, value: bool) -> Self {
        Self {
            name,
            value: FieldValue::Boolean(value),
        }
    }

    pub const fn text_list(name: &'static str, value: &'static [&'static str]) -> Self {
        Self {
            name,
            value: FieldValue::TextList(value),
        }
    }
}

/// Metadata record attached to a type or operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataRecord {
    pub kind: &'static MetadataKindSchema,
    /// Only the fields written at the attachment site
    pub values: &'static [FieldAssignment],
}

impl MetadataRecord {
    pub const fn new(kind: &'static MetadataKindSchema, values: &'static [FieldAssignment]) -> Self {
        Self { kind, values }
    }

    /// Marker record without any fields
    pub const fn marker(kind: &'static MetadataKindSchema) -> Self {
        Self { kind, values: &[] }
    }

    pub fn kind_id(&self) -> &'static str {
        self.kind.id
    }

    /// Value of a field: the supplied one, otherwise the schema default
    pub fn value(&self, name: &str) -> Option<FieldValue> {
        self.values
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value)
            .or_else(|| self.kind.field(name).and_then(|f| f.default))
    }

    /// Owned copy with every schema field filled in, in schema order
    pub fn resolve(&self) -> ResolvedRecord {
        let fields = self
            .kind
            .fields
            .iter()
            .filter_map(|schema| {
                self.value(schema.name).map(|value| ResolvedField {
                    name: schema.name.to_string(),
                    label: schema.label.to_string(),
                    value: FieldValueOwned::from(&value),
                })
            })
            .collect();

        ResolvedRecord {
            kind: self.kind.id.to_string(),
            fields,
        }
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// Trait for anything metadata can be attached to
pub trait Annotated {
    /// Name of the element (type or operation name)
    fn element_name(&self) -> &'static str;

    fn target(&self) -> ElementTarget;

    /// All records in declaration order
    fn attached_metadata(&self) -> &'static [MetadataRecord];

    /// Records of one kind, in declaration order
    fn metadata_of(&self, kind_id: &str) -> Vec<&'static MetadataRecord> {
        self.attached_metadata()
            .iter()
            .filter(|r| r.kind.id == kind_id)
            .collect()
    }

    fn is_annotated_with(&self, kind_id: &str) -> bool {
        self.attached_metadata().iter().any(|r| r.kind.id == kind_id)
    }
}

/// Named callable member of a type
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub metadata: &'static [MetadataRecord],
    /// Performs the operation and returns the line it produces
    pub handler: fn() -> String,
}

impl Annotated for OperationDescriptor {
    fn element_name(&self) -> &'static str {
        self.name
    }

    fn target(&self) -> ElementTarget {
        ElementTarget::Operation
    }

    fn attached_metadata(&self) -> &'static [MetadataRecord] {
        self.metadata
    }
}

/// Static description of a type and its declared operations
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub metadata: &'static [MetadataRecord],
    /// Declared operations; slice order is the declaration order
    pub operations: &'static [OperationDescriptor],
    pub supertype: Option<&'static TypeDescriptor>,
}

impl TypeDescriptor {
    pub fn declared_operations(&self) -> &'static [OperationDescriptor] {
        self.operations
    }

    pub fn operation(&self, name: &str) -> Option<&'static OperationDescriptor> {
        self.operations.iter().find(|op| op.name == name)
    }

    /// Supertypes from the closest to the most distant
    pub fn ancestors(&self) -> impl Iterator<Item = &'static TypeDescriptor> {
        std::iter::successors(self.supertype, |t| t.supertype)
    }
}

impl Annotated for TypeDescriptor {
    fn element_name(&self) -> &'static str {
        self.name
    }

    fn target(&self) -> ElementTarget {
        ElementTarget::Type
    }

    fn attached_metadata(&self) -> &'static [MetadataRecord] {
        self.metadata
    }
}
