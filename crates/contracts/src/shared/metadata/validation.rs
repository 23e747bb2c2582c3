//! Conformance checks for metadata attachments
//!
//! Errors are plain strings; callers wrap them into their own error types.

use std::collections::HashSet;

use super::types::{Annotated, MetadataRecord, TypeDescriptor};

impl MetadataRecord {
    /// Check the record against its kind schema
    pub fn validate(&self) -> Result<(), String> {
        let kind = self.kind;
        let mut seen = HashSet::new();

        for assignment in self.values {
            if !seen.insert(assignment.name) {
                return Err(format!(
                    "@{}: field '{}' assigned more than once",
                    kind.id, assignment.name
                ));
            }

            let Some(schema) = kind.field(assignment.name) else {
                return Err(format!("@{}: unknown field '{}'", kind.id, assignment.name));
            };

            let actual = assignment.value.field_type();
            if actual != schema.field_type {
                return Err(format!(
                    "@{}: field '{}' expects {}, got {}",
                    kind.id,
                    schema.name,
                    schema.field_type.as_str(),
                    actual.as_str()
                ));
            }
        }

        for schema in kind.fields {
            if schema.is_required() && !seen.contains(schema.name) {
                return Err(format!(
                    "@{}: required field '{}' is missing",
                    kind.id, schema.name
                ));
            }
            if let Some(default) = schema.default {
                if default.field_type() != schema.field_type {
                    return Err(format!(
                        "@{}: default of '{}' is not {}",
                        kind.id,
                        schema.name,
                        schema.field_type.as_str()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Check every record on one element: schema, target and repeatability
pub fn validate_element<E: Annotated + ?Sized>(element: &E) -> Result<(), String> {
    let target = element.target();
    let mut kinds_seen: HashSet<&'static str> = HashSet::new();

    for record in element.attached_metadata() {
        record
            .validate()
            .map_err(|e| format!("{}: {}", element.element_name(), e))?;

        if !record.kind.allows(target) {
            return Err(format!(
                "{}: @{} cannot be attached to a {}",
                element.element_name(),
                record.kind.id,
                target.as_str()
            ));
        }

        if !kinds_seen.insert(record.kind.id) && !record.kind.repeatable {
            return Err(format!(
                "{}: @{} is not repeatable",
                element.element_name(),
                record.kind.id
            ));
        }
    }

    Ok(())
}

/// Check a type, all of its operations and its supertypes
pub fn validate_type(ty: &TypeDescriptor) -> Result<(), String> {
    validate_element(ty)?;

    let mut names = HashSet::new();
    for op in ty.declared_operations() {
        if !names.insert(op.name) {
            return Err(format!("{}: operation '{}' declared twice", ty.name, op.name));
        }
        validate_element(op).map_err(|e| format!("{}.{}", ty.name, e))?;
    }

    for ancestor in ty.ancestors() {
        validate_element(ancestor)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{
        ElementTarget, FieldAssignment, FieldSchema, FieldType, FieldValue, MetadataKindSchema,
        OperationDescriptor, Retention,
    };

    const LABEL: MetadataKindSchema = MetadataKindSchema {
        id: "Label",
        fields: &[
            FieldSchema::required("text", "Text", FieldType::Text),
            FieldSchema::optional("level", "Level", FieldType::Integer, FieldValue::Integer(0)),
        ],
        targets: &[ElementTarget::Operation],
        repeatable: false,
        retention: Retention::Runtime,
        inherited: false,
    };

    fn noop() -> String {
        String::new()
    }

    fn op(metadata: &'static [MetadataRecord]) -> OperationDescriptor {
        OperationDescriptor {
            name: "op",
            metadata,
            handler: noop,
        }
    }

    #[test]
    fn test_valid_record() {
        const RECORD: MetadataRecord =
            MetadataRecord::new(&LABEL, &[FieldAssignment::text("text", "hi")]);
        assert!(RECORD.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        const RECORD: MetadataRecord =
            MetadataRecord::new(&LABEL, &[FieldAssignment::integer("level", 3)]);
        let err = RECORD.validate().unwrap_err();
        assert!(err.contains("required field 'text'"), "{err}");
    }

    #[test]
    fn test_unknown_field() {
        const RECORD: MetadataRecord = MetadataRecord::new(
            &LABEL,
            &[
                FieldAssignment::text("text", "hi"),
                FieldAssignment::text("colour", "red"),
            ],
        );
        assert!(RECORD.validate().unwrap_err().contains("unknown field 'colour'"));
    }

    #[test]
    fn test_type_mismatch() {
        const RECORD: MetadataRecord = MetadataRecord::new(
            &LABEL,
            &[
                FieldAssignment::text("text", "hi"),
                FieldAssignment::text("level", "high"),
            ],
        );
        assert!(RECORD.validate().unwrap_err().contains("expects integer"));
    }

    #[test]
    fn test_only_fields_without_default_are_required() {
        assert!(LABEL.fields[0].is_required());
        assert!(!LABEL.fields[1].is_required());
    }

    #[test]
    fn test_default_of_wrong_type() {
        const SKEWED: MetadataKindSchema = MetadataKindSchema {
            id: "Skewed",
            fields: &[FieldSchema::optional(
                "level",
                "Level",
                FieldType::Integer,
                FieldValue::Text("high"),
            )],
            targets: &[ElementTarget::Operation],
            repeatable: false,
            retention: Retention::Runtime,
            inherited: false,
        };
        const RECORD: MetadataRecord = MetadataRecord::marker(&SKEWED);
        let err = RECORD.validate().unwrap_err();
        assert!(err.contains("default of 'level' is not integer"), "{err}");
    }

    #[test]
    fn test_duplicate_non_repeatable_kind() {
        const RECORDS: &[MetadataRecord] = &[
            MetadataRecord::new(&LABEL, &[FieldAssignment::text("text", "a")]),
            MetadataRecord::new(&LABEL, &[FieldAssignment::text("text", "b")]),
        ];
        let err = validate_element(&op(RECORDS)).unwrap_err();
        assert!(err.contains("not repeatable"), "{err}");
    }

    #[test]
    fn test_wrong_target() {
        const RECORDS: &[MetadataRecord] =
            &[MetadataRecord::new(&LABEL, &[FieldAssignment::text("text", "a")])];
        let ty = TypeDescriptor {
            name: "Broken",
            metadata: RECORDS,
            operations: &[],
            supertype: None,
        };
        let err = validate_type(&ty).unwrap_err();
        assert!(err.contains("cannot be attached to a type"), "{err}");
    }
}
