//! Owned scan report types
//!
//! A report is produced fresh for every scan and handed to a renderer, so all
//! types here own their data and derive Serialize for the JSON output.

use serde::{Deserialize, Serialize};

use super::field_type::FieldValueOwned;

/// Identity of a metadata kind (e.g. "Action")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KindId(pub String);

impl KindId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for KindId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for KindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One field of a resolved record (defaults already applied)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedField {
    pub name: String,
    pub label: String,
    pub value: FieldValueOwned,
}

/// Metadata record with every schema field present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRecord {
    pub kind: String,
    pub fields: Vec<ResolvedField>,
}

impl ResolvedRecord {
    pub fn get(&self, name: &str) -> Option<&FieldValueOwned> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}

/// All records of one kind found on an operation, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindRecords {
    pub kind: String,
    pub records: Vec<ResolvedRecord>,
}

/// Operation that carries at least one recognized record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationFinding {
    pub operation: String,
    /// Kind groups ordered by first appearance on the operation
    pub kinds: Vec<KindRecords>,
}

impl OperationFinding {
    pub fn records_of(&self, kind: &str) -> &[ResolvedRecord] {
        self.kinds
            .iter()
            .find(|k| k.kind == kind)
            .map(|k| k.records.as_slice())
            .unwrap_or(&[])
    }
}

/// Result of scanning one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScanReport {
    pub type_name: String,
    pub type_level: Option<ResolvedRecord>,
    /// Findings in operation declaration order
    pub findings: Vec<OperationFinding>,
}

impl TypeScanReport {
    pub fn finding(&self, operation: &str) -> Option<&OperationFinding> {
        self.findings.iter().find(|f| f.operation == operation)
    }

    pub fn is_empty(&self) -> bool {
        self.type_level.is_none() && self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(description: &str, priority: i64) -> ResolvedRecord {
        ResolvedRecord {
            kind: "Action".to_string(),
            fields: vec![
                ResolvedField {
                    name: "description".to_string(),
                    label: "Description".to_string(),
                    value: FieldValueOwned::Text(description.to_string()),
                },
                ResolvedField {
                    name: "priority".to_string(),
                    label: "Priority".to_string(),
                    value: FieldValueOwned::Integer(priority),
                },
            ],
        }
    }

    #[test]
    fn test_records_of_unknown_kind_is_empty() {
        let finding = OperationFinding {
            operation: "processOrder".to_string(),
            kinds: vec![KindRecords {
                kind: "Action".to_string(),
                records: vec![action("Processes the order", 2)],
            }],
        };
        assert_eq!(finding.records_of("Action").len(), 1);
        assert!(finding.records_of("DeprecatedFeature").is_empty());
    }

    #[test]
    fn test_report_json_shape() {
        let report = TypeScanReport {
            type_name: "OrderService".to_string(),
            type_level: None,
            findings: vec![OperationFinding {
                operation: "processOrder".to_string(),
                kinds: vec![KindRecords {
                    kind: "Action".to_string(),
                    records: vec![action("Processes the order", 2)],
                }],
            }],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type_name"], "OrderService");
        assert!(json["type_level"].is_null());
        let field = &json["findings"][0]["kinds"][0]["records"][0]["fields"][1];
        assert_eq!(field["name"], "priority");
        assert_eq!(field["value"], 2);
    }
}
