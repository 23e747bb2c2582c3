//! Metadata scanner
//!
//! Walks a type's declared operations and collects the attached records whose
//! kind the caller asked for. A scan never mutates anything and either returns
//! a complete report or fails before producing one.

mod error;

pub use error::ScanError;

use std::collections::BTreeSet;

use contracts::shared::metadata::{
    ElementTarget, KindId, KindRecords, MetadataKindSchema, MetadataRecord, OperationFinding,
    ResolvedRecord, TypeDescriptor, TypeScanReport,
};

use crate::shared::metadata_registry::MetadataRegistry;

/// Set of metadata kinds a caller recognizes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindSet(BTreeSet<KindId>);

impl KindSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(kinds: &[&MetadataKindSchema]) -> Self {
        let mut set = Self::new();
        for kind in kinds {
            set.insert(kind);
        }
        set
    }

    pub fn insert(&mut self, kind: &MetadataKindSchema) {
        self.0.insert(kind.kind_id());
    }

    pub fn contains(&self, kind_id: &str) -> bool {
        self.0.contains(kind_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct MetadataScanner<'r> {
    registry: &'r MetadataRegistry,
}

impl<'r> MetadataScanner<'r> {
    pub fn new(registry: &'r MetadataRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a type and kind names through the registry, then scan
    pub fn scan<S: AsRef<str>>(
        &self,
        type_name: &str,
        kind_names: &[S],
    ) -> Result<TypeScanReport, ScanError> {
        let ty = self.registry.resolve_type(type_name)?;
        let recognized = self.registry.kind_set(kind_names)?;
        Ok(self.scan_type(ty, &recognized))
    }

    /// Scan one type for the recognized kinds
    pub fn scan_type(&self, ty: &TypeDescriptor, recognized: &KindSet) -> TypeScanReport {
        if recognized.is_empty() {
            tracing::debug!(type_name = ty.name, "no kinds recognized, report will be empty");
        }
        let type_level = Self::type_level_record(ty, recognized);

        let mut findings = Vec::new();
        for op in ty.declared_operations() {
            let kinds = Self::collect_kinds(op.metadata, recognized);
            if kinds.is_empty() {
                tracing::trace!(type_name = ty.name, operation = op.name, "no recognized metadata");
                continue;
            }

            tracing::debug!(
                type_name = ty.name,
                operation = op.name,
                kinds = kinds.len(),
                "recognized metadata found"
            );
            findings.push(OperationFinding {
                operation: op.name.to_string(),
                kinds,
            });
        }

        tracing::info!(
            type_name = ty.name,
            recognized = recognized.len(),
            findings = findings.len(),
            "scan complete"
        );

        TypeScanReport {
            type_name: ty.name.to_string(),
            type_level,
            findings,
        }
    }

    fn is_visible(record: &MetadataRecord, recognized: &KindSet, target: ElementTarget) -> bool {
        record.kind.is_runtime_visible()
            && record.kind.allows(target)
            && recognized.contains(record.kind.id)
    }

    /// First recognized type-level record; inherited kinds are looked up on supertypes
    fn type_level_record(ty: &TypeDescriptor, recognized: &KindSet) -> Option<ResolvedRecord> {
        let declared = ty
            .metadata
            .iter()
            .find(|r| Self::is_visible(r, recognized, ElementTarget::Type));
        if let Some(record) = declared {
            return Some(record.resolve());
        }

        for ancestor in ty.ancestors() {
            let inherited = ancestor
                .metadata
                .iter()
                .find(|r| r.kind.inherited && Self::is_visible(r, recognized, ElementTarget::Type));
            if let Some(record) = inherited {
                tracing::debug!(
                    type_name = ty.name,
                    from = ancestor.name,
                    kind = record.kind.id,
                    "type-level metadata inherited"
                );
                return Some(record.resolve());
            }
        }

        None
    }

    /// Group recognized records by kind, keeping declaration order
    fn collect_kinds(records: &[MetadataRecord], recognized: &KindSet) -> Vec<KindRecords> {
        let mut groups: Vec<KindRecords> = Vec::new();

        for record in records
            .iter()
            .filter(|r| Self::is_visible(r, recognized, ElementTarget::Operation))
        {
            let resolved = record.resolve();
            match groups.iter_mut().find(|g| g.kind == record.kind.id) {
                Some(group) => group.records.push(resolved),
                None => groups.push(KindRecords {
                    kind: record.kind.id.to_string(),
                    records: vec![resolved],
                }),
            }
        }

        groups
    }
}
