//! Registry of all declared types and metadata kinds
//!
//! Built once from the `'static` fixtures in `contracts`, validated on
//! construction and read-only afterwards.

use contracts::shared::metadata::{validate_type, Annotated, MetadataKindSchema, TypeDescriptor};
use once_cell::sync::OnceCell;

use crate::scanner::{KindSet, ScanError};

// ─── Структуры ──────────────────────────────────────────────────────────────

pub struct MetadataRegistry {
    types: Vec<&'static TypeDescriptor>,
    kinds: Vec<&'static MetadataKindSchema>,
}

// ─── Глобальный экземпляр ───────────────────────────────────────────────────

static REGISTRY: OnceCell<MetadataRegistry> = OnceCell::new();

/// Get the global registry, building it on first use
pub fn global() -> Result<&'static MetadataRegistry, ScanError> {
    REGISTRY.get_or_try_init(|| {
        MetadataRegistry::build(contracts::domain::ALL_TYPES, contracts::kinds::ALL_KINDS)
    })
}

// ─── Реализация ─────────────────────────────────────────────────────────────

impl MetadataRegistry {
    /// Register types and kinds, rejecting anything that breaks a kind schema
    pub fn build(
        types: &[&'static TypeDescriptor],
        kinds: &[&'static MetadataKindSchema],
    ) -> Result<Self, ScanError> {
        let mut registry = Self {
            types: Vec::with_capacity(types.len()),
            kinds: Vec::with_capacity(kinds.len()),
        };

        for &kind in kinds {
            registry.register_kind(kind)?;
        }
        for &ty in types {
            registry.register_type(ty)?;
        }

        tracing::debug!(
            types = registry.types.len(),
            kinds = registry.kinds.len(),
            "metadata registry built"
        );
        Ok(registry)
    }

    fn register_kind(&mut self, kind: &'static MetadataKindSchema) -> Result<(), ScanError> {
        if self.kinds.iter().any(|k| k.id == kind.id) {
            return Err(ScanError::InvalidRecord(format!(
                "kind '{}' registered twice",
                kind.id
            )));
        }
        self.kinds.push(kind);
        Ok(())
    }

    fn register_type(&mut self, ty: &'static TypeDescriptor) -> Result<(), ScanError> {
        if self.types.iter().any(|t| t.name == ty.name) {
            return Err(ScanError::InvalidRecord(format!(
                "type '{}' registered twice",
                ty.name
            )));
        }

        validate_type(ty).map_err(ScanError::InvalidRecord)?;

        // Every attached kind must be one the registry knows about, supertypes included
        let records = ty
            .attached_metadata()
            .iter()
            .chain(ty.declared_operations().iter().flat_map(|op| op.metadata.iter()))
            .chain(ty.ancestors().flat_map(|a| a.metadata.iter()));
        for record in records {
            if self.kind(record.kind.id).is_none() {
                return Err(ScanError::InvalidRecord(format!(
                    "{}: kind '{}' is not registered",
                    ty.name, record.kind.id
                )));
            }
        }

        self.types.push(ty);
        Ok(())
    }

    pub fn types(&self) -> &[&'static TypeDescriptor] {
        &self.types
    }

    pub fn kinds(&self) -> &[&'static MetadataKindSchema] {
        &self.kinds
    }

    pub fn kind(&self, id: &str) -> Option<&'static MetadataKindSchema> {
        self.kinds.iter().find(|k| k.id == id).copied()
    }

    pub fn resolve_type(&self, name: &str) -> Result<&'static TypeDescriptor, ScanError> {
        self.types
            .iter()
            .find(|t| t.name == name)
            .copied()
            .ok_or_else(|| ScanError::not_found("type", name))
    }

    pub fn resolve_kind(&self, id: &str) -> Result<&'static MetadataKindSchema, ScanError> {
        self.kind(id).ok_or_else(|| ScanError::not_found("metadata kind", id))
    }

    /// Resolve kind names into a set; any unknown name fails the whole call
    pub fn kind_set<S: AsRef<str>>(&self, names: &[S]) -> Result<KindSet, ScanError> {
        let kinds = names
            .iter()
            .map(|name| self.resolve_kind(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KindSet::of(&kinds))
    }
}
