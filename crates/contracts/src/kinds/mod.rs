//! Declared metadata kinds
//!
//! Three families, one per demo:
//! - built-in markers understood by tooling (`Override`, `Deprecated`, `SuppressWarnings`)
//! - user-defined markers with fields (`Service`, `Action`, `DeprecatedFeature`)
//! - a repeatable marker (`Task`)

pub mod builtin;
pub mod custom;
pub mod repeatable;

use crate::shared::metadata::MetadataKindSchema;

pub use builtin::{DEPRECATED, OVERRIDE, SUPPRESS_WARNINGS};
pub use custom::{ACTION, DEPRECATED_FEATURE, SERVICE};
pub use repeatable::TASK;

/// Every kind known to the system
pub const ALL_KINDS: &[&MetadataKindSchema] = &[
    &OVERRIDE,
    &DEPRECATED,
    &SUPPRESS_WARNINGS,
    &SERVICE,
    &ACTION,
    &DEPRECATED_FEATURE,
    &TASK,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_kind_ids_are_unique() {
        let ids: HashSet<&str> = ALL_KINDS.iter().map(|k| k.id).collect();
        assert_eq!(ids.len(), ALL_KINDS.len());
    }

    #[test]
    fn test_only_task_is_repeatable() {
        let repeatable: Vec<&str> = ALL_KINDS
            .iter()
            .filter(|k| k.repeatable)
            .map(|k| k.id)
            .collect();
        assert_eq!(repeatable, vec!["Task"]);
    }
}
