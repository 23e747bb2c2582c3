//! Demo types and their attached metadata
//!
//! Each module holds the real Rust type (`service.rs`) and its static
//! descriptor (`metadata.rs`).

pub mod a001_built_in_annotations;
pub mod a002_order_service;
pub mod a003_product_service;
pub mod a004_my_tasks;
pub mod a005_express_order_service;

use crate::shared::metadata::TypeDescriptor;

/// Every demo type, in registration order
pub const ALL_TYPES: &[&TypeDescriptor] = &[
    &a001_built_in_annotations::TYPE_DESCRIPTOR,
    &a002_order_service::TYPE_DESCRIPTOR,
    &a003_product_service::TYPE_DESCRIPTOR,
    &a004_my_tasks::TYPE_DESCRIPTOR,
    &a005_express_order_service::TYPE_DESCRIPTOR,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::{validate_type, Annotated, FieldValue};

    #[test]
    fn test_all_fixtures_conform() {
        for ty in ALL_TYPES {
            assert!(validate_type(ty).is_ok(), "{}: {:?}", ty.name, validate_type(ty));
        }
    }

    #[test]
    fn test_cancel_order_priority_defaults_to_one() {
        let op = a002_order_service::TYPE_DESCRIPTOR
            .operation("cancelOrder")
            .unwrap();
        let action = op.metadata_of("Action")[0];
        assert_eq!(action.value("priority"), Some(FieldValue::Integer(1)));
    }

    #[test]
    fn test_express_inherits_from_order_service() {
        let ty = a005_express_order_service::TYPE_DESCRIPTOR;
        let ancestors: Vec<&str> = ty.ancestors().map(|t| t.name).collect();
        assert_eq!(ancestors, vec!["OrderService"]);
        assert!(!ty.is_annotated_with("Service"));
    }

    #[test]
    fn test_handlers_run() {
        let op = a004_my_tasks::TYPE_DESCRIPTOR
            .operation("performMultipleTasks")
            .unwrap();
        assert_eq!((op.handler)(), "Performing multiple tasks.");
    }
}
