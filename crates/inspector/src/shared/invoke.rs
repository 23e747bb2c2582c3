//! Runs declared operations the way tooling would
//!
//! The only built-in marker this reacts to is `Deprecated`: calling such an
//! operation is allowed but logged as a warning.

use contracts::kinds::DEPRECATED;
use contracts::shared::metadata::{Annotated, TypeDescriptor};

use crate::scanner::ScanError;

/// Invoke an operation by name and return the line it produced
pub fn invoke(ty: &TypeDescriptor, operation: &str) -> Result<String, ScanError> {
    let op = ty
        .operation(operation)
        .ok_or_else(|| ScanError::not_found("operation", format!("{}.{}", ty.name, operation)))?;

    for record in op.metadata_of(DEPRECATED.id) {
        let resolved = record.resolve();
        let since = resolved.get("since").and_then(|v| v.as_text()).unwrap_or("");
        tracing::warn!(
            type_name = ty.name,
            operation = op.name,
            since,
            "calling deprecated operation"
        );
    }

    let output = (op.handler)();
    tracing::debug!(type_name = ty.name, operation = op.name, "operation invoked");
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{a001_built_in_annotations, a002_order_service};

    #[test]
    fn test_invoke_runs_handler() {
        let out = invoke(&a002_order_service::TYPE_DESCRIPTOR, "processOrder").unwrap();
        assert_eq!(out, "Processing order...");
    }

    #[test]
    fn test_invoke_deprecated_still_runs() {
        let out = invoke(&a001_built_in_annotations::TYPE_DESCRIPTOR, "oldMethod").unwrap();
        assert_eq!(out, "This method is deprecated and should not be used.");
    }

    #[test]
    fn test_invoke_unknown_operation() {
        let err = invoke(&a002_order_service::TYPE_DESCRIPTOR, "refundOrder").unwrap_err();
        assert_eq!(err.to_string(), "operation not found: OrderService.refundOrder");
    }
}
