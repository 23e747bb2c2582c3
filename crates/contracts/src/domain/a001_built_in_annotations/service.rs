use std::fmt;

/// Demo type exercising the compiler's own markers
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltInAnnotations;

impl fmt::Display for BuiltInAnnotations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This is a BuiltInAnnotationsExample class.")
    }
}

impl BuiltInAnnotations {
    #[deprecated(note = "should not be used")]
    pub fn old_method(&self) -> String {
        "This method is deprecated and should not be used.".to_string()
    }

    #[allow(clippy::vec_init_then_push)]
    pub fn unchecked_warning_example(&self) -> String {
        let mut raw_list = Vec::new();
        raw_list.push("Suppressed warning example");
        format!("Warning suppressed: {}", raw_list[0])
    }
}

// ============================================================================
// Operation handlers
// ============================================================================

pub fn to_string() -> String {
    BuiltInAnnotations.to_string()
}

#[allow(deprecated)]
pub fn old_method() -> String {
    BuiltInAnnotations.old_method()
}

pub fn unchecked_warning_example() -> String {
    BuiltInAnnotations.unchecked_warning_example()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handlers_output() {
        assert_eq!(to_string(), "This is a BuiltInAnnotationsExample class.");
        assert_eq!(
            old_method(),
            "This method is deprecated and should not be used."
        );
        assert_eq!(
            unchecked_warning_example(),
            "Warning suppressed: Suppressed warning example"
        );
    }
}
