//! Console rendering of scan reports

use contracts::shared::metadata::{ResolvedRecord, TypeScanReport};

use super::config::OutputFormat;

/// Render a report in the configured format
pub fn render(report: &TypeScanReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report).join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Human-readable lines: type header, type-level fields, then every finding
///
/// # Примеры
/// ```text
/// Inspecting Service: OrderService
///    - Name: OrderService
///  - Method: processOrder
///    @Action
///      - Description: Processes the order
///      - Priority: 2
/// ```
pub fn render_text(report: &TypeScanReport) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.type_level {
        Some(record) => {
            lines.push(format!("Inspecting {}: {}", record.kind, report.type_name));
            push_fields(&mut lines, record, "   ");
        }
        None => lines.push(format!("Inspecting {}", report.type_name)),
    }

    if report.findings.is_empty() {
        lines.push(" (no recognized metadata on operations)".to_string());
    }

    for finding in &report.findings {
        lines.push(format!(" - Method: {}", finding.operation));
        for group in &finding.kinds {
            for record in &group.records {
                lines.push(format!("   @{}", group.kind));
                push_fields(&mut lines, record, "     ");
            }
        }
    }

    lines
}

fn push_fields(lines: &mut Vec<String>, record: &ResolvedRecord, indent: &str) {
    for field in &record.fields {
        lines.push(format!("{indent}- {}: {}", field.label, field.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{a002_order_service, a004_my_tasks};
    use contracts::kinds::{ACTION, DEPRECATED_FEATURE, SERVICE, TASK};

    use crate::scanner::{KindSet, MetadataScanner};
    use crate::shared::metadata_registry;

    fn scan_order_service() -> TypeScanReport {
        MetadataScanner::new(metadata_registry::global().unwrap()).scan_type(
            &a002_order_service::TYPE_DESCRIPTOR,
            &KindSet::of(&[&SERVICE, &ACTION, &DEPRECATED_FEATURE]),
        )
    }

    #[test]
    fn test_render_text_order_service() {
        let lines = render_text(&scan_order_service());
        assert_eq!(
            lines,
            vec![
                "Inspecting Service: OrderService",
                "   - Name: OrderService",
                " - Method: processOrder",
                "   @Action",
                "     - Description: Processes the order",
                "     - Priority: 2",
                " - Method: cancelOrder",
                "   @Action",
                "     - Description: Cancels the order",
                "     - Priority: 1",
                "   @DeprecatedFeature",
                "     - Reason: This feature is obsolete",
                "     - Alternative: Use cancelOrderV2()",
            ]
        );
    }

    #[test]
    fn test_render_text_repeated_records() {
        let report = MetadataScanner::new(metadata_registry::global().unwrap())
            .scan_type(&a004_my_tasks::TYPE_DESCRIPTOR, &KindSet::of(&[&TASK]));
        let lines = render_text(&report);
        assert_eq!(lines[0], "Inspecting MyTasks");
        assert_eq!(lines.iter().filter(|l| l.trim() == "@Task").count(), 2);
        assert!(lines.contains(&"     - Description: Task 1".to_string()));
    }

    #[test]
    fn test_render_json() {
        let json = render(&scan_order_service(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type_level"]["kind"], "Service");
        assert_eq!(value["findings"].as_array().unwrap().len(), 2);
    }
}
