//! Demo scenarios run by the binary
//!
//! Each scenario names the types it inspects and the kinds it recognizes;
//! output is returned as one string so `main` decides where it goes.

use anyhow::Context;
use serde::Deserialize;

use crate::scanner::MetadataScanner;
use crate::shared::config::OutputFormat;
use crate::shared::invoke::invoke;
use crate::shared::metadata_registry::MetadataRegistry;
use crate::shared::render::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Call the operations marked with built-in markers, then scan them
    BuiltIns,
    /// Scan services for user-defined markers
    CustomAnnotations,
    /// Scan an operation with stacked markers
    Repeatable,
}

impl Scenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuiltIns => "built_ins",
            Self::CustomAnnotations => "custom_annotations",
            Self::Repeatable => "repeatable",
        }
    }

    pub fn type_names(&self) -> &'static [&'static str] {
        match self {
            Self::BuiltIns => &["BuiltInAnnotations"],
            Self::CustomAnnotations => &["OrderService", "ProductService", "ExpressOrderService"],
            Self::Repeatable => &["MyTasks"],
        }
    }

    pub fn kind_names(&self) -> &'static [&'static str] {
        match self {
            Self::BuiltIns => &["Override", "Deprecated", "SuppressWarnings"],
            Self::CustomAnnotations => &["Service", "Action", "DeprecatedFeature"],
            Self::Repeatable => &["Task"],
        }
    }

    /// Operations invoked before scanning
    fn invocations(&self) -> &'static [&'static str] {
        match self {
            Self::BuiltIns => &["toString", "oldMethod", "uncheckedWarningExample"],
            Self::CustomAnnotations | Self::Repeatable => &[],
        }
    }
}

/// Run one scenario against the registry
pub fn run(
    scenario: Scenario,
    registry: &MetadataRegistry,
    format: OutputFormat,
) -> anyhow::Result<String> {
    tracing::info!(scenario = scenario.as_str(), "running scenario");

    let scanner = MetadataScanner::new(registry);
    let mut sections = Vec::new();

    for type_name in scenario.type_names() {
        let ty = registry.resolve_type(type_name)?;
        for operation in scenario.invocations() {
            sections.push(invoke(ty, operation)?);
        }
    }

    for type_name in scenario.type_names() {
        let report = scanner
            .scan(type_name, scenario.kind_names())
            .with_context(|| format!("scenario {} failed", scenario.as_str()))?;
        sections.push(render(&report, format)?);
    }

    Ok(sections.join("\n"))
}
