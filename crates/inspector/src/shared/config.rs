use serde::Deserialize;
use std::path::PathBuf;

use crate::scenarios::Scenario;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    pub level: String,
    /// Also write logs to target/logs/inspector.log
    #[serde(default = "default_true")]
    pub file: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    pub scenarios: Vec<Scenario>,
}

fn default_true() -> bool {
    true
}

/// Where the configuration was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Embedded => write!(f, "embedded default"),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[output]
format = "text"

[logging]
level = "warn"
file = true

[demo]
scenarios = ["built_ins", "custom_annotations", "repeatable"]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// Runs before logging is set up, so the source is returned instead of logged.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let config = parse_config(&contents)?;
                return Ok((config, ConfigSource::File(config_path)));
            }
        }
    }

    Ok((parse_config(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file);
        assert_eq!(
            config.demo.scenarios,
            vec![
                Scenario::BuiltIns,
                Scenario::CustomAnnotations,
                Scenario::Repeatable
            ]
        );
    }

    #[test]
    fn test_optional_keys_use_defaults() {
        let config = parse_config(
            r#"
[output]

[logging]
level = "debug"

[demo]
scenarios = ["repeatable"]
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.logging.file);
        assert_eq!(config.demo.scenarios, vec![Scenario::Repeatable]);
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        let result = parse_config(
            r#"
[output]
format = "json"

[logging]
level = "info"

[demo]
scenarios = ["reflection"]
"#,
        );
        assert!(result.is_err());
    }
}
