//! Pipeline configuration: structs, YAML parsing, and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest meaningful similarity: message term (1.0) + category bonus
/// (0.3) + keyword overlap (0.2). Thresholds above this merge nothing.
const MAX_SIMILARITY: f64 = 1.5;

// ── Config errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(String),

    #[error("validation error: {field}: {message}")]
    Validation { field: String, message: String },
}

impl From<serde_yaml_ng::Error> for ConfigError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e.to_string())
    }
}

// ── Top-level config ───────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    #[serde(default)]
    pub pipeline: PipelineSettings,

    #[serde(default)]
    pub log: LogConfig,
}

impl PipelineConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.pipeline.dedup_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > MAX_SIMILARITY {
            return Err(ConfigError::Validation {
                field: "pipeline.dedup_threshold".to_string(),
                message: format!("must be in (0, {MAX_SIMILARITY}], got {threshold}"),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineSettings {
    /// Minimum composite similarity at which two alerts are considered
    /// duplicates. The additive score tops out around 1.5 for exact
    /// duplicates; 0.75 matches the original deployment.
    #[serde(default = "default_dedup_threshold")]
    pub dedup_threshold: f64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            dedup_threshold: default_dedup_threshold(),
        }
    }
}

fn default_dedup_threshold() -> f64 {
    0.75
}

// ── Logging config ─────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_empty_config() {
        let config = PipelineConfig::from_yaml("{}").unwrap();
        assert_eq!(config.pipeline.dedup_threshold, 0.75);
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.log.format, LogFormat::Text);
    }

    #[test]
    fn parses_full_config() {
        let yaml = "
pipeline:
  dedup_threshold: 0.7
log:
  level: debug
  format: json
";
        let config = PipelineConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.pipeline.dedup_threshold, 0.7);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        for yaml in [
            "pipeline:\n  dedup_threshold: 0.0",
            "pipeline:\n  dedup_threshold: -0.5",
            "pipeline:\n  dedup_threshold: 1.6",
            "pipeline:\n  dedup_threshold: .nan",
        ] {
            let result = PipelineConfig::from_yaml(yaml);
            assert!(
                matches!(result, Err(ConfigError::Validation { .. })),
                "{yaml} should fail validation"
            );
        }
    }

    #[test]
    fn threshold_above_one_is_allowed() {
        // The composite score is uncapped up to ~1.5; thresholds above 1.0
        // are legitimate (exact-duplicate-only matching).
        let config = PipelineConfig::from_yaml("pipeline:\n  dedup_threshold: 1.4").unwrap();
        assert_eq!(config.pipeline.dedup_threshold, 1.4);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = PipelineConfig::from_yaml("pipelnie:\n  dedup_threshold: 0.7");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn log_level_strings_round_trip() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            let yaml = format!("log:\n  level: {}", level.as_str());
            let config = PipelineConfig::from_yaml(&yaml).unwrap();
            assert_eq!(config.log.level, level);
        }
    }
}
