//! Session configuration.

use std::path::Path;

use ms_results::TableOptions;
use ms_script::EngineOptions;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// What a script invocation starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptSeeding {
    /// Only the model's current fields. Earlier script output is not visible.
    #[default]
    Isolated,
    /// The model's fields overlaid with everything earlier scripts produced.
    Chained,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub seeding: ScriptSeeding,
    pub table: TableOptions,
    pub engine: EngineOptions,
}

/// Load a session configuration from a YAML file. Missing keys take defaults.
pub fn load_config(path: &Path) -> AppResult<SessionConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config(&content)
}

pub fn parse_config(content: &str) -> AppResult<SessionConfig> {
    serde_yaml::from_str(content)
        .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_results::ScalarRendering;

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = parse_config("seeding: chained\ntable:\n  base_period: 2000\n").unwrap();
        assert_eq!(config.seeding, ScriptSeeding::Chained);
        assert_eq!(config.table.base_period, 2000);
        assert_eq!(config.table.scalar_rendering, ScalarRendering::Single);
        assert_eq!(config.engine.max_operations, None);
        assert_eq!(config.engine.max_array_size, ms_script::DEFAULT_MAX_ARRAY_SIZE);
    }

    #[test]
    fn full_yaml() {
        let yaml = "seeding: isolated\n\
                    table:\n  base_period: 2015\n  scalar_rendering: label_only\n\
                    engine:\n  max_operations: 5000\n  max_array_size: 64\n";
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.table.scalar_rendering, ScalarRendering::LabelOnly);
        assert_eq!(config.engine.max_operations, Some(5000));
        assert_eq!(config.engine.max_array_size, 64);
    }

    #[test]
    fn unknown_seeding_is_rejected() {
        assert!(matches!(
            parse_config("seeding: sideways\n"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn defaults_match_reference_behavior() {
        let config = SessionConfig::default();
        assert_eq!(config.seeding, ScriptSeeding::Isolated);
        assert_eq!(config.table.base_period, 2015);
    }
}
