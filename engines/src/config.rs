use std::path::{Path, PathBuf};

/// Errors that can occur when loading heuristic configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Weights for the single-ply move evaluation.
///
/// A candidate scores `flips + positional + mobility_weight * (mine - theirs)`,
/// where the positional term is `+corner_bonus`, `-danger_penalty`,
/// `+edge_bonus` or zero depending on the square's role.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub corner_bonus: f64,
    pub danger_penalty: f64,
    pub edge_bonus: f64,
    pub mobility_weight: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            corner_bonus: 25.0,
            danger_penalty: 12.0,
            edge_bonus: 2.0,
            mobility_weight: 1.0,
        }
    }
}

impl HeuristicConfig {
    /// Every weight zeroed: picks the move that flips the most discs.
    pub fn greedy() -> Self {
        HeuristicConfig {
            corner_bonus: 0.0,
            danger_penalty: 0.0,
            edge_bonus: 0.0,
            mobility_weight: 0.0,
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: HeuristicConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "heuristic config not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("corner_bonus", self.corner_bonus),
            ("danger_penalty", self.danger_penalty),
            ("edge_bonus", self.edge_bonus),
            ("mobility_weight", self.mobility_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!("{name} must be finite")));
            }
        }

        if self.corner_bonus < 0.0 {
            return Err(ConfigError::Validation("corner_bonus must be >= 0".into()));
        }
        if self.danger_penalty < 0.0 {
            return Err(ConfigError::Validation("danger_penalty must be >= 0".into()));
        }
        if self.edge_bonus < 0.0 {
            return Err(ConfigError::Validation("edge_bonus must be >= 0".into()));
        }

        Ok(())
    }
}
