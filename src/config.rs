use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::energy::DEFAULT_MASS_KG;
use crate::core::params::LaunchParameters;
use crate::core::trajectory::DEFAULT_RESOLUTION;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub launch: LaunchParameters,
    pub sampling: SamplingConfig,
    pub energy: EnergyConfig,
    pub plot: PlotConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub resolution: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    pub mass_kg: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            mass_kg: DEFAULT_MASS_KG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    /// Directory for charts written without an explicit file name.
    pub output_dir: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default XDG config path (~/.config/projectile-calculator/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("projectile-calculator").join("config.toml"))
    }

    /// Config from the default path if present. A file that fails to load is
    /// reported and replaced by defaults.
    pub fn load_from_default_path() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!("{err}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert_eq!(config, Config::default());
        assert_eq!(config.launch, LaunchParameters::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [launch]
            gravity_mps2 = 1.62

            [plot]
            width = 1600
            output_dir = "charts"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.launch.gravity_mps2, 1.62);
        assert_eq!(config.launch.speed_mps, 20.0);
        assert_eq!(config.plot.width, 1600);
        assert_eq!(config.plot.height, 600);
        assert_eq!(config.plot.output_dir, Some(PathBuf::from("charts")));
        assert_eq!(config.sampling.resolution, DEFAULT_RESOLUTION);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load(Path::new("/nonexistent/projectile/config.toml"))
            .expect_err("file does not exist");
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join("projectile_calculator_bad_config.toml");
        std::fs::write(&path, "[sampling]\nresolution = \"many\"\n").expect("temp dir writable");

        let err = Config::load(&path).expect_err("resolution must be an integer");
        assert!(matches!(err, ConfigError::Parse { .. }));
        let _ = std::fs::remove_file(&path);
    }
}
