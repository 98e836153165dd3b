/// Game options.  Every struct is `#[serde(default)]`, so a JSON document
/// only needs the fields it wants to override.

use std::fmt;
use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GunConfig {
    pub width_pct: f64,
    pub height_pct: f64,
    pub step_pct: f64,
    /// Keep the gun inside the field horizontally.
    pub clamp_to_field: bool,
}

impl Default for GunConfig {
    fn default() -> Self {
        Self {
            width_pct: 5.0,
            height_pct: 6.0,
            step_pct: 2.0,
            clamp_to_field: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    pub radius_pct: f64,
    /// Distance travelled per frame, as a percentage of field height.
    pub step_pct: f64,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            radius_pct: 1.0,
            step_pct: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub per_row: usize,
    pub gap_pct: f64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            per_row: 12,
            gap_pct: 1.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub x_pct: f64,
    pub y_pct: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            x_pct: 1.0,
            y_pct: 98.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Field width in length units.
    pub width: i32,
    /// Field height in length units.
    pub height: i32,
    /// Background fill, interpreted by the surface.
    pub background: String,
    pub gun: GunConfig,
    pub bullet: BulletConfig,
    pub target: TargetConfig,
    pub stats: StatsConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            background: "black".into(),
            gun: GunConfig::default(),
            bullet: BulletConfig::default(),
            target: TargetConfig::default(),
            stats: StatsConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "read config: {e}"),
            ConfigError::Parse(e) => write!(f, "parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}
