use crate::physics::constants::{DEFAULT_GRAVITATIONAL_CONSTANT, DEFAULT_MIN_DISTANCE};
use crate::physics::math::Scalar;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_PREFIX: &str = "GRAVITAS";

/// Time scales frontends may hand to the engine
pub const MIN_TIME_SCALE: Scalar = 0.0;
pub const MAX_TIME_SCALE: Scalar = 5.0;

/// Clamp a requested time scale into the supported range.
///
/// The engine itself accepts any value; this is the caller-side guard.
/// NaN falls back to 1.0.
pub fn clamp_time_scale(requested: Scalar) -> Scalar {
    if requested.is_nan() {
        warn!("Time scale NaN is invalid, using 1.0");
        return 1.0;
    }
    let clamped = requested.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    if clamped != requested {
        warn!("Time scale {requested} is out of range, using {clamped}");
    }
    clamped
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serialize(toml::ser::Error),
    Layered(::config::ConfigError),
    NoConfigDirectory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize configuration: {e}"),
            ConfigError::Layered(e) => write!(f, "Failed to assemble configuration: {e}"),
            ConfigError::NoConfigDirectory => f.write_str("No user configuration directory"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl From<::config::ConfigError> for ConfigError {
    fn from(e: ::config::ConfigError) -> Self {
        ConfigError::Layered(e)
    }
}

#[derive(Resource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub scene: SceneConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravitational_constant: Scalar,
    /// Separation below which a pair exerts no force
    pub min_distance: Scalar,
    pub collisions_enabled: bool,
    pub time_scale: Scalar,
    pub initial_seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: DEFAULT_GRAVITATIONAL_CONSTANT,
            min_distance: DEFAULT_MIN_DISTANCE,
            collisions_enabled: true,
            time_scale: 1.0,
            initial_seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub width: Scalar,
    pub height: Scalar,
    /// Scene index to load at startup; a random scene when unset
    pub preset: Option<usize>,
    /// Stop after this many ticks; run until closed when unset
    pub max_ticks: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            preset: None,
            max_ticks: None,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to parse config file {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Config file {} not found. Using defaults.", path.display());
                Self::default()
            }
            Err(e) => {
                warn!(
                    "Config file {} could not be read: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Location of the per-user configuration file, if the platform has one
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gravitas").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Defaults, overlaid with the user config file, overlaid with
    /// `GRAVITAS__SECTION__KEY` environment variables.
    ///
    /// Any failure is logged and yields the defaults.
    pub fn load_from_user_config() -> Self {
        let path = Self::user_config_path();
        if path.is_none() {
            warn!("{}. Using defaults.", ConfigError::NoConfigDirectory);
        }

        match Self::load_layered(path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}. Using defaults.");
                Self::default()
            }
        }
    }

    /// Assemble configuration from defaults, an optional TOML file and the
    /// environment. A missing file is not an error.
    pub fn load_layered(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            ::config::Config::builder().add_source(::config::Config::try_from(&Self::default())?);

        if let Some(file) = file {
            debug!("Reading configuration layer from {}", file.display());
            builder = builder.add_source(
                ::config::File::from(file)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            );
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gravitas-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_clamp_time_scale() {
        assert_eq!(clamp_time_scale(2.5), 2.5);
        assert_eq!(clamp_time_scale(-1.0), 0.0);
        assert_eq!(clamp_time_scale(12.0), 5.0);
        assert_eq!(clamp_time_scale(Scalar::INFINITY), 5.0);
        assert_eq!(clamp_time_scale(Scalar::NAN), 1.0);
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.physics.gravitational_constant, 0.5);
        assert_eq!(config.physics.min_distance, 20.0);
        assert!(config.physics.collisions_enabled);
        assert_eq!(config.physics.time_scale, 1.0);
        assert_eq!(config.physics.initial_seed, None);
        assert_eq!(config.scene.width, 1280.0);
        assert_eq!(config.scene.height, 720.0);
        assert_eq!(config.scene.preset, None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SimulationConfig = toml::from_str(
            r#"
            [physics]
            gravitational_constant = 2.0

            [scene]
            preset = 3
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.physics.gravitational_constant, 2.0);
        assert_eq!(config.physics.min_distance, 20.0);
        assert_eq!(config.scene.preset, Some(3));
        assert_eq!(config.scene.width, 1280.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_path("round-trip.toml");
        let mut config = SimulationConfig::default();
        config.physics.collisions_enabled = false;
        config.physics.initial_seed = Some(99);
        config.scene.max_ticks = Some(1000);

        config.save(&path).expect("config should save");
        let loaded = SimulationConfig::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = SimulationConfig::load_or_default(temp_path("does-not-exist.toml"));
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_load_or_default_unreadable_path() {
        // A directory exists but cannot be read as a file
        let path = temp_path("unreadable-dir");
        std::fs::create_dir_all(&path).expect("temp dir should be creatable");

        let config = SimulationConfig::load_or_default(&path);
        let _ = std::fs::remove_dir(&path);

        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let path = temp_path("invalid.toml");
        std::fs::write(&path, "physics = [not toml").expect("temp file should be writable");

        let config = SimulationConfig::load_or_default(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_layered_file_overrides_defaults() {
        let path = temp_path("layered.toml");
        std::fs::write(&path, "[physics]\nmin_distance = 5.0\n").expect("temp file should be writable");

        let config = SimulationConfig::load_layered(Some(&path)).expect("layers should merge");
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.physics.min_distance, 5.0);
        assert_eq!(config.physics.gravitational_constant, 0.5);
    }

    #[test]
    fn test_layered_without_file() {
        let config =
            SimulationConfig::load_layered(Some(&temp_path("absent.toml"))).expect("file is optional");
        assert_eq!(config.scene.width, 1280.0);
    }
}
