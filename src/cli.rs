//! Command line interface for Gravitas

use clap::Parser;
use std::fmt;

use crate::config::{SimulationConfig, clamp_time_scale};
use crate::scenes::SceneRegistry;

/// Tick budget when neither the command line nor the config sets one
pub const DEFAULT_TICKS: u64 = 600;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Scene index out of range
    InvalidPreset(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidPreset(msg) => write!(f, "Invalid preset: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Gravitas - planar N-body gravity simulation
#[derive(Parser, Debug)]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Gravitational constant (overrides config file)
    #[arg(short = 'g', long, value_name = "VALUE", allow_negative_numbers = true)]
    pub gravity: Option<f64>,

    /// Separation below which a pair exerts no force
    #[arg(long, value_name = "DISTANCE")]
    pub min_distance: Option<f64>,

    /// Scene index to load (see --list-presets); random when omitted
    #[arg(short = 'p', long, value_name = "INDEX")]
    pub preset: Option<usize>,

    /// Time scale, clamped to [0, 5]
    #[arg(short = 't', long, value_name = "SCALE", allow_negative_numbers = true)]
    pub time_scale: Option<f64>,

    /// Disable merging of colliding bodies
    #[arg(long)]
    pub no_collisions: bool,

    /// Random seed for scene generation
    #[arg(short = 's', long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Width of the simulated area
    #[arg(long, value_name = "UNITS")]
    pub width: Option<f64>,

    /// Height of the simulated area
    #[arg(long, value_name = "UNITS")]
    pub height: Option<f64>,

    /// Number of ticks to simulate before exiting [default: config, else 600]
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub ticks: Option<u64>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available scenes and exit
    #[arg(long)]
    pub list_presets: bool,
}

/// Handles the --list-presets flag by printing available scenes
pub fn handle_list_presets() {
    let registry = SceneRegistry::new().with_standard_scenes();
    println!("Available presets:");
    for (index, scene) in registry.iter().enumerate() {
        println!("  {index}: {} - {}", scene.name, scene.description);
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        if !std::path::Path::new(config_path).exists() {
            return Err(CliError::ConfigLoad(format!("{config_path} does not exist")));
        }
        println!("Loading configuration from: {config_path}");
        SimulationConfig::load_or_default(config_path)
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(gravity) = args.gravity {
        println!("Overriding gravitational constant to: {gravity}");
        config.physics.gravitational_constant = gravity;
    }

    if let Some(min_distance) = args.min_distance {
        println!("Overriding minimum distance to: {min_distance}");
        config.physics.min_distance = min_distance;
    }

    if let Some(preset) = args.preset {
        let registry = SceneRegistry::new().with_standard_scenes();
        let scene = registry.get(preset).ok_or_else(|| {
            CliError::InvalidPreset(format!(
                "{preset} (expected 0..{})",
                registry.len()
            ))
        })?;
        println!("Using preset: {}", scene.name);
        config.scene.preset = Some(preset);
    }

    if let Some(time_scale) = args.time_scale {
        config.physics.time_scale = time_scale;
    }
    config.physics.time_scale = clamp_time_scale(config.physics.time_scale);

    if args.no_collisions {
        println!("Collisions disabled");
        config.physics.collisions_enabled = false;
    }

    if let Some(seed) = args.seed {
        println!("Using random seed: {seed}");
        config.physics.initial_seed = Some(seed);
    }

    if let Some(width) = args.width {
        config.scene.width = width;
    }

    if let Some(height) = args.height {
        config.scene.height = height;
    }

    if let Some(ticks) = args.ticks {
        config.scene.max_ticks = Some(ticks);
    }
    config.scene.max_ticks = config.scene.max_ticks.or(Some(DEFAULT_TICKS));

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gravitas").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn missing_config() -> String {
        std::env::temp_dir()
            .join(format!("gravitas-cli-{}-missing.toml", std::process::id()))
            .display()
            .to_string()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.ticks, None);
        assert!(!args.no_collisions);
        assert!(args.preset.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let path = std::env::temp_dir().join(format!("gravitas-cli-{}.toml", std::process::id()));
        SimulationConfig::default()
            .save(&path)
            .expect("config should save");

        let args = parse(&[
            "--config",
            &path.display().to_string(),
            "-g",
            "2.5",
            "--min-distance",
            "8",
            "-p",
            "2",
            "-t",
            "1.5",
            "--no-collisions",
            "-s",
            "7",
            "--width",
            "640",
            "--height",
            "480",
            "-n",
            "50",
        ]);
        let config = load_and_apply_config(&args);
        let _ = std::fs::remove_file(&path);
        let config = config.expect("overrides should apply");

        assert_eq!(config.physics.gravitational_constant, 2.5);
        assert_eq!(config.physics.min_distance, 8.0);
        assert_eq!(config.scene.preset, Some(2));
        assert_eq!(config.physics.time_scale, 1.5);
        assert!(!config.physics.collisions_enabled);
        assert_eq!(config.physics.initial_seed, Some(7));
        assert_eq!(config.scene.width, 640.0);
        assert_eq!(config.scene.height, 480.0);
        assert_eq!(config.scene.max_ticks, Some(50));
    }

    #[test]
    fn test_config_tick_budget_used_without_flag() {
        let path = std::env::temp_dir().join(format!("gravitas-cli-mt-{}.toml", std::process::id()));
        std::fs::write(&path, "[scene]\nmax_ticks = 10\n").expect("config should write");

        let args = parse(&["--config", &path.display().to_string()]);
        let from_file = load_and_apply_config(&args);
        let args = parse(&["--config", &path.display().to_string(), "-n", "25"]);
        let from_flag = load_and_apply_config(&args);
        let _ = std::fs::remove_file(&path);

        assert_eq!(from_file.expect("config loads").scene.max_ticks, Some(10));
        assert_eq!(from_flag.expect("config loads").scene.max_ticks, Some(25));
    }

    #[test]
    fn test_default_tick_budget() {
        let path = std::env::temp_dir().join(format!("gravitas-cli-dt-{}.toml", std::process::id()));
        SimulationConfig::default()
            .save(&path)
            .expect("config should save");

        let args = parse(&["--config", &path.display().to_string()]);
        let config = load_and_apply_config(&args);
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.expect("config loads").scene.max_ticks, Some(DEFAULT_TICKS));
    }

    #[test]
    fn test_time_scale_is_clamped() {
        let path = std::env::temp_dir().join(format!("gravitas-cli-ts-{}.toml", std::process::id()));
        SimulationConfig::default()
            .save(&path)
            .expect("config should save");

        let args = parse(&["--config", &path.display().to_string(), "-t", "9"]);
        let config = load_and_apply_config(&args);
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.expect("config loads").physics.time_scale, 5.0);
    }

    #[test]
    fn test_invalid_preset() {
        let path = std::env::temp_dir().join(format!("gravitas-cli-p-{}.toml", std::process::id()));
        SimulationConfig::default()
            .save(&path)
            .expect("config should save");

        let args = parse(&["--config", &path.display().to_string(), "-p", "9"]);
        let result = load_and_apply_config(&args);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(CliError::InvalidPreset(_))));
    }

    #[test]
    fn test_missing_config_file() {
        let args = parse(&["--config", &missing_config()]);
        assert!(matches!(
            load_and_apply_config(&args),
            Err(CliError::ConfigLoad(_))
        ));
    }
}
