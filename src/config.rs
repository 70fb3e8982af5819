use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "GRIDWALK";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub window: WindowSettings,
    pub grid: GridSettings,
    pub agent: AgentSettings,
    /// Cells visited in order, as `[x, y]`.
    #[serde(default)]
    pub targets: Vec<[i32; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridSettings {
    pub matrix: Vec<Vec<u8>>,
    pub cell_size: u32,
    #[serde(default = "default_allow_diagonal")]
    pub allow_diagonal: bool,
    #[serde(default = "default_checkpoint_size")]
    pub checkpoint_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSettings {
    pub start: [i32; 2],
    /// Pixels per second.
    pub speed: f64,
    pub radius: f64,
    pub ray_length: f64,
}

fn default_allow_diagonal() -> bool {
    true
}

fn default_checkpoint_size() -> u32 {
    4
}

/// Loads `config/default.toml`, then applies `GRIDWALK_*` overrides
/// (nested keys separated by `__`).
pub fn load_settings() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!(
                rows = settings.grid.matrix.len(),
                cell_size = settings.grid.cell_size,
                targets = settings.targets.len(),
                "Successfully loaded configuration"
            );
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        targets = [[2, 0]]

        [window]
        title = "test"
        width = 320
        height = 240

        [grid]
        cell_size = 16
        matrix = [[1, 1, 1], [1, 0, 1]]

        [agent]
        start = [0, 0]
        speed = 100.0
        radius = 4.0
        ray_length = 32.0
    "#;

    #[test]
    fn test_settings_from_toml() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(SAMPLE, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.grid.matrix, vec![vec![1, 1, 1], vec![1, 0, 1]]);
        assert_eq!(settings.grid.cell_size, 16);
        assert!(settings.grid.allow_diagonal);
        assert_eq!(settings.grid.checkpoint_size, 4);
        assert_eq!(settings.agent.start, [0, 0]);
        assert_eq!(settings.targets, vec![[2, 0]]);
        assert_eq!(settings.window.title, "test");
    }

    #[test]
    fn test_bundled_config_parses() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(include_str!("../config/default.toml"), FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let width = settings.grid.matrix[0].len();
        assert!(settings.grid.matrix.iter().all(|row| row.len() == width));
        assert!(!settings.targets.is_empty());
    }
}
