//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Error raised while loading or writing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub food: FoodConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

impl Config {
    /// Load configuration from `blob-arena.toml` or use defaults.
    /// A missing file is written out with the default values.
    #[cfg(not(target_family = "wasm"))]
    pub fn load() -> Result<Self, ConfigError> {
        use std::path::Path;

        let path = Path::new("blob-arena.toml");
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            tracing::info!("No blob-arena.toml found, creating default config");
            let default_config = Self::default();
            let rendered = toml::to_string_pretty(&default_config)
                .map_err(|e| ConfigError::Parse(e.to_string()))?;
            std::fs::write(path, rendered)?;
            Ok(default_config)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            ai: AiConfig::default(),
            food: FoodConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

/// Host binary settings. Ignored by the browser client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// HTTP port for the static host.
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

fn default_server_port() -> u16 {
    8080
}

/// World geometry settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldConfig {
    /// Side length of the square arena, in world units.
    #[serde(default = "default_world_size")]
    pub size: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: default_world_size(),
        }
    }
}

fn default_world_size() -> f32 {
    1000.0
}

/// Human player settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Mass of the single starting blob (also used on restart).
    #[serde(default = "default_player_start_mass")]
    pub start_mass: f32,
    /// Base movement speed in world units per tick.
    #[serde(default = "default_player_speed")]
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start_mass: default_player_start_mass(),
            speed: default_player_speed(),
        }
    }
}

fn default_player_start_mass() -> f32 {
    1000.0
}
fn default_player_speed() -> f32 {
    2.0
}

/// AI opponent settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AiConfig {
    /// Target roster size. Eliminations are backfilled to this count.
    #[serde(default = "default_ai_count")]
    pub count: usize,
    /// Mass each AI spawns with (also its adaptation baseline).
    #[serde(default = "default_ai_start_mass")]
    pub start_mass: f32,
    /// AI movement speed in world units per tick.
    #[serde(default = "default_ai_speed")]
    pub speed: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            count: default_ai_count(),
            start_mass: default_ai_start_mass(),
            speed: default_ai_speed(),
        }
    }
}

fn default_ai_count() -> usize {
    10
}
fn default_ai_start_mass() -> f32 {
    100.0
}
fn default_ai_speed() -> f32 {
    1.5
}

/// Food pool settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoodConfig {
    /// Number of particles in the pool.
    #[serde(default = "default_food_count")]
    pub count: usize,
    /// Radius of initially spawned particles.
    #[serde(default = "default_food_spawn_radius")]
    pub spawn_radius: f32,
    /// Radius range for replacement particles. Intentionally different
    /// from the initial radius; do not unify the two.
    #[serde(default = "default_food_respawn_radius_min")]
    pub respawn_radius_min: f32,
    #[serde(default = "default_food_respawn_radius_max")]
    pub respawn_radius_max: f32,
    /// Mass range [min, max) for every particle.
    #[serde(default = "default_food_mass_min")]
    pub mass_min: f32,
    #[serde(default = "default_food_mass_max")]
    pub mass_max: f32,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            count: default_food_count(),
            spawn_radius: default_food_spawn_radius(),
            respawn_radius_min: default_food_respawn_radius_min(),
            respawn_radius_max: default_food_respawn_radius_max(),
            mass_min: default_food_mass_min(),
            mass_max: default_food_mass_max(),
        }
    }
}

fn default_food_count() -> usize {
    1000
}
fn default_food_spawn_radius() -> f32 {
    2.0
}
fn default_food_respawn_radius_min() -> f32 {
    1.0
}
fn default_food_respawn_radius_max() -> f32 {
    4.0
}
fn default_food_mass_min() -> f32 {
    1.0
}
fn default_food_mass_max() -> f32 {
    51.0
}

/// Camera and zoom settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraConfig {
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f32,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,
    /// Wheel delta to zoom conversion factor.
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            wheel_sensitivity: default_wheel_sensitivity(),
        }
    }
}

fn default_min_zoom() -> f32 {
    0.1
}
fn default_max_zoom() -> f32 {
    5.0
}
fn default_wheel_sensitivity() -> f32 {
    0.001
}
