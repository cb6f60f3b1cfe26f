//! Core simulation for the blob arena: a single-player, agar-style
//! world with food particles, adaptive AI opponents and mass-based
//! consumption. Deterministic given a clock; rendering and input live
//! in the client crate.

pub mod ai;
pub mod camera;
pub mod combat;
pub mod config;
pub mod entity;
pub mod game;
pub mod player;
pub mod world;

pub use camera::Camera;
pub use config::{Config, ConfigError};
pub use game::{GameState, GameStatus, LeaderboardEntry};
pub use player::Player;
pub use world::WorldBounds;
