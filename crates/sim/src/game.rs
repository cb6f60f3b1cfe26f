//! Top-level game state and the per-tick update loop.

use crate::ai::AiRoster;
use crate::camera::Camera;
use crate::combat;
use crate::config::Config;
use crate::entity::Food;
use crate::player::{Player, MERGE_INTERVAL_MS};
use crate::world::{generate_food, WorldBounds};
use glam::Vec2;

/// Whether the session is live or waiting for a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over,
}

/// One row of the ranked standings.
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub name: String,
    pub mass: f32,
    pub is_player: bool,
}

/// The whole simulation: world, player, opponents, food and camera.
pub struct GameState {
    pub config: Config,
    pub bounds: WorldBounds,
    pub player: Player,
    pub roster: AiRoster,
    pub food: Vec<Food>,
    pub camera: Camera,
    pub status: GameStatus,
    /// Pointer position in absolute screen pixels.
    pointer: Vec2,
    canvas_size: Vec2,
    last_merge_ms: f64,
    pub tick_count: u64,
}

impl GameState {
    pub fn new(config: Config, canvas_size: Vec2) -> Self {
        let bounds = WorldBounds::new(config.world.size);
        let center = Vec2::splat(config.world.size / 2.0);
        let player = Player::spawn(center, config.player.start_mass, config.player.speed);

        let mut roster = AiRoster::new();
        roster.regenerate(bounds, &config.ai);
        let food = generate_food(bounds, &config.food);
        let camera = Camera::new(&config.camera, canvas_size, center);

        tracing::info!(
            ais = roster.ais.len(),
            food = food.len(),
            "world initialized"
        );

        Self {
            config,
            bounds,
            player,
            roster,
            food,
            camera,
            status: GameStatus::Running,
            pointer: canvas_size / 2.0,
            canvas_size,
            last_merge_ms: 0.0,
            tick_count: 0,
        }
    }

    /// Reset to a fresh session with the same configuration.
    pub fn restart(&mut self, now_ms: f64) {
        let center = Vec2::splat(self.config.world.size / 2.0);
        self.player = Player::spawn(
            center,
            self.config.player.start_mass,
            self.config.player.speed,
        );
        self.roster.regenerate(self.bounds, &self.config.ai);
        self.food = generate_food(self.bounds, &self.config.food);
        self.camera.follow(Some(center));
        self.status = GameStatus::Running;
        self.last_merge_ms = now_ms;
        self.tick_count = 0;
        tracing::info!("session restarted");
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = position;
    }

    pub fn resize(&mut self, canvas_size: Vec2) {
        self.canvas_size = canvas_size;
        self.camera.resize(canvas_size);
    }

    pub fn adjust_zoom(&mut self, wheel_delta_y: f32) {
        self.camera.adjust_zoom(wheel_delta_y);
    }

    /// Pointer offset from the viewport center, the steering input.
    fn steer(&self) -> Vec2 {
        self.pointer - self.canvas_size / 2.0
    }

    /// Aim direction for splits, from the viewport center to the pointer.
    fn aim_angle(&self) -> f32 {
        let steer = self.steer();
        steer.y.atan2(steer.x)
    }

    /// Split every eligible player blob toward the pointer.
    pub fn split(&mut self, now_ms: f64) {
        if self.status != GameStatus::Running {
            return;
        }
        self.player.split(self.aim_angle(), now_ms);
    }

    /// Advance the simulation one step. `now_ms` is the simulated clock
    /// driving the merge window. Frozen entirely while the session is over.
    pub fn tick(&mut self, now_ms: f64) {
        if self.status != GameStatus::Running {
            return;
        }
        self.tick_count += 1;

        self.player.move_toward(self.steer(), self.bounds);
        self.player.apply_cohesion();
        if now_ms - self.last_merge_ms > MERGE_INTERVAL_MS {
            self.player.merge_pass();
            self.last_merge_ms = now_ms;
        }

        for ai in &mut self.roster.ais {
            ai.seek_food(&self.food, self.bounds);
        }

        combat::eat_food(
            &mut self.player.blobs,
            &mut self.food,
            self.bounds,
            &self.config.food,
        );
        for ai in &mut self.roster.ais {
            combat::eat_food(&mut ai.blobs, &mut self.food, self.bounds, &self.config.food);
        }
        combat::resolve_blob_combat(
            &mut self.player,
            &mut self.roster,
            self.bounds,
            &self.config.ai,
        );

        self.camera.follow(self.player.average_position());

        if self.player.blobs.is_empty() {
            self.status = GameStatus::Over;
            tracing::info!(ticks = self.tick_count, "player eliminated, game over");
        }
    }

    /// Standings ranked by total mass, descending. Ties keep roster
    /// order, with the player ranked after equal-mass opponents.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .roster
            .ais
            .iter()
            .map(|ai| LeaderboardEntry {
                name: ai.name.clone(),
                mass: ai.total_mass(),
                is_player: false,
            })
            .collect();
        entries.push(LeaderboardEntry {
            name: "You".to_string(),
            mass: self.player.total_mass(),
            is_player: true,
        });
        entries.sort_by(|a, b| b.mass.total_cmp(&a.mass));
        entries
    }
}
