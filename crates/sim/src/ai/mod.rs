//! AI opponents and roster management.

mod ai_player;

pub use ai_player::{AiPlayer, LEARNING_RATE};

use crate::config::AiConfig;
use crate::world::WorldBounds;

/// Owns the AI roster and keeps its size at the configured target.
#[derive(Debug, Default)]
pub struct AiRoster {
    /// Active opponents.
    pub ais: Vec<AiPlayer>,
    /// Next numeric suffix for display names.
    next_id: u32,
}

impl AiRoster {
    pub fn new() -> Self {
        Self {
            ais: Vec::new(),
            next_id: 1,
        }
    }

    /// Spawn one new opponent at a random position.
    pub fn spawn(&mut self, bounds: WorldBounds, config: &AiConfig) {
        let id = self.next_id;
        self.next_id += 1;
        self.ais.push(AiPlayer::spawn(id, bounds, config));
    }

    /// Clear the roster and repopulate to the target count.
    pub fn regenerate(&mut self, bounds: WorldBounds, config: &AiConfig) {
        self.ais.clear();
        for _ in 0..config.count {
            self.spawn(bounds, config);
        }
    }

    /// Drop opponents whose blob collections emptied and backfill one
    /// replacement per elimination, restoring the roster size within the
    /// same tick.
    pub fn refill_eliminated(&mut self, bounds: WorldBounds, config: &AiConfig) {
        let before = self.ais.len();
        self.ais.retain(|ai| !ai.blobs.is_empty());
        let eliminated = before - self.ais.len();
        for _ in 0..eliminated {
            tracing::debug!("AI eliminated, spawning replacement");
            self.spawn(bounds, config);
        }
    }
}
