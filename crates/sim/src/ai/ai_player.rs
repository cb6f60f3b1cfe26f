//! A single AI opponent: greedy food seeking plus a naive adaptive policy.

use crate::config::AiConfig;
use crate::entity::{Blob, Color, Food};
use crate::world::WorldBounds;
use glam::Vec2;

/// Step size of the per-tick adaptive nudge.
pub const LEARNING_RATE: f32 = 0.01;
/// Hard bound on both adaptive scalars.
const ADAPT_MAX: f32 = 0.5;

/// An AI-controlled opponent. Practically single-blob (AIs never split),
/// but the collection supports many.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    pub blobs: Vec<Blob>,
    pub name: String,
    /// Adaptive scalar in [0, 0.5]. Grows while the AI outperforms its
    /// spawn mass. Exposed for external consumers; the core computes it
    /// but never reads it.
    pub aggressiveness: f32,
    /// Adaptive scalar in [0, 0.5], the inverse nudge of `aggressiveness`.
    pub caution: f32,
    /// Spawn-time mass baseline. Fixed for the AI's lifetime.
    pub initial_mass: f32,
}

impl AiPlayer {
    /// Spawn a fresh opponent with one blob at a random position.
    pub fn spawn(id: u32, bounds: WorldBounds, config: &AiConfig) -> Self {
        Self {
            blobs: vec![Blob::new(
                bounds.random_position(),
                config.start_mass,
                Color::random(),
                config.speed,
            )],
            name: format!("Player {}", id),
            aggressiveness: 0.0,
            caution: 0.0,
            initial_mass: config.start_mass,
        }
    }

    /// Sum of all blob masses.
    pub fn total_mass(&self) -> f32 {
        self.blobs.iter().map(|b| b.mass).sum()
    }

    /// Index of the nearest food particle to this AI, by Euclidean
    /// distance from its first blob. Linear scan; ties break to the
    /// first-found entry, stable under pool order.
    pub fn nearest_food(&self, food: &[Food]) -> Option<usize> {
        let anchor = self.blobs.first()?.position;
        let mut best: Option<(usize, f32)> = None;
        for (index, f) in food.iter().enumerate() {
            let distance = anchor.distance(f.position);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Move straight toward the nearest food at fixed speed, then clamp
    /// to the arena. No cohesion, merging or splitting for AI blobs.
    pub fn seek_food(&mut self, food: &[Food], bounds: WorldBounds) {
        let Some(target) = self.nearest_food(food).map(|i| food[i].position) else {
            return;
        };

        for blob in &mut self.blobs {
            let delta = target - blob.position;
            let distance = delta.length();
            if distance > 0.0 {
                blob.position += (delta / distance) * blob.speed;
            }
            blob.position = bounds.clamp_blob(blob.position, blob.radius);
        }
    }

    /// Nudge the adaptive scalars from lifetime-relative performance:
    /// winning AIs get more aggressive and less cautious, losing AIs the
    /// opposite. Both scalars are clamped every tick.
    pub fn adapt(&mut self) {
        let performance = self.total_mass() / self.initial_mass;
        self.aggressiveness =
            (self.aggressiveness + LEARNING_RATE * (performance - 1.0)).clamp(0.0, ADAPT_MAX);
        self.caution = (self.caution + LEARNING_RATE * (1.0 - performance)).clamp(0.0, ADAPT_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::radius_for_mass;

    fn ai_at(position: Vec2, mass: f32) -> AiPlayer {
        AiPlayer {
            blobs: vec![Blob::new(position, mass, Color::default(), 1.5)],
            name: "Player 1".to_string(),
            aggressiveness: 0.0,
            caution: 0.0,
            initial_mass: mass,
        }
    }

    fn food_at(position: Vec2, mass: f32) -> Food {
        Food::new(position, 2.0, mass, Color::default())
    }

    #[test]
    fn targets_nearest_food_with_stable_ties() {
        let ai = ai_at(Vec2::new(500.0, 500.0), 100.0);
        let food = vec![
            food_at(Vec2::new(900.0, 900.0), 10.0),
            food_at(Vec2::new(500.0, 520.0), 10.0),
            food_at(Vec2::new(500.0, 480.0), 10.0), // same distance as index 1
        ];
        assert_eq!(ai.nearest_food(&food), Some(1));
    }

    #[test]
    fn walks_to_food_and_reaches_eating_range() {
        // AI at (500,500) mass 100, food 10 units away: trigger distance
        // is the blob radius (~5.64), reached after a handful of 1.5-unit
        // steps.
        let mut ai = ai_at(Vec2::new(500.0, 500.0), 100.0);
        let food = vec![food_at(Vec2::new(500.0, 510.0), 10.0)];
        let radius = radius_for_mass(100.0);
        assert!((radius - 5.64).abs() < 0.01);

        for _ in 0..3 {
            ai.seek_food(&food, WorldBounds::new(1000.0));
        }
        let distance = ai.blobs[0].position.distance(food[0].position);
        assert!(distance < radius);
    }

    #[test]
    fn zero_distance_target_is_a_no_op() {
        let mut ai = ai_at(Vec2::new(500.0, 500.0), 100.0);
        let food = vec![food_at(Vec2::new(500.0, 500.0), 10.0)];
        ai.seek_food(&food, WorldBounds::new(1000.0));
        assert_eq!(ai.blobs[0].position, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn adaptation_direction_follows_performance() {
        let mut winner = ai_at(Vec2::ZERO, 100.0);
        winner.blobs[0].set_mass(200.0);
        winner.adapt();
        assert!(winner.aggressiveness > 0.0);
        assert_eq!(winner.caution, 0.0);

        let mut loser = ai_at(Vec2::ZERO, 100.0);
        loser.blobs[0].set_mass(50.0);
        loser.adapt();
        assert_eq!(loser.aggressiveness, 0.0);
        assert!(loser.caution > 0.0);
    }

    #[test]
    fn adaptive_scalars_stay_clamped_under_extremes() {
        let mut ai = ai_at(Vec2::ZERO, 100.0);
        ai.blobs[0].set_mass(10_000.0); // 100x initial
        for _ in 0..1000 {
            ai.adapt();
        }
        assert_eq!(ai.aggressiveness, 0.5);
        assert_eq!(ai.caution, 0.0);

        ai.blobs[0].set_mass(1.0);
        for _ in 0..1000 {
            ai.adapt();
        }
        assert_eq!(ai.aggressiveness, 0.0);
        assert_eq!(ai.caution, 0.5);
    }
}
