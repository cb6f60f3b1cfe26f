//! World bounds and the shared food pool.

use crate::config::FoodConfig;
use crate::entity::{Color, Food};
use glam::Vec2;
use rand::Rng;

/// The fixed square arena.
#[derive(Debug, Clone, Copy)]
pub struct WorldBounds {
    /// Side length in world units.
    pub size: f32,
}

impl WorldBounds {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Get a uniform random position within the arena.
    #[inline]
    pub fn random_position(&self) -> Vec2 {
        let mut rng = rand::rng();
        Vec2::new(
            rng.random_range(0.0..self.size),
            rng.random_range(0.0..self.size),
        )
    }

    /// Clamp a blob center so the whole circle stays inside the arena.
    #[inline]
    pub fn clamp_blob(&self, position: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            position.x.clamp(radius, self.size - radius),
            position.y.clamp(radius, self.size - radius),
        )
    }
}

/// Populate a fresh food pool. Initial particles use the fixed spawn
/// radius, unlike replacements (see [`respawn_food`]).
pub fn generate_food(bounds: WorldBounds, config: &FoodConfig) -> Vec<Food> {
    let mut rng = rand::rng();
    (0..config.count)
        .map(|_| {
            Food::new(
                bounds.random_position(),
                config.spawn_radius,
                rng.random_range(config.mass_min..config.mass_max),
                Color::random(),
            )
        })
        .collect()
}

/// Build a replacement particle for one that was just consumed. The radius
/// range differs from the initial population on purpose.
pub fn respawn_food(bounds: WorldBounds, config: &FoodConfig) -> Food {
    let mut rng = rand::rng();
    Food::new(
        bounds.random_position(),
        rng.random_range(config.respawn_radius_min..config.respawn_radius_max),
        rng.random_range(config.mass_min..config.mass_max),
        Color::random(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_circle_inside() {
        let bounds = WorldBounds::new(1000.0);
        let clamped = bounds.clamp_blob(Vec2::new(-50.0, 1200.0), 10.0);
        assert_eq!(clamped, Vec2::new(10.0, 990.0));

        // Interior positions pass through untouched
        let inside = Vec2::new(500.0, 400.0);
        assert_eq!(bounds.clamp_blob(inside, 10.0), inside);
    }

    #[test]
    fn generated_food_matches_config() {
        let bounds = WorldBounds::new(1000.0);
        let config = FoodConfig::default();
        let food = generate_food(bounds, &config);
        assert_eq!(food.len(), config.count);
        for f in &food {
            assert_eq!(f.radius, config.spawn_radius);
            assert!(f.mass >= config.mass_min && f.mass < config.mass_max);
            assert!(f.position.x >= 0.0 && f.position.x <= bounds.size);
        }
    }

    #[test]
    fn respawned_food_uses_replacement_radius_range() {
        let bounds = WorldBounds::new(1000.0);
        let config = FoodConfig::default();
        for _ in 0..32 {
            let f = respawn_food(bounds, &config);
            assert!(f.radius >= config.respawn_radius_min);
            assert!(f.radius < config.respawn_radius_max);
        }
    }
}
