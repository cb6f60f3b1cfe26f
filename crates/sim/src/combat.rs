//! Consumption resolution: blob-vs-food and blob-vs-blob.

use crate::ai::AiRoster;
use crate::config::{AiConfig, FoodConfig};
use crate::entity::{Blob, Food};
use crate::player::Player;
use crate::world::{respawn_food, WorldBounds};

/// Required mass advantage for blob-vs-blob consumption. Prevents
/// near-equal trades.
pub const MIN_MASS_RATIO: f32 = 1.1;

/// Predator eats prey iff the prey's center is inside the predator's
/// radius and the predator holds a strict 10% mass advantage.
#[inline]
pub fn can_eat(predator: &Blob, prey: &Blob) -> bool {
    predator.distance_to(prey) < predator.radius && predator.mass > prey.mass * MIN_MASS_RATIO
}

/// Resolve one consumption pass of `blobs` against the shared food pool.
///
/// A food particle is consumed when its center falls inside a blob's
/// radius. Each particle can be claimed at most once per pass; consumed
/// entries are compacted out afterwards and exactly one replacement is
/// appended per consumption, so the pool size is stable across the pass.
pub fn eat_food(blobs: &mut [Blob], food: &mut Vec<Food>, bounds: WorldBounds, config: &FoodConfig) {
    let mut claimed = vec![false; food.len()];
    let mut eaten = 0usize;

    for blob in blobs.iter_mut() {
        for (index, f) in food.iter().enumerate() {
            if claimed[index] {
                continue;
            }
            if blob.position.distance(f.position) < blob.radius {
                blob.absorb(f.mass);
                claimed[index] = true;
                eaten += 1;
            }
        }
    }

    if eaten > 0 {
        let mut index = 0;
        food.retain(|_| {
            let keep = !claimed[index];
            index += 1;
            keep
        });
        for _ in 0..eaten {
            food.push(respawn_food(bounds, config));
        }
    }
}

/// Resolve blob-vs-blob consumption: player-eats-AI, AI-eats-player and
/// AI-eats-AI passes, then roster backfill and the per-tick adaptive
/// parameter update.
pub fn resolve_blob_combat(
    player: &mut Player,
    roster: &mut AiRoster,
    bounds: WorldBounds,
    config: &AiConfig,
) {
    // Player eats AI
    for predator in player.blobs.iter_mut() {
        for ai in roster.ais.iter_mut() {
            ai.blobs.retain(|prey| {
                if can_eat(predator, prey) {
                    predator.absorb(prey.mass);
                    false
                } else {
                    true
                }
            });
        }
    }

    // AI eats player
    for ai in roster.ais.iter_mut() {
        for predator in ai.blobs.iter_mut() {
            player.blobs.retain(|prey| {
                if can_eat(predator, prey) {
                    predator.absorb(prey.mass);
                    tracing::debug!("{} ate a player blob", ai.name);
                    false
                } else {
                    true
                }
            });
        }
    }

    // AI eats AI: lower-indexed roster entries prey on higher-indexed ones
    for i in 0..roster.ais.len() {
        for j in (i + 1)..roster.ais.len() {
            let (left, right) = roster.ais.split_at_mut(j);
            let (a, b) = (&mut left[i], &mut right[0]);
            for predator in a.blobs.iter_mut() {
                b.blobs.retain(|prey| {
                    if can_eat(predator, prey) {
                        predator.absorb(prey.mass);
                        false
                    } else {
                        true
                    }
                });
            }
        }
    }

    roster.refill_eliminated(bounds, config);

    for ai in &mut roster.ais {
        ai.adapt();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Color;
    use glam::Vec2;

    fn blob(position: Vec2, mass: f32) -> Blob {
        Blob::new(position, mass, Color::default(), 2.0)
    }

    fn food_at(position: Vec2, mass: f32) -> Food {
        Food::new(position, 2.0, mass, Color::default())
    }

    #[test]
    fn eating_requires_strict_mass_advantage() {
        let origin = Vec2::new(500.0, 500.0);
        let near = Vec2::new(501.0, 500.0);

        // 10x advantage: eats
        assert!(can_eat(&blob(origin, 1000.0), &blob(near, 100.0)));
        // 1.05x advantage: must not eat
        assert!(!can_eat(&blob(origin, 105.0), &blob(near, 100.0)));
        // Exactly 1.1x: still must not eat (strict inequality)
        assert!(!can_eat(&blob(origin, 11.0), &blob(near, 10.0)));
        // Out of range: must not eat regardless of mass
        assert!(!can_eat(
            &blob(origin, 1000.0),
            &blob(Vec2::new(900.0, 900.0), 100.0)
        ));
    }

    #[test]
    fn food_pool_count_stable_after_single_consumption() {
        let bounds = WorldBounds::new(1000.0);
        let config = FoodConfig::default();
        let mut blobs = vec![blob(Vec2::new(500.0, 500.0), 100.0)];
        let mut food = vec![
            food_at(Vec2::new(501.0, 500.0), 10.0),
            food_at(Vec2::new(100.0, 100.0), 10.0),
        ];

        eat_food(&mut blobs, &mut food, bounds, &config);

        assert_eq!(food.len(), 2);
        assert_eq!(blobs[0].mass, 110.0);
        // The distant particle survives in place
        assert!(food
            .iter()
            .any(|f| f.position == Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn food_claimed_at_most_once_per_pass() {
        let bounds = WorldBounds::new(1000.0);
        let config = FoodConfig::default();
        // Two blobs both in range of the same particle
        let mut blobs = vec![
            blob(Vec2::new(500.0, 500.0), 100.0),
            blob(Vec2::new(500.0, 501.0), 100.0),
        ];
        let mut food = vec![food_at(Vec2::new(500.0, 500.5), 10.0)];

        eat_food(&mut blobs, &mut food, bounds, &config);

        // First blob wins; total gained mass is the particle's, once
        assert_eq!(blobs[0].mass, 110.0);
        assert_eq!(blobs[1].mass, 100.0);
        assert_eq!(food.len(), 1);
    }

    #[test]
    fn player_consumes_ai_and_roster_refills() {
        let bounds = WorldBounds::new(1000.0);
        let config = AiConfig::default();
        let mut roster = AiRoster::new();
        roster.regenerate(bounds, &config);
        let target = roster.ais.len();

        // Put an AI of mass 100 five units from a mass-1000 player blob
        roster.ais[0].blobs[0].position = Vec2::new(505.0, 500.0);
        roster.ais[0].blobs[0].set_mass(100.0);
        // Park the others far away
        for ai in roster.ais.iter_mut().skip(1) {
            ai.blobs[0].position = Vec2::new(50.0, 50.0);
        }

        let mut player = Player::spawn(Vec2::new(500.0, 500.0), 1000.0, 2.0);
        resolve_blob_combat(&mut player, &mut roster, bounds, &config);

        assert_eq!(player.blobs[0].mass, 1100.0);
        assert_eq!(roster.ais.len(), target);
        // Replacement spawns at the default mass baseline
        assert!(roster
            .ais
            .iter()
            .all(|ai| ai.initial_mass == config.start_mass));
    }

    #[test]
    fn ai_consumes_player_and_signals_empty_collection() {
        let bounds = WorldBounds::new(1000.0);
        let config = AiConfig::default();
        let mut roster = AiRoster::new();
        roster.regenerate(bounds, &config);
        for ai in roster.ais.iter_mut().skip(1) {
            ai.blobs[0].position = Vec2::new(50.0, 50.0);
        }
        roster.ais[0].blobs[0].position = Vec2::new(500.0, 500.0);
        roster.ais[0].blobs[0].set_mass(5000.0);

        let mut player = Player::spawn(Vec2::new(505.0, 500.0), 100.0, 2.0);
        resolve_blob_combat(&mut player, &mut roster, bounds, &config);

        assert!(player.blobs.is_empty());
        assert_eq!(roster.ais[0].blobs[0].mass, 5100.0);
    }

    #[test]
    fn ai_eats_ai_with_mass_conservation() {
        let bounds = WorldBounds::new(1000.0);
        let config = AiConfig::default();
        let mut roster = AiRoster::new();
        roster.regenerate(bounds, &config);
        let target = roster.ais.len();
        for ai in roster.ais.iter_mut().skip(2) {
            ai.blobs[0].position = Vec2::new(50.0, 50.0);
        }
        roster.ais[0].blobs[0].position = Vec2::new(500.0, 500.0);
        roster.ais[0].blobs[0].set_mass(500.0);
        roster.ais[1].blobs[0].position = Vec2::new(504.0, 500.0);
        roster.ais[1].blobs[0].set_mass(100.0);

        let mut player = Player::spawn(Vec2::new(900.0, 900.0), 100.0, 2.0);
        resolve_blob_combat(&mut player, &mut roster, bounds, &config);

        assert_eq!(roster.ais[0].blobs[0].mass, 600.0);
        assert_eq!(roster.ais.len(), target);
    }
}
