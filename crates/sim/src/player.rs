//! Human-controlled player: pointer steering, blob cohesion, merging and
//! splitting.

use crate::entity::{Blob, Color};
use crate::world::WorldBounds;
use glam::Vec2;

/// Pointer distance (screen px) at which the speed ramp saturates.
const POINTER_RAMP: f32 = 50.0;
/// Per-tick exponential damping applied to impulse velocity. Asymptotic;
/// the velocity never reaches exactly zero.
const VELOCITY_DAMPING: f32 = 0.95;
/// Push strength per unit of overlap between sibling blobs.
const REPULSION_FORCE: f32 = 0.5;
/// Base pull strength between separated sibling blobs.
const ATTRACTION_FORCE: f32 = 0.05;
/// Wall-clock window between merge passes, in simulated milliseconds.
pub const MERGE_INTERVAL_MS: f64 = 5000.0;
/// Minimum blob mass required to split.
pub const SPLIT_MIN_MASS: f32 = 20.0;
/// Impulse speed given to the ejected half of a split.
const SPLIT_IMPULSE: f32 = 10.0;

/// The human-controlled entity: an ordered collection of blobs.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub blobs: Vec<Blob>,
}

impl Player {
    /// Create a player with a single starting blob at the given position.
    pub fn spawn(position: Vec2, mass: f32, speed: f32) -> Self {
        Self {
            blobs: vec![Blob::new(position, mass, Color::new(0, 0, 255), speed)],
        }
    }

    /// Sum of all blob masses.
    pub fn total_mass(&self) -> f32 {
        self.blobs.iter().map(|b| b.mass).sum()
    }

    /// Arithmetic mean of blob positions. `None` with zero blobs.
    pub fn average_position(&self) -> Option<Vec2> {
        if self.blobs.is_empty() {
            return None;
        }
        let sum: Vec2 = self.blobs.iter().map(|b| b.position).sum();
        Some(sum / self.blobs.len() as f32)
    }

    /// Advance every blob toward the pointer. `steer` is the pointer
    /// position relative to the viewport center, in screen pixels; speed
    /// ramps linearly with pointer distance and caps at [`POINTER_RAMP`].
    /// Residual impulse velocity is applied and damped regardless of
    /// steering.
    pub fn move_toward(&mut self, steer: Vec2, bounds: WorldBounds) {
        let distance = steer.length();
        let step = if distance > 0.0 {
            let speed_factor = distance.min(POINTER_RAMP) / POINTER_RAMP;
            (steer / distance) * speed_factor
        } else {
            Vec2::ZERO
        };

        for blob in &mut self.blobs {
            let next = blob.position + step * blob.speed + blob.velocity;
            blob.position = bounds.clamp_blob(next, blob.radius);
            blob.velocity *= VELOCITY_DAMPING;
        }
    }

    /// Accumulate repulsion (overlapping pairs) and attraction (separated
    /// pairs) between sibling blobs into their impulse velocities. The
    /// forces take effect on the next position update, not immediately.
    pub fn apply_cohesion(&mut self) {
        for i in 0..self.blobs.len() {
            for j in (i + 1)..self.blobs.len() {
                let delta = self.blobs[i].position - self.blobs[j].position;
                let distance = delta.length();
                let min_distance = self.blobs[i].radius + self.blobs[j].radius;

                if distance < min_distance {
                    // Push apart along the connecting angle, proportional
                    // to overlap.
                    let angle = delta.y.atan2(delta.x);
                    let push = Vec2::new(angle.cos(), angle.sin())
                        * (REPULSION_FORCE * (min_distance - distance));
                    self.blobs[i].velocity += push;
                    self.blobs[j].velocity -= push;
                } else if distance > min_distance {
                    // Pull together; the heavier blob pulls less.
                    let direction = delta / distance;
                    let force_i = ATTRACTION_FORCE * (self.blobs[j].mass / self.blobs[i].mass);
                    let force_j = ATTRACTION_FORCE * (self.blobs[i].mass / self.blobs[j].mass);
                    self.blobs[i].velocity -= direction * force_i;
                    self.blobs[j].velocity += direction * force_j;
                }
            }
        }
    }

    /// Merge every overlapping pair into the lower-indexed blob. Runs a
    /// single pass; removal shifts indices, so the inner scan re-checks the
    /// shrunk collection and multiple merges per pass are expected.
    pub fn merge_pass(&mut self) {
        let mut i = 0;
        while i < self.blobs.len() {
            let mut j = i + 1;
            while j < self.blobs.len() {
                let distance = self.blobs[i].distance_to(&self.blobs[j]);
                if distance < self.blobs[i].radius + self.blobs[j].radius {
                    let absorbed = self.blobs.remove(j).mass;
                    self.blobs[i].absorb(absorbed);
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
    }

    /// Split every blob above the mass threshold in two. The new half is
    /// ejected one pre-split radius along `aim_angle` with an impulse;
    /// the original shrinks in place.
    pub fn split(&mut self, aim_angle: f32, now_ms: f64) {
        let direction = Vec2::new(aim_angle.cos(), aim_angle.sin());
        let mut ejected = Vec::new();

        for blob in &mut self.blobs {
            if blob.mass < SPLIT_MIN_MASS {
                continue;
            }
            let old_radius = blob.radius;
            let half_mass = blob.mass / 2.0;

            let mut twin = Blob::new(
                blob.position + direction * old_radius,
                half_mass,
                blob.color,
                blob.speed,
            );
            twin.velocity = direction * SPLIT_IMPULSE;
            twin.split_time = Some(now_ms);
            ejected.push(twin);

            blob.set_mass(half_mass);
            blob.split_time = Some(now_ms);
        }

        self.blobs.extend(ejected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::radius_for_mass;

    fn player_with(masses: &[f32]) -> Player {
        Player {
            blobs: masses
                .iter()
                .map(|&m| Blob::new(Vec2::new(500.0, 500.0), m, Color::default(), 2.0))
                .collect(),
        }
    }

    #[test]
    fn split_conserves_mass_and_geometry() {
        let mut player = player_with(&[20.0]);
        let old_radius = player.blobs[0].radius;
        player.split(0.0, 1000.0);

        assert_eq!(player.blobs.len(), 2);
        assert_eq!(player.blobs[0].mass, 10.0);
        assert_eq!(player.blobs[1].mass, 10.0);
        // Radii shrink by sqrt(2)
        let expected = old_radius / 2.0f32.sqrt();
        assert!((player.blobs[0].radius - expected).abs() < 1e-4);
        assert!((player.blobs[1].radius - expected).abs() < 1e-4);
        // Twin diverges by one pre-split radius along the aim angle
        let offset = player.blobs[1].position - player.blobs[0].position;
        assert!((offset.x - old_radius).abs() < 1e-4);
        assert!(offset.y.abs() < 1e-6);
        // Only the ejected half gets the impulse
        assert_eq!(player.blobs[1].velocity, Vec2::new(10.0, 0.0));
        assert_eq!(player.blobs[0].velocity, Vec2::ZERO);
        assert_eq!(player.blobs[0].split_time, Some(1000.0));
    }

    #[test]
    fn split_below_threshold_is_untouched() {
        let mut player = player_with(&[19.9]);
        player.split(0.0, 0.0);
        assert_eq!(player.blobs.len(), 1);
        assert_eq!(player.blobs[0].mass, 19.9);
    }

    #[test]
    fn merge_pass_conserves_mass() {
        // Three overlapping blobs collapse into one in a single pass
        let mut player = player_with(&[40.0, 30.0, 20.0]);
        let before = player.total_mass();
        player.merge_pass();
        assert_eq!(player.blobs.len(), 1);
        assert!((player.blobs[0].mass - before).abs() < 1e-4);
        assert!((player.blobs[0].radius - radius_for_mass(before)).abs() < 1e-4);
    }

    #[test]
    fn merge_pass_skips_separated_blobs() {
        let mut player = player_with(&[40.0, 40.0]);
        player.blobs[1].position = Vec2::new(900.0, 900.0);
        player.merge_pass();
        assert_eq!(player.blobs.len(), 2);
    }

    #[test]
    fn movement_ramps_with_pointer_distance() {
        let bounds = WorldBounds::new(1000.0);

        // Saturated ramp: full speed
        let mut player = player_with(&[100.0]);
        player.move_toward(Vec2::new(100.0, 0.0), bounds);
        assert!((player.blobs[0].position.x - 502.0).abs() < 1e-4);

        // Half ramp: 25 px of 50 px cap
        let mut player = player_with(&[100.0]);
        player.move_toward(Vec2::new(25.0, 0.0), bounds);
        assert!((player.blobs[0].position.x - 501.0).abs() < 1e-4);
    }

    #[test]
    fn zero_steer_still_applies_residual_velocity() {
        let bounds = WorldBounds::new(1000.0);
        let mut player = player_with(&[100.0]);
        player.blobs[0].velocity = Vec2::new(10.0, 0.0);
        player.move_toward(Vec2::ZERO, bounds);
        assert!((player.blobs[0].position.x - 510.0).abs() < 1e-4);
        assert!((player.blobs[0].velocity.x - 9.5).abs() < 1e-5);
    }

    #[test]
    fn cohesion_accumulates_into_velocity_not_position() {
        let mut player = player_with(&[100.0, 100.0]);
        player.blobs[1].position = Vec2::new(600.0, 500.0);
        let positions: Vec<Vec2> = player.blobs.iter().map(|b| b.position).collect();

        player.apply_cohesion();

        for (blob, pos) in player.blobs.iter().zip(positions) {
            assert_eq!(blob.position, pos);
        }
        // Separated pair attracts: blob 0 pulled toward +x, blob 1 toward -x
        assert!(player.blobs[0].velocity.x > 0.0);
        assert!(player.blobs[1].velocity.x < 0.0);
    }

    #[test]
    fn repulsion_pushes_overlapping_blobs_apart_by_overlap() {
        let mut player = player_with(&[100.0, 100.0]);
        player.blobs[1].position = Vec2::new(505.0, 500.0);
        let min_distance = 2.0 * radius_for_mass(100.0);
        assert!(min_distance > 5.0);

        player.apply_cohesion();

        // Opposite pushes along the connecting axis, half the overlap each
        let push = 0.5 * (min_distance - 5.0);
        assert!((player.blobs[0].velocity.x + push).abs() < 1e-4);
        assert!((player.blobs[1].velocity.x - push).abs() < 1e-4);
        assert!(player.blobs[0].velocity.y.abs() < 1e-5);
        assert!(player.blobs[1].velocity.y.abs() < 1e-5);
    }

    #[test]
    fn attraction_is_asymmetric_by_mass() {
        let mut player = player_with(&[400.0, 100.0]);
        player.blobs[1].position = Vec2::new(600.0, 500.0);
        player.apply_cohesion();
        // The heavier blob receives the weaker pull
        assert!(player.blobs[0].velocity.length() < player.blobs[1].velocity.length());
    }
}
