//! Base blob type shared by the player and the AI opponents.

use super::Color;
use glam::Vec2;

/// Mass scaling factor: 1 unit of food mass equals 100 units of player mass.
/// Kept as a tuning note; no consumption formula applies it.
pub const MASS_SCALING_FACTOR: f32 = 100.0;

/// A single mass-bearing circular entity.
#[derive(Debug, Clone)]
pub struct Blob {
    /// Position in world coordinates.
    pub position: Vec2,
    /// Current mass. Never negative; a blob at mass <= 0 is removed by
    /// its owner.
    pub mass: f32,
    /// Derived radius, kept in sync with mass.
    pub radius: f32,
    /// Draw color.
    pub color: Color,
    /// Base movement speed in world units per tick.
    pub speed: f32,
    /// Decaying impulse velocity, damped each tick.
    pub velocity: Vec2,
    /// Simulated-time stamp of the last split, if any.
    pub split_time: Option<f64>,
}

/// Radius derived from mass: area-proportional circles.
#[inline]
pub fn radius_for_mass(mass: f32) -> f32 {
    (mass / std::f32::consts::PI).sqrt()
}

impl Blob {
    /// Create a new blob with the radius derived from `mass`.
    pub fn new(position: Vec2, mass: f32, color: Color, speed: f32) -> Self {
        Self {
            position,
            mass,
            radius: radius_for_mass(mass),
            color,
            speed,
            velocity: Vec2::ZERO,
            split_time: None,
        }
    }

    /// Set the mass and recompute the radius.
    #[inline]
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
        self.radius = radius_for_mass(mass);
    }

    /// Called when this blob eats another entity.
    #[inline]
    pub fn absorb(&mut self, other_mass: f32) {
        self.set_mass(self.mass + other_mass);
    }

    /// Center distance to another blob.
    #[inline]
    pub fn distance_to(&self, other: &Blob) -> f32 {
        self.position.distance(other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_tracks_mass() {
        let mut blob = Blob::new(Vec2::ZERO, 100.0, Color::default(), 2.0);
        assert!((blob.radius - (100.0f32 / std::f32::consts::PI).sqrt()).abs() < 1e-5);

        blob.absorb(44.0);
        assert_eq!(blob.mass, 144.0);
        assert!((blob.radius - radius_for_mass(144.0)).abs() < 1e-5);

        blob.set_mass(20.0);
        assert!((blob.radius - radius_for_mass(20.0)).abs() < 1e-5);
    }

    #[test]
    fn absorb_conserves_mass() {
        let mut predator = Blob::new(Vec2::ZERO, 1000.0, Color::default(), 2.0);
        let prey_mass = 100.0;
        let before = predator.mass;
        predator.absorb(prey_mass);
        assert_eq!(predator.mass, before + prey_mass);
    }
}
