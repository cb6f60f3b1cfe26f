//! Food particle.

use super::Color;
use glam::Vec2;

/// An ephemeral food particle. Destroyed on consumption and immediately
/// replaced by a freshly randomized instance.
#[derive(Debug, Clone)]
pub struct Food {
    pub position: Vec2,
    pub radius: f32,
    pub mass: f32,
    pub color: Color,
}

impl Food {
    pub fn new(position: Vec2, radius: f32, mass: f32, color: Color) -> Self {
        Self {
            position,
            radius,
            mass,
            color,
        }
    }
}
