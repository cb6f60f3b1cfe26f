//! Entity model: blobs, food particles, colors.

mod blob;
mod food;

pub use blob::{radius_for_mass, Blob};
pub use food::Food;

use rand::Rng;

/// An RGB color attached to every drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform random color.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::new(
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(0..=255),
        )
    }

    /// CSS `rgb(...)` string for canvas fill styles.
    pub fn to_css(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}
