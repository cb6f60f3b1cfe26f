//! Camera state: follow target, zoom and the world-to-screen mapping.

use crate::config::CameraConfig;
use glam::Vec2;

/// Viewport over the world, centered on the followed position.
#[derive(Debug, Clone)]
pub struct Camera {
    /// World position at the center of the screen.
    pub position: Vec2,
    /// Scale factor from world units to screen pixels.
    pub zoom: f32,
    /// Canvas size in screen pixels.
    pub canvas_size: Vec2,
    min_zoom: f32,
    max_zoom: f32,
    wheel_sensitivity: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig, canvas_size: Vec2, start: Vec2) -> Self {
        Self {
            position: start,
            zoom: 1.0,
            canvas_size,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            wheel_sensitivity: config.wheel_sensitivity,
        }
    }

    /// Track the followed entity. `None` freezes the camera in place, so
    /// the final frame stays framed after the followed entity is gone.
    pub fn follow(&mut self, target: Option<Vec2>) {
        if let Some(target) = target {
            self.position = target;
        }
    }

    /// Apply a wheel delta. Scrolling up (negative delta) zooms in; the
    /// result is clamped to the configured range.
    pub fn adjust_zoom(&mut self, delta_y: f32) {
        self.zoom = (self.zoom + delta_y * -self.wheel_sensitivity).clamp(self.min_zoom, self.max_zoom);
    }

    pub fn resize(&mut self, canvas_size: Vec2) {
        self.canvas_size = canvas_size;
    }

    /// Visible world-space extent of the viewport.
    pub fn viewport(&self) -> Vec2 {
        self.canvas_size / self.zoom
    }

    /// Whether a circle at `position` with `radius` intersects the
    /// visible viewport. Used to cull draw calls.
    pub fn is_on_screen(&self, position: Vec2, radius: f32) -> bool {
        let half = self.viewport() / 2.0;
        let offset = position - self.position;
        offset.x.abs() <= half.x + radius && offset.y.abs() <= half.y + radius
    }

    /// Map a world position to screen pixels.
    pub fn world_to_screen(&self, position: Vec2) -> Vec2 {
        (position - self.position) * self.zoom + self.canvas_size / 2.0
    }
}
