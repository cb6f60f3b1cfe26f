// Mouse and keyboard event handling
use glam::Vec2;

/// Shared input state written by DOM event closures and drained once per
/// frame by the game loop.
#[derive(Debug)]
pub struct InputState {
    /// Last known pointer position in screen pixels.
    pub pointer: Vec2,
    /// Accumulated wheel delta since the last frame.
    pub wheel_delta: f32,
    /// Space was pressed since the last frame.
    pub split_requested: bool,
    /// Canvas click since the last frame (restart trigger when over).
    pub click_requested: bool,
    /// New canvas size after a window resize, if any.
    pub resized: Option<Vec2>,
}

impl InputState {
    pub fn new(canvas_size: Vec2) -> Self {
        Self {
            pointer: canvas_size / 2.0,
            wheel_delta: 0.0,
            split_requested: false,
            click_requested: false,
            resized: None,
        }
    }

    /// Take the one-shot events, leaving the persistent pointer position.
    pub fn drain(&mut self) -> FrameInput {
        FrameInput {
            pointer: self.pointer,
            wheel_delta: std::mem::take(&mut self.wheel_delta),
            split_requested: std::mem::take(&mut self.split_requested),
            click_requested: std::mem::take(&mut self.click_requested),
            resized: self.resized.take(),
        }
    }
}

/// Snapshot of input consumed by a single frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub wheel_delta: f32,
    pub split_requested: bool,
    pub click_requested: bool,
    pub resized: Option<Vec2>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_resets_one_shot_events_but_keeps_pointer() {
        let mut state = InputState::new(Vec2::new(800.0, 600.0));
        state.pointer = Vec2::new(100.0, 200.0);
        state.wheel_delta = -120.0;
        state.split_requested = true;
        state.click_requested = true;
        state.resized = Some(Vec2::new(1024.0, 768.0));

        let frame = state.drain();
        assert_eq!(frame.pointer, Vec2::new(100.0, 200.0));
        assert_eq!(frame.wheel_delta, -120.0);
        assert!(frame.split_requested);
        assert!(frame.click_requested);
        assert_eq!(frame.resized, Some(Vec2::new(1024.0, 768.0)));

        let second = state.drain();
        assert_eq!(second.pointer, Vec2::new(100.0, 200.0));
        assert_eq!(second.wheel_delta, 0.0);
        assert!(!second.split_requested);
        assert!(!second.click_requested);
        assert_eq!(second.resized, None);
    }
}
