//! Per-frame input state for the event-polling loop.
//!
//! The frame loop drains the SDL2 event pump into these structs once per
//! frame, then hands them to the scene as an [`UpdateContext`]. Discrete
//! presses/releases and motion deltas are transient and cleared at the start
//! of every frame; held keys and buttons persist in `down`.

use std::collections::HashSet;

use glam::Vec2;
use sdl2::{keyboard::Keycode, mouse::MouseButton};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the per-frame press/release sets. Held keys stay in `down`.
    pub fn clear_transient(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// The current state of the mouse.
#[derive(Default)]
pub struct MouseState {
    pub position: Vec2,
    pub delta: Vec2,
    pub down: HashSet<MouseButton>,
    pub pressed: HashSet<MouseButton>,
    pub released: HashSet<MouseButton>,
    pub scroll_delta: Vec2,
}

impl MouseState {
    /// Clears the per-frame deltas and press/release sets.
    pub fn clear_transient(&mut self) {
        self.delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
        self.pressed.clear();
        self.released.clear();
    }
}

/// Context handed to the scene during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    pub mouse: &'a MouseState,
    pub delta_time: f32,
}

impl<'a> UpdateContext<'a> {
    pub fn new(keyboard: &'a KeyboardState, mouse: &'a MouseState, delta_time: f32) -> Self {
        Self {
            keyboard,
            mouse,
            delta_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_transient_keeps_held_keys() {
        let mut keyboard = KeyboardState::default();
        keyboard.down.insert(Keycode::W);
        keyboard.pressed.insert(Keycode::W);
        keyboard.clear_transient();
        assert!(keyboard.down.contains(&Keycode::W));
        assert!(keyboard.pressed.is_empty());
    }

    #[test]
    fn clear_transient_zeroes_mouse_deltas() {
        let mut mouse = MouseState::default();
        mouse.delta = Vec2::new(3.0, -2.0);
        mouse.scroll_delta = Vec2::new(0.0, 1.0);
        mouse.position = Vec2::new(100.0, 50.0);
        mouse.clear_transient();
        assert_eq!(mouse.delta, Vec2::ZERO);
        assert_eq!(mouse.scroll_delta, Vec2::ZERO);
        assert_eq!(mouse.position, Vec2::new(100.0, 50.0));
    }
}
