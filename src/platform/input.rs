//! Keyboard input
//!
//! Maps `KeyboardEvent.key` names to game actions and tracks held keys
//! between ticks. Movement keys are sampled every tick; pause and restart
//! are latched until the next tick consumes them.

use crate::sim::TickInput;

/// Something a key can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Pause,
    Restart,
    ToggleMute,
    CycleQuality,
}

impl Action {
    /// Map a `KeyboardEvent.key` value (arrows and WASD are aliases)
    pub fn from_key(key: &str) -> Option<Action> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Action::Left),
            "ArrowRight" | "d" | "D" => Some(Action::Right),
            "ArrowUp" | "w" | "W" => Some(Action::Up),
            "ArrowDown" | "s" | "S" => Some(Action::Down),
            "Escape" | "p" | "P" => Some(Action::Pause),
            "r" | "R" => Some(Action::Restart),
            "m" | "M" => Some(Action::ToggleMute),
            "q" | "Q" => Some(Action::CycleQuality),
            _ => None,
        }
    }
}

/// Held movement keys plus latched one-shot commands
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pause: bool,
    restart: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a keydown. Auto-repeat only refreshes held keys.
    ///
    /// Returns the mapped action so the caller can suppress the browser
    /// default (page scrolling) and handle mute itself.
    pub fn key_down(&mut self, key: &str, repeat: bool) -> Option<Action> {
        let action = Action::from_key(key)?;
        match action {
            Action::Left => self.left = true,
            Action::Right => self.right = true,
            Action::Up => self.up = true,
            Action::Down => self.down = true,
            Action::Pause if !repeat => self.pause = true,
            Action::Restart if !repeat => self.restart = true,
            _ => {}
        }
        Some(action)
    }

    pub fn key_up(&mut self, key: &str) -> Option<Action> {
        let action = Action::from_key(key)?;
        match action {
            Action::Left => self.left = false,
            Action::Right => self.right = false,
            Action::Up => self.up = false,
            Action::Down => self.down = false,
            _ => {}
        }
        Some(action)
    }

    /// Queue a pause toggle (used for auto-pause on blur)
    pub fn request_pause(&mut self) {
        self.pause = true;
    }

    /// Drop held keys, e.g. when focus is lost and keyups will never arrive
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
        self.up = false;
        self.down = false;
    }

    /// Build this tick's input, consuming latched commands
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            pause: std::mem::take(&mut self.pause),
            restart: std::mem::take(&mut self.restart),
            autopilot: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_aliases() {
        assert_eq!(Action::from_key("ArrowLeft"), Some(Action::Left));
        assert_eq!(Action::from_key("a"), Some(Action::Left));
        assert_eq!(Action::from_key("D"), Some(Action::Right));
        assert_eq!(Action::from_key("w"), Some(Action::Up));
        assert_eq!(Action::from_key("ArrowDown"), Some(Action::Down));
        assert_eq!(Action::from_key("Escape"), Some(Action::Pause));
        assert_eq!(Action::from_key("P"), Some(Action::Pause));
        assert_eq!(Action::from_key("r"), Some(Action::Restart));
        assert_eq!(Action::from_key("M"), Some(Action::ToggleMute));
        assert_eq!(Action::from_key("q"), Some(Action::CycleQuality));
        assert_eq!(Action::from_key("x"), None);
        assert_eq!(Action::from_key(" "), None);
    }

    #[test]
    fn test_held_keys() {
        let mut input = InputState::new();
        input.key_down("ArrowLeft", false);
        input.key_down("w", false);
        let tick = input.take_tick_input();
        assert!(tick.left && tick.up);
        assert!(!tick.right && !tick.down);

        // Held keys persist across ticks
        assert!(input.take_tick_input().left);
        input.key_up("a");
        assert!(!input.take_tick_input().left);
    }

    #[test]
    fn test_one_shots_latch_once() {
        let mut input = InputState::new();
        input.key_down("p", false);
        input.key_down("R", false);
        let tick = input.take_tick_input();
        assert!(tick.pause && tick.restart);
        let tick = input.take_tick_input();
        assert!(!tick.pause && !tick.restart);

        // Auto-repeat does not re-toggle
        input.key_down("Escape", true);
        assert!(!input.take_tick_input().pause);
    }

    #[test]
    fn test_release_all() {
        let mut input = InputState::new();
        input.key_down("ArrowRight", false);
        input.key_down("s", false);
        input.release_all();
        let tick = input.take_tick_input();
        assert!(!tick.right && !tick.down);
    }
}
