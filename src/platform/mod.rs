//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key names to game actions)
//! - Browser setup failures

pub mod input;

pub use input::{Action, InputState};

use thiserror::Error;

/// Failures while wiring the game into the page
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{0} is not a {1}")]
    WrongElementType(String, &'static str),

    #[error("2D canvas context unavailable")]
    NoContext,

    #[error("JavaScript error: {0}")]
    Js(String),
}

/// What a `pagehide` means for the running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHide {
    /// Kept in the back/forward cache. Timers are suspended and resume on return.
    Cached,
    /// Unloaded for good
    Unloading,
}

impl PageHide {
    /// Classify from `PageTransitionEvent.persisted`
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unloading
        }
    }

    /// Whether the tick timer should be cleared
    pub fn stops_game_loop(&self) -> bool {
        *self == PageHide::Unloading
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlatformError::MissingElement("gameCanvas".into()).to_string(),
            "element #gameCanvas not found"
        );
        assert_eq!(
            PlatformError::WrongElementType("score".into(), "canvas").to_string(),
            "element #score is not a canvas"
        );
    }

    #[test]
    fn test_cached_page_keeps_game_loop() {
        assert_eq!(PageHide::from_persisted(true), PageHide::Cached);
        assert!(!PageHide::from_persisted(true).stops_game_loop());
        assert!(PageHide::from_persisted(false).stops_game_loop());
    }
}
