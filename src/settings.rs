//! Player preferences
//!
//! Toggled at runtime from the page buttons. Only the high score is persisted,
//! so these start from the page config (or defaults) on every load.

use serde::{Deserialize, Serialize};

use crate::color::ColorScheme;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rainbow block colors
    pub rainbow: bool,
    /// Placement tones
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub volume: f32,
    /// Reduced motion (skips the game over wobble)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rainbow: false,
            sound_enabled: true,
            volume: 1.0,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Flip rainbow mode, returning the new value
    pub fn toggle_rainbow(&mut self) -> bool {
        self.rainbow = !self.rainbow;
        self.rainbow
    }

    /// Flip sound, returning the new value
    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::from_rainbow(self.rainbow)
    }

    /// Volume actually applied to sound effects
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
