//! Display configuration
//!
//! Everything that differs between deployments of the clock: panel
//! geometry and orientation, text placement, the greeting and the
//! bring-up timing. [`DisplayConfig::default`] is the reference 128x32
//! deployment.

use heapless::String;
use monoclock_protocol::InitParams;
pub use monoclock_protocol::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::refresh::DEFAULT_REFRESH_INTERVAL_MS;

/// Maximum greeting length
pub const MAX_GREETING_LEN: usize = 16;

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Refresh interval of zero would redraw on every poll
    ZeroRefreshInterval,
    /// Greeting does not fit on one line of the panel
    GreetingTooLong,
    /// Text origin lies outside the panel
    OriginOffScreen,
    /// Panel height is not one the controller supports (8..=64, whole pages)
    HeightMismatch,
    /// Panel width or height differs from the framebuffer's
    GeometryMismatch,
}

/// Bring-up and transfer timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Timing {
    /// Hold time for each phase of the reset pulse
    pub reset_hold_ms: u32,
    /// Settle time after control-line changes
    pub settle_ms: u32,
    /// Settle time after the first (blank) frame
    pub post_clear_ms: u32,
    /// Bound on a single command byte
    pub command_timeout_ms: u32,
    /// Bound on a full-frame transfer
    pub frame_timeout_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            reset_hold_ms: 6,
            settle_ms: 10,
            post_clear_ms: 30,
            command_timeout_ms: 2000,
            frame_timeout_ms: 1000,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Panel width in columns
    pub width: u8,
    /// Panel height in rows
    pub height: u8,
    /// Panel orientation
    pub orientation: Orientation,
    /// Contrast level
    pub contrast: u8,
    /// Time between redraws
    pub refresh_interval_ms: u32,
    /// Left edge of the text line
    pub text_x: i32,
    /// Top edge of the text line
    pub text_y: i32,
    /// Text shown on the first frame
    pub greeting: String<MAX_GREETING_LEN>,
    /// Bring-up and transfer timing
    pub timing: Timing,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let mut greeting = String::new();
        let _ = greeting.push_str("Hi");

        Self {
            width: 128,
            height: 32,
            orientation: Orientation::Standard,
            contrast: 0x8F,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            text_x: 0,
            text_y: 9,
            greeting,
            timing: Timing::default(),
        }
    }
}

impl DisplayConfig {
    /// Check the configuration for internal consistency
    ///
    /// `cell_width` is the font's glyph width, used to check that the
    /// greeting fits on the line.
    pub fn validate(&self, cell_width: u8) -> Result<(), ConfigError> {
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if self.height == 0 || self.height > 64 || self.height % 8 != 0 {
            return Err(ConfigError::HeightMismatch);
        }
        if self.text_x < 0
            || self.text_y < 0
            || self.text_x >= self.width as i32
            || self.text_y >= self.height as i32
        {
            return Err(ConfigError::OriginOffScreen);
        }

        let advance = cell_width as i32 + 1;
        let glyphs = self.greeting.chars().count() as i32;
        // The trailing gap after the last glyph may fall off the edge
        let needed = (glyphs * advance - 1).max(0);
        if self.text_x + needed > self.width as i32 {
            return Err(ConfigError::GreetingTooLong);
        }

        Ok(())
    }

    /// Check that a framebuffer of `width` x `height` matches this panel
    pub fn matches_buffer(&self, width: usize, height: usize) -> Result<(), ConfigError> {
        if self.width as usize == width && self.height as usize == height {
            Ok(())
        } else {
            Err(ConfigError::GeometryMismatch)
        }
    }

    /// Bring-up parameters derived from this configuration
    pub fn init_params(&self) -> InitParams {
        InitParams {
            contrast: self.contrast,
            orientation: self.orientation,
            ..InitParams::for_height(self.height)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_deployment() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, 128);
        assert_eq!(config.height, 32);
        assert_eq!(config.refresh_interval_ms, 100);
        assert_eq!((config.text_x, config.text_y), (0, 9));
        assert_eq!(config.greeting.as_str(), "Hi");
        assert_eq!(config.timing.command_timeout_ms, 2000);
        assert_eq!(config.timing.frame_timeout_ms, 1000);
        assert_eq!(config.validate(8), Ok(()));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = DisplayConfig {
            refresh_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(8), Err(ConfigError::ZeroRefreshInterval));
    }

    #[test]
    fn test_height_rejected() {
        for height in [0, 12, 72] {
            let config = DisplayConfig {
                height,
                ..Default::default()
            };
            assert_eq!(config.validate(8), Err(ConfigError::HeightMismatch));
        }
    }

    #[test]
    fn test_height_range_accepted() {
        for height in [8, 16, 64] {
            let config = DisplayConfig {
                height,
                text_y: 0,
                ..Default::default()
            };
            assert_eq!(config.validate(8), Ok(()));
        }
    }

    #[test]
    fn test_origin_off_screen() {
        let config = DisplayConfig {
            text_y: 32,
            ..Default::default()
        };
        assert_eq!(config.validate(8), Err(ConfigError::OriginOffScreen));

        let config = DisplayConfig {
            text_x: -1,
            ..Default::default()
        };
        assert_eq!(config.validate(8), Err(ConfigError::OriginOffScreen));
    }

    #[test]
    fn test_greeting_too_long() {
        let mut config = DisplayConfig::default();
        config.greeting.clear();
        // 15 glyphs * 9 columns - 1 = 134 > 128
        config.greeting.push_str("HHHHHHHHHHHHHHH").unwrap();
        assert_eq!(config.validate(8), Err(ConfigError::GreetingTooLong));

        // 14 glyphs end exactly at column 125
        config.greeting.pop();
        assert_eq!(config.validate(8), Ok(()));
    }

    #[test]
    fn test_matches_buffer() {
        let config = DisplayConfig::default();
        assert_eq!(config.matches_buffer(128, 32), Ok(()));
        assert_eq!(config.matches_buffer(128, 64), Err(ConfigError::GeometryMismatch));
        assert_eq!(config.matches_buffer(96, 32), Err(ConfigError::GeometryMismatch));
    }

    #[test]
    fn test_init_params() {
        let config = DisplayConfig {
            contrast: 0x20,
            orientation: Orientation::Flipped,
            ..Default::default()
        };
        let params = config.init_params();
        assert_eq!(params.height, 32);
        assert_eq!(params.contrast, 0x20);
        assert_eq!(params.orientation, Orientation::Flipped);
        assert_eq!(params.precharge, 0xF1);
    }
}
