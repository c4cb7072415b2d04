//! Player configuration
//!
//! A [`PlayerConfig`] is supplied once when the player is instantiated and
//! lives unmodified for the component's entire lifetime. The only
//! construction invariant is a non-empty video identifier; everything else
//! has a documented default.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Packed ARGB color, alpha in the high byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Opaque black - #000000
    pub const BLACK: Color = Color(0xFF00_0000);
    /// Opaque white - #ffffff
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Build a color from individual channel values
    pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// CSS hex form with no alpha channel: the packed value formatted as
    /// 8 hex digits (alpha then RGB) with the leading 2 alpha digits
    /// dropped.
    pub fn to_css_hex(&self) -> String {
        let argb = format!("{:08x}", self.0);
        format!("#{}", &argb[2..])
    }

    /// Parse an `RRGGBB` or `AARRGGBB` literal, with or without a leading
    /// `#`. Six-digit literals are treated as fully opaque.
    pub fn from_hex(literal: &str) -> Result<Self> {
        let digits = literal.trim_start_matches('#');
        let parsed = u32::from_str_radix(digits, 16)
            .map_err(|_| Error::InvalidConfig(format!("invalid color literal: {}", literal)))?;
        match digits.len() {
            6 => Ok(Self(0xFF00_0000 | parsed)),
            8 => Ok(Self(parsed)),
            _ => Err(Error::InvalidConfig(format!(
                "invalid color literal: {}",
                literal
            ))),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Embedded player configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Vimeo video identifier (required, non-empty)
    pub video_id: String,
    /// Start playback as soon as the player loads (default: false)
    pub autoplay: bool,
    /// Restart playback when the video ends (default: false)
    pub looping: bool,
    /// Start with the audio muted (default: false)
    pub muted: bool,
    /// Show the video title overlay (default: false)
    pub show_title: bool,
    /// Show the byline overlay (default: false)
    pub show_byline: bool,
    /// Show the uploader portrait overlay (default: false)
    pub show_portrait: bool,
    /// Show the Vimeo badge overlay (default: false)
    pub show_badge: bool,
    /// Show the player control bar (default: true)
    pub show_controls: bool,
    /// Ask the player not to track the session (default: true)
    pub do_not_track: bool,
    /// Document background color (default: opaque black)
    pub background_color: Color,
}

impl PlayerConfig {
    /// Create a configuration with the documented defaults.
    ///
    /// Fails with [`Error::InvalidConfig`] when `video_id` is empty; an
    /// empty identifier is never silently defaulted.
    pub fn new(video_id: impl Into<String>) -> Result<Self> {
        let config = Self {
            video_id: video_id.into(),
            autoplay: false,
            looping: false,
            muted: false,
            show_title: false,
            show_byline: false,
            show_portrait: false,
            show_badge: false,
            show_controls: true,
            do_not_track: true,
            background_color: Color::BLACK,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the construction invariants
    pub fn validate(&self) -> Result<()> {
        if self.video_id.is_empty() {
            return Err(Error::InvalidConfig("video_id must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PlayerConfig::new("76979871").unwrap();
        assert!(!config.autoplay);
        assert!(!config.looping);
        assert!(!config.muted);
        assert!(!config.show_title);
        assert!(!config.show_byline);
        assert!(!config.show_portrait);
        assert!(!config.show_badge);
        assert!(config.show_controls);
        assert!(config.do_not_track);
        assert_eq!(config.background_color, Color::BLACK);
    }

    #[test]
    fn test_empty_video_id_rejected() {
        let err = PlayerConfig::new("").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_css_hex_drops_alpha() {
        assert_eq!(Color::BLACK.to_css_hex(), "#000000");
        assert_eq!(Color::WHITE.to_css_hex(), "#ffffff");
        assert_eq!(Color::argb(0x80, 0x9b, 0x30, 0xff).to_css_hex(), "#9b30ff");
        assert_eq!(Color(0x0012_3456).to_css_hex(), "#123456");
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("9b30ff").unwrap(), Color(0xFF9B_30FF));
        assert_eq!(Color::from_hex("#9b30ff").unwrap(), Color(0xFF9B_30FF));
        assert_eq!(Color::from_hex("809b30ff").unwrap(), Color(0x809B_30FF));
        assert!(Color::from_hex("9b30f").is_err());
        assert!(Color::from_hex("not-a-color").is_err());
    }
}
