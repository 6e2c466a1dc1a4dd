//! User-configurable appearance of a check button.

use checkmark_core::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default opacity of the background ring.
pub const DEFAULT_CIRCLE_ALPHA: f32 = 0.2;
/// Default stroke width in points.
pub const DEFAULT_LINE_WIDTH: f32 = 8.0;
/// Default animation length in seconds.
pub const DEFAULT_DURATION: f64 = 0.5;

/// Appearance and timing of a check button.
///
/// Values are not validated: a negative width or an alpha outside `[0, 1]`
/// is passed through to the layers unchanged.
///
/// Deserializes from TOML with every field optional:
///
/// ```
/// use checkmark_widgets::ButtonStyle;
///
/// let style = ButtonStyle::from_toml_str(r##"
///     color = "#ff3b30"
///     line_width = 50.0
/// "##).expect("valid style");
/// assert_eq!(style.line_width, 50.0);
/// assert_eq!(style.duration, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonStyle {
    /// Base stroke color
    #[serde(with = "hex_color")]
    pub color: Color,
    /// Opacity of the background ring stroke
    pub circle_alpha: f32,
    /// Stroke width of both layers, in points
    pub line_width: f32,
    /// Total select/deselect animation time, in seconds
    pub duration: f64,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            color: Color::ACCENT,
            circle_alpha: DEFAULT_CIRCLE_ALPHA,
            line_width: DEFAULT_LINE_WIDTH,
            duration: DEFAULT_DURATION,
        }
    }
}

impl ButtonStyle {
    /// Stroke color of the background ring.
    #[must_use]
    pub const fn ring_color(&self) -> Color {
        self.color.with_alpha(self.circle_alpha)
    }

    /// Stroke color of the animated check.
    #[must_use]
    pub const fn check_color(&self) -> Color {
        self.color
    }

    /// Parse a style from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a style from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Render the style as TOML.
    pub fn to_toml_string(&self) -> Result<String, StyleError> {
        Ok(toml::to_string(self)?)
    }
}

/// Errors produced while loading a [`ButtonStyle`].
#[derive(Debug, Error)]
pub enum StyleError {
    /// The style file could not be read.
    #[error("failed to read style file {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The TOML was malformed or a field had the wrong shape.
    #[error("invalid style: {0}")]
    Parse(#[from] toml::de::Error),
    /// The style could not be rendered as TOML.
    #[error("failed to serialize style: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Serde adapter storing a [`Color`] as a `#rrggbb` / `#rrggbbaa` string.
mod hex_color {
    use checkmark_core::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        if color.a >= 1.0 {
            serializer.serialize_str(&color.to_hex())
        } else {
            serializer.serialize_str(&color.to_hex_with_alpha())
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(|e| de::Error::custom(format!("color {raw:?}: {e}")))
    }
}
