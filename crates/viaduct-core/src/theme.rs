//! Line themes: the color scheme shared by a line's stations and badges.
//!
//! A [`Theme`] is the 4-tuple `(city code, line id, background color,
//! foreground mono color)` and serializes as a JSON array so that it matches
//! the palette entries found in external save files.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// City identifier from the shared palette.
///
/// The palette is maintained externally and grows over time, so this is an
/// open string newtype rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityCode(String);

impl CityCode {
    /// Create a new city code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CityCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Two-tone foreground color used on top of a theme's background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonoColour {
    #[default]
    White,
    Black,
}

impl FromStr for MonoColour {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            _ => Err("Unsupported mono color"),
        }
    }
}

impl From<MonoColour> for &'static str {
    fn from(val: MonoColour) -> Self {
        match val {
            MonoColour::White => "white",
            MonoColour::Black => "black",
        }
    }
}

impl Display for MonoColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Colour theme of a line.
///
/// Propagated to keep coloring consistent across a line's stations and
/// interchange badges. Serializes as a 4-element array:
///
/// ```
/// use viaduct_core::theme::Theme;
///
/// let theme: Theme = serde_json::from_str(r##"["shanghai", "sh1", "#E3002B", "white"]"##).unwrap();
/// assert_eq!(theme.line(), "sh1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme(CityCode, String, Color, MonoColour);

impl Theme {
    /// Create a new theme from its four components.
    pub fn new(
        city: CityCode,
        line: impl Into<String>,
        background: Color,
        foreground: MonoColour,
    ) -> Self {
        Self(city, line.into(), background, foreground)
    }

    /// The city this line belongs to.
    pub fn city(&self) -> &CityCode {
        &self.0
    }

    /// The palette id of the line.
    pub fn line(&self) -> &str {
        &self.1
    }

    /// The line's background color.
    pub fn background(&self) -> Color {
        self.2
    }

    /// The foreground color drawn on top of the background.
    pub fn foreground(&self) -> MonoColour {
        self.3
    }

    /// This theme with a different background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.2 = background;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_theme() -> Theme {
        Theme::new(
            CityCode::new("guangzhou"),
            "gz1",
            Color::new("#F3D03E").unwrap(),
            MonoColour::Black,
        )
    }

    #[test]
    fn test_accessors() {
        let theme = sample_theme();
        assert_eq!(theme.city().as_str(), "guangzhou");
        assert_eq!(theme.line(), "gz1");
        assert_eq!(theme.foreground(), MonoColour::Black);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(sample_theme()).unwrap();
        let arr = json.as_array().expect("theme should serialize as an array");
        assert_eq!(arr.len(), 4);
        assert_eq!(arr[0], "guangzhou");
        assert_eq!(arr[1], "gz1");
        assert_eq!(arr[3], "black");
    }

    #[test]
    fn test_deserialize_from_array() {
        let theme: Theme =
            serde_json::from_str(r##"["shanghai", "sh2", "#97D700", "black"]"##).unwrap();
        assert_eq!(theme.city().as_str(), "shanghai");
        assert_eq!(theme.line(), "sh2");
        assert_eq!(theme.background(), Color::new("#97D700").unwrap());
    }

    #[test]
    fn test_mono_colour_from_str() {
        assert_eq!(MonoColour::from_str("white"), Ok(MonoColour::White));
        assert_eq!(MonoColour::from_str("black"), Ok(MonoColour::Black));
        assert!(MonoColour::from_str("grey").is_err());
    }
}
