//! Color handling for yedoc documents
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor`
//! type from the color crate. Colors can be constructed from any CSS color
//! string but are always emitted in the `#RRGGBB`/`#RRGGBBAA` hex form the
//! yEd editor expects.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use log::debug;

/// Wrapper around the `DynamicColor` type from the color crate
///
/// Absent colors (yEd's `"none"`) are modelled as `Option<Color>` on the
/// style types, not as a `Color` value.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => {
                debug!(input = color_str; "Rejected color string");
                Err(format!("invalid color `{color_str}`: {err}"))
            }
        }
    }

    /// Returns the yEd hex representation of this color.
    ///
    /// Opaque colors render as `#RRGGBB`; colors with an alpha component
    /// render as `#RRGGBBAA`, matching what yEd itself writes.
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc_core::color::Color;
    ///
    /// let orange = Color::new("#FF8000").unwrap();
    /// assert_eq!(orange.to_hex(), "#FF8000");
    ///
    /// let translucent = Color::new("#FF800080").unwrap();
    /// assert_eq!(translucent.to_hex(), "#FF800080");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == 255 {
            format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b, rgba.a)
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color, as a `f32`
    /// between 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_hex())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default_is_black() {
        let color = Color::default();
        assert_eq!(color.to_hex(), "#000000");
    }

    #[test]
    fn test_named_color_to_hex() {
        let gold = Color::new("#FFCC00").unwrap();
        assert_eq!(gold.to_hex(), "#FFCC00");

        let white = Color::new("white").unwrap();
        assert_eq!(white.to_hex(), "#FFFFFF");
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let transparent = color.with_alpha(0.5);
        assert!((transparent.alpha() - 0.5).abs() < 0.001);
        assert_eq!(transparent.to_hex().len(), "#RRGGBBAA".len());
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
