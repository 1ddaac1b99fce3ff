//! Stroke styling for node borders and edge lines.
//!
//! yEd uses the same attribute triple (color, dash pattern, width) for node
//! borders (`y:BorderStyle`) and edge lines (`y:LineStyle`); [`LineStyle`]
//! covers both and renders under the tag name the caller supplies.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use svg::node::element::Element;

use crate::{color::Color, draw::ElementExt};

/// The dash pattern of a stroke.
///
/// Each variant maps to one of the `type` attribute values yEd accepts on
/// `y:LineStyle` and `y:BorderStyle` elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineType {
    /// Solid continuous line (default)
    #[default]
    Line,
    Dashed,
    Dotted,
    DashedDotted,
}

impl LineType {
    /// Returns the `type` attribute value yEd uses for this pattern.
    pub fn to_yed_value(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::DashedDotted => "dashed_dotted",
        }
    }
}

impl FromStr for LineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "dashed_dotted" => Ok(Self::DashedDotted),
            _ => Err(format!(
                "invalid line type `{s}`, valid values: line, dashed, dotted, dashed_dotted"
            )),
        }
    }
}

/// Stroke definition shared by node borders and edge lines.
///
/// # Examples
///
/// ```
/// use yedoc_core::color::Color;
/// use yedoc_core::draw::{LineStyle, LineType};
///
/// let mut style = LineStyle::default();
/// style.set_line_type(LineType::Dashed);
/// style.set_color(Some(Color::new("#808080").unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    color: Option<Color>,
    line_type: LineType,
    width: f64,
}

impl LineStyle {
    /// Creates a solid stroke of the given color and width.
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color: Some(color),
            line_type: LineType::Line,
            width,
        }
    }

    /// The stroke color, `None` meaning yEd's `"none"` (invisible stroke).
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the stroke color; `None` renders as `"none"`.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// The dash pattern.
    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    /// Sets the dash pattern.
    pub fn set_line_type(&mut self, line_type: LineType) {
        self.line_type = line_type;
    }

    /// The stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the stroke width. Negative widths are rejected.
    pub fn set_width(&mut self, width: f64) -> Result<(), String> {
        if width < 0.0 {
            return Err(format!("stroke width must be non-negative, got {width}"));
        }
        self.width = width;
        Ok(())
    }

    /// Renders this stroke under the given tag name (`y:BorderStyle` for
    /// nodes, `y:LineStyle` for edges).
    pub fn render(&self, tag: &str) -> Element {
        Element::new(tag)
            .with(
                "color",
                self.color
                    .map_or_else(|| "none".to_string(), |c| c.to_hex()),
            )
            .with("type", self.line_type.to_yed_value())
            .with("width", self.width)
    }
}

impl Default for LineStyle {
    /// The stroke yEd applies to freshly created elements: solid black,
    /// width 1.
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_width_rejects_negative() {
        let mut style = LineStyle::default();
        assert!(style.set_width(-1.0).is_err());
        assert_eq!(style.width(), 1.0);

        assert!(style.set_width(2.5).is_ok());
        assert_eq!(style.width(), 2.5);
    }

    #[test]
    fn test_render_solid_border() {
        let style = LineStyle::default();
        let rendered = style.render("y:BorderStyle").to_string();
        assert!(rendered.contains("color=\"#000000\""));
        assert!(rendered.contains("type=\"line\""));
        assert!(rendered.contains("width=\"1\""));
    }

    #[test]
    fn test_render_none_color() {
        let mut style = LineStyle::default();
        style.set_color(None);
        let rendered = style.render("y:LineStyle").to_string();
        assert!(rendered.contains("color=\"none\""));
    }
}
