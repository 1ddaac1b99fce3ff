//! The closed catalog of `y:ShapeNode` shapes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The shape drawn for a shape node.
///
/// Each variant maps to one of the `type` attribute values yEd accepts on a
/// `y:Shape` element.
///
/// # Examples
///
/// ```
/// use yedoc_core::draw::ShapeKind;
///
/// assert_eq!(ShapeKind::RoundRectangle.to_yed_value(), "roundrectangle");
/// assert_eq!("ellipse".parse::<ShapeKind>().unwrap(), ShapeKind::Ellipse);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Plain rectangle (yEd's default shape)
    #[default]
    Rectangle,
    /// Rectangle with rounded corners
    RoundRectangle,
    /// Ellipse / circle
    Ellipse,
    Parallelogram,
    Hexagon,
    Octagon,
    Diamond,
    Triangle,
    Trapezoid,
    /// Trapezoid with the long side on top
    Trapezoid2,
    /// Rectangle with a 3D-effect border
    Rectangle3d,
    FatArrow,
    /// Fat arrow pointing the other way
    FatArrow2,
}

impl ShapeKind {
    /// Returns the `type` attribute value yEd uses for this shape.
    pub fn to_yed_value(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::RoundRectangle => "roundrectangle",
            Self::Ellipse => "ellipse",
            Self::Parallelogram => "parallelogram",
            Self::Hexagon => "hexagon",
            Self::Octagon => "octagon",
            Self::Diamond => "diamond",
            Self::Triangle => "triangle",
            Self::Trapezoid => "trapezoid",
            Self::Trapezoid2 => "trapezoid2",
            Self::Rectangle3d => "rectangle3d",
            Self::FatArrow => "fatarrow",
            Self::FatArrow2 => "fatarrow2",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(Self::Rectangle),
            "roundrectangle" => Ok(Self::RoundRectangle),
            "ellipse" => Ok(Self::Ellipse),
            "parallelogram" => Ok(Self::Parallelogram),
            "hexagon" => Ok(Self::Hexagon),
            "octagon" => Ok(Self::Octagon),
            "diamond" => Ok(Self::Diamond),
            "triangle" => Ok(Self::Triangle),
            "trapezoid" => Ok(Self::Trapezoid),
            "trapezoid2" => Ok(Self::Trapezoid2),
            "rectangle3d" => Ok(Self::Rectangle3d),
            "fatarrow" => Ok(Self::FatArrow),
            "fatarrow2" => Ok(Self::FatArrow2),
            _ => Err(format!("invalid shape type `{s}`")),
        }
    }
}
