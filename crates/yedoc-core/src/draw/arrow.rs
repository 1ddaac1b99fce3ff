//! Arrow decorations for edge endpoints.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use svg::node::element::Element;

use crate::draw::ElementExt;

/// The arrow drawn at an edge endpoint.
///
/// Each variant maps to one of the `source`/`target` attribute values yEd
/// accepts on a `y:Arrows` element.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowType {
    /// No arrow decoration (default for edge sources)
    #[default]
    None,
    /// Filled classic arrow head
    Standard,
    /// Filled triangular arrow head
    Delta,
    WhiteDelta,
    Diamond,
    WhiteDiamond,
    Short,
    Plain,
    Concave,
    Convex,
    Circle,
    TransparentCircle,
    Dash,
    SkewedDash,
    TShape,
    CrowsFootOne,
    CrowsFootMany,
    CrowsFootOneOptional,
    CrowsFootManyOptional,
}

impl ArrowType {
    /// Returns the attribute value yEd uses for this arrow.
    pub fn to_yed_value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Standard => "standard",
            Self::Delta => "delta",
            Self::WhiteDelta => "white_delta",
            Self::Diamond => "diamond",
            Self::WhiteDiamond => "white_diamond",
            Self::Short => "short",
            Self::Plain => "plain",
            Self::Concave => "concave",
            Self::Convex => "convex",
            Self::Circle => "circle",
            Self::TransparentCircle => "transparent_circle",
            Self::Dash => "dash",
            Self::SkewedDash => "skewed_dash",
            Self::TShape => "t_shape",
            Self::CrowsFootOne => "crows_foot_one",
            Self::CrowsFootMany => "crows_foot_many",
            Self::CrowsFootOneOptional => "crows_foot_one_optional",
            Self::CrowsFootManyOptional => "crows_foot_many_optional",
        }
    }
}

impl FromStr for ArrowType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "delta" => Ok(Self::Delta),
            "white_delta" => Ok(Self::WhiteDelta),
            "diamond" => Ok(Self::Diamond),
            "white_diamond" => Ok(Self::WhiteDiamond),
            "short" => Ok(Self::Short),
            "plain" => Ok(Self::Plain),
            "concave" => Ok(Self::Concave),
            "convex" => Ok(Self::Convex),
            "circle" => Ok(Self::Circle),
            "transparent_circle" => Ok(Self::TransparentCircle),
            "dash" => Ok(Self::Dash),
            "skewed_dash" => Ok(Self::SkewedDash),
            "t_shape" => Ok(Self::TShape),
            "crows_foot_one" => Ok(Self::CrowsFootOne),
            "crows_foot_many" => Ok(Self::CrowsFootMany),
            "crows_foot_one_optional" => Ok(Self::CrowsFootOneOptional),
            "crows_foot_many_optional" => Ok(Self::CrowsFootManyOptional),
            _ => Err(format!("invalid arrow type `{s}`")),
        }
    }
}

/// The arrow pair of an edge, rendered as `y:Arrows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arrows {
    /// Arrow drawn at the source endpoint.
    pub source: ArrowType,
    /// Arrow drawn at the target endpoint.
    pub target: ArrowType,
}

impl Arrows {
    /// Creates an arrow pair.
    pub fn new(source: ArrowType, target: ArrowType) -> Self {
        Self { source, target }
    }

    /// Renders this pair as a `y:Arrows` element.
    pub fn render(&self) -> Element {
        Element::new("y:Arrows")
            .with("source", self.source.to_yed_value())
            .with("target", self.target.to_yed_value())
    }
}

impl Default for Arrows {
    /// The arrows yEd applies to freshly created edges: plain source,
    /// standard target head.
    fn default() -> Self {
        Self::new(ArrowType::None, ArrowType::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arrows() {
        let rendered = Arrows::default().render().to_string();
        assert!(rendered.contains("source=\"none\""));
        assert!(rendered.contains("target=\"standard\""));
    }

    #[test]
    fn test_yed_value_roundtrip() {
        let arrows = [
            ArrowType::None,
            ArrowType::Standard,
            ArrowType::Delta,
            ArrowType::WhiteDelta,
            ArrowType::Diamond,
            ArrowType::WhiteDiamond,
            ArrowType::Short,
            ArrowType::Plain,
            ArrowType::Concave,
            ArrowType::Convex,
            ArrowType::Circle,
            ArrowType::TransparentCircle,
            ArrowType::Dash,
            ArrowType::SkewedDash,
            ArrowType::TShape,
            ArrowType::CrowsFootOne,
            ArrowType::CrowsFootMany,
            ArrowType::CrowsFootOneOptional,
            ArrowType::CrowsFootManyOptional,
        ];
        for arrow in arrows {
            assert_eq!(arrow.to_yed_value().parse::<ArrowType>().unwrap(), arrow);
        }
    }
}
