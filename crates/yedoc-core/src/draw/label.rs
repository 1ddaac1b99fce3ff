//! Label text, typography and positioning models.
//!
//! yEd positions labels through a *model*: a named placement scheme plus a
//! position within that scheme. Node and edge labels use disjoint model
//! catalogs, so they are separate types here ([`NodeLabelModel`],
//! [`EdgeLabelModel`]). The models and their positions are closed sets;
//! invalid combinations are unrepresentable.
//!
//! Labels are plain values. Attaching one to a node or edge stores it by
//! value, and the template registries clone them along with their owner.

use serde::{Deserialize, Serialize};
use svg::node::element::Element;

use crate::{color::Color, draw::ElementExt};

/// Font style of a label, the `fontStyle` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Returns the attribute value yEd uses for this style.
    pub fn to_yed_value(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::BoldItalic => "bolditalic",
        }
    }
}

/// Horizontal text alignment of a label, the `alignment` attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    /// Returns the attribute value yEd uses for this alignment.
    pub fn to_yed_value(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Position within the `internal` node label model.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalPosition {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl InternalPosition {
    fn to_yed_value(self) -> &'static str {
        match self {
            Self::Center => "c",
            Self::Top => "t",
            Self::Bottom => "b",
            Self::Left => "l",
            Self::Right => "r",
            Self::TopLeft => "tl",
            Self::TopRight => "tr",
            Self::BottomLeft => "bl",
            Self::BottomRight => "br",
        }
    }
}

/// A compass position used by the `corners`, `sides`, `sandwich` and
/// `eight_pos` node label models.
///
/// Each model accepts only a subset of the compass; the [`NodeLabelModel`]
/// constructors take the specific subset they allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmartPosition {
    North,
    South,
    East,
    West,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl SmartPosition {
    fn to_yed_value(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthWest => "nw",
            Self::NorthEast => "ne",
            Self::SouthWest => "sw",
            Self::SouthEast => "se",
        }
    }

    fn is_corner(self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthWest | Self::SouthEast
        )
    }

    fn is_side(self) -> bool {
        !self.is_corner()
    }
}

/// Placement scheme for a node label.
///
/// # Examples
///
/// ```
/// use yedoc_core::draw::{InternalPosition, NodeLabelModel, SmartPosition};
///
/// let inside = NodeLabelModel::Internal(InternalPosition::Top);
/// assert_eq!(inside.model_name(), "internal");
/// assert_eq!(inside.model_position(), Some("t"));
///
/// // Only corner positions are valid for the corners model
/// assert!(NodeLabelModel::corners(SmartPosition::NorthWest).is_ok());
/// assert!(NodeLabelModel::corners(SmartPosition::North).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeLabelModel {
    /// Inside the node's bounding box.
    Internal(InternalPosition),
    /// Outside, at one of the four corners.
    Corners(SmartPosition),
    /// Outside, above or below the node.
    Sandwich(SmartPosition),
    /// Outside, centered on one of the four sides.
    Sides(SmartPosition),
    /// Outside, at any of the eight compass positions.
    EightPos(SmartPosition),
    /// Anywhere on the drawing pane, positioned manually in yEd.
    Free,
}

impl NodeLabelModel {
    /// A `corners` model; `position` must be one of the four corners.
    pub fn corners(position: SmartPosition) -> Result<Self, String> {
        if position.is_corner() {
            Ok(Self::Corners(position))
        } else {
            Err(format!(
                "corners model requires a corner position, got `{}`",
                position.to_yed_value()
            ))
        }
    }

    /// A `sandwich` model; `position` must be north or south.
    pub fn sandwich(position: SmartPosition) -> Result<Self, String> {
        if matches!(position, SmartPosition::North | SmartPosition::South) {
            Ok(Self::Sandwich(position))
        } else {
            Err(format!(
                "sandwich model requires north or south, got `{}`",
                position.to_yed_value()
            ))
        }
    }

    /// A `sides` model; `position` must be one of the four sides.
    pub fn sides(position: SmartPosition) -> Result<Self, String> {
        if position.is_side() {
            Ok(Self::Sides(position))
        } else {
            Err(format!(
                "sides model requires a side position, got `{}`",
                position.to_yed_value()
            ))
        }
    }

    /// The `modelName` attribute value.
    pub fn model_name(self) -> &'static str {
        match self {
            Self::Internal(_) => "internal",
            Self::Corners(_) => "corners",
            Self::Sandwich(_) => "sandwich",
            Self::Sides(_) => "sides",
            Self::EightPos(_) => "eight_pos",
            Self::Free => "free",
        }
    }

    /// The `modelPosition` attribute value, when the model has one.
    pub fn model_position(self) -> Option<&'static str> {
        match self {
            Self::Internal(position) => Some(position.to_yed_value()),
            Self::Corners(position)
            | Self::Sandwich(position)
            | Self::Sides(position)
            | Self::EightPos(position) => Some(position.to_yed_value()),
            Self::Free => Some("anywhere"),
        }
    }
}

impl Default for NodeLabelModel {
    fn default() -> Self {
        Self::Internal(InternalPosition::Center)
    }
}

/// Placement scheme for an edge label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeLabelModel {
    /// Above the edge at its head or tail (`two_pos`).
    AtHead,
    AtTail,
    /// Centered on the edge path (`centered`).
    #[default]
    Centered,
    /// `six_pos` placements around head and tail.
    Head,
    SourceHead,
    TargetHead,
    Tail,
    SourceTail,
    TargetTail,
    /// `three_center` placements around the path center.
    Center,
    SourceCenter,
    TargetCenter,
    /// Freely slidable along the path center line.
    CenterSlider,
    /// Freely slidable along the path sides.
    SideSlider,
}

impl EdgeLabelModel {
    /// The `modelName` attribute value.
    pub fn model_name(self) -> &'static str {
        match self {
            Self::AtHead | Self::AtTail => "two_pos",
            Self::Centered => "centered",
            Self::Head
            | Self::SourceHead
            | Self::TargetHead
            | Self::Tail
            | Self::SourceTail
            | Self::TargetTail => "six_pos",
            Self::Center | Self::SourceCenter | Self::TargetCenter => "three_center",
            Self::CenterSlider => "center_slider",
            Self::SideSlider => "side_slider",
        }
    }

    /// The `modelPosition` attribute value, when the model has one.
    pub fn model_position(self) -> Option<&'static str> {
        match self {
            Self::AtHead => Some("head"),
            Self::AtTail => Some("tail"),
            Self::Centered => Some("center"),
            Self::Head => Some("head"),
            Self::SourceHead => Some("shead"),
            Self::TargetHead => Some("thead"),
            Self::Tail => Some("tail"),
            Self::SourceTail => Some("stail"),
            Self::TargetTail => Some("ttail"),
            Self::Center => Some("center"),
            Self::SourceCenter => Some("scentr"),
            Self::TargetCenter => Some("tcentr"),
            Self::CenterSlider | Self::SideSlider => None,
        }
    }
}

/// Typography shared by node and edge labels.
#[derive(Debug, Clone, PartialEq)]
struct Typography {
    font_family: String,
    font_size: u32,
    font_style: FontStyle,
    text_color: Color,
    background_color: Option<Color>,
    line_color: Option<Color>,
    alignment: Alignment,
    visible: bool,
    underlined: bool,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: "Dialog".to_string(),
            font_size: 12,
            font_style: FontStyle::default(),
            text_color: Color::default(),
            background_color: None,
            line_color: None,
            alignment: Alignment::default(),
            visible: true,
            underlined: false,
        }
    }
}

impl Typography {
    /// Applies the shared label attributes to a `y:NodeLabel`/`y:EdgeLabel`
    /// element.
    fn apply(&self, element: Element) -> Element {
        let element = element
            .with("alignment", self.alignment.to_yed_value())
            .with("fontFamily", self.font_family.as_str())
            .with("fontSize", self.font_size as f64)
            .with("fontStyle", self.font_style.to_yed_value())
            .with("textColor", self.text_color.to_hex())
            .with("underlinedText", self.underlined.to_string())
            .with("visible", self.visible.to_string());
        let element = match self.background_color {
            Some(color) => element.with("backgroundColor", color.to_hex()),
            None => element.with("hasBackgroundColor", "false"),
        };
        match self.line_color {
            Some(color) => element.with("lineColor", color.to_hex()),
            None => element.with("hasLineColor", "false"),
        }
    }
}

macro_rules! typography_accessors {
    () => {
        /// The label text.
        pub fn text(&self) -> &str {
            &self.text
        }

        /// Sets the label text. Empty text is rejected.
        pub fn set_text(&mut self, text: &str) -> Result<(), String> {
            if text.is_empty() {
                return Err("label text must not be empty".to_string());
            }
            self.text = text.to_string();
            Ok(())
        }

        /// The font family name.
        pub fn font_family(&self) -> &str {
            &self.typography.font_family
        }

        /// Sets the font family name.
        pub fn set_font_family(&mut self, family: &str) {
            self.typography.font_family = family.to_string();
        }

        /// The font size in points.
        pub fn font_size(&self) -> u32 {
            self.typography.font_size
        }

        /// Sets the font size. Zero is rejected.
        pub fn set_font_size(&mut self, size: u32) -> Result<(), String> {
            if size == 0 {
                return Err("font size must be positive".to_string());
            }
            self.typography.font_size = size;
            Ok(())
        }

        /// The font style.
        pub fn font_style(&self) -> FontStyle {
            self.typography.font_style
        }

        /// Sets the font style.
        pub fn set_font_style(&mut self, style: FontStyle) {
            self.typography.font_style = style;
        }

        /// The text color.
        pub fn text_color(&self) -> Color {
            self.typography.text_color
        }

        /// Sets the text color.
        pub fn set_text_color(&mut self, color: Color) {
            self.typography.text_color = color;
        }

        /// The background color, `None` meaning no background.
        pub fn background_color(&self) -> Option<Color> {
            self.typography.background_color
        }

        /// Sets the background color.
        pub fn set_background_color(&mut self, color: Option<Color>) {
            self.typography.background_color = color;
        }

        /// The border line color, `None` meaning no border.
        pub fn line_color(&self) -> Option<Color> {
            self.typography.line_color
        }

        /// Sets the border line color.
        pub fn set_line_color(&mut self, color: Option<Color>) {
            self.typography.line_color = color;
        }

        /// The horizontal text alignment.
        pub fn alignment(&self) -> Alignment {
            self.typography.alignment
        }

        /// Sets the horizontal text alignment.
        pub fn set_alignment(&mut self, alignment: Alignment) {
            self.typography.alignment = alignment;
        }

        /// Whether the label is visible.
        pub fn visible(&self) -> bool {
            self.typography.visible
        }

        /// Sets label visibility.
        pub fn set_visible(&mut self, visible: bool) {
            self.typography.visible = visible;
        }

        /// Whether the text is underlined.
        pub fn underlined(&self) -> bool {
            self.typography.underlined
        }

        /// Sets text underlining.
        pub fn set_underlined(&mut self, underlined: bool) {
            self.typography.underlined = underlined;
        }
    };
}

/// A label attached to a node.
///
/// # Examples
///
/// ```
/// use yedoc_core::draw::{FontStyle, NodeLabel};
///
/// let mut label = NodeLabel::new("Gateway").unwrap();
/// label.set_font_style(FontStyle::Bold);
/// assert_eq!(label.text(), "Gateway");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLabel {
    text: String,
    model: NodeLabelModel,
    typography: Typography,
}

impl NodeLabel {
    /// Creates a label with default typography, centered inside the node.
    /// Empty text is rejected.
    pub fn new(text: &str) -> Result<Self, String> {
        if text.is_empty() {
            return Err("label text must not be empty".to_string());
        }
        Ok(Self {
            text: text.to_string(),
            model: NodeLabelModel::default(),
            typography: Typography::default(),
        })
    }

    typography_accessors!();

    /// The placement model.
    pub fn model(&self) -> NodeLabelModel {
        self.model
    }

    /// Sets the placement model.
    pub fn set_model(&mut self, model: NodeLabelModel) {
        self.model = model;
    }

    /// Renders this label as a `y:NodeLabel` element.
    pub fn render(&self) -> Element {
        let element = Element::new("y:NodeLabel")
            .with("autoSizePolicy", "content")
            .with("modelName", self.model.model_name());
        let element = match self.model.model_position() {
            Some(position) => element.with("modelPosition", position),
            None => element,
        };
        // Text nodes escape their content when rendered; pass the raw text.
        self.typography
            .apply(element)
            .child(svg::node::Text::new(self.text.as_str()))
    }
}

/// A label attached to an edge.
///
/// # Examples
///
/// ```
/// use yedoc_core::draw::{EdgeLabel, EdgeLabelModel};
///
/// let mut label = EdgeLabel::new("select *").unwrap();
/// label.set_model(EdgeLabelModel::SourceHead);
/// assert_eq!(label.model().model_name(), "six_pos");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    text: String,
    model: EdgeLabelModel,
    distance: f64,
    ratio: f64,
    typography: Typography,
}

impl EdgeLabel {
    /// Creates a label with default typography, centered on the edge path.
    /// Empty text is rejected.
    pub fn new(text: &str) -> Result<Self, String> {
        if text.is_empty() {
            return Err("label text must not be empty".to_string());
        }
        Ok(Self {
            text: text.to_string(),
            model: EdgeLabelModel::default(),
            distance: 2.0,
            ratio: 0.5,
            typography: Typography::default(),
        })
    }

    typography_accessors!();

    /// The placement model.
    pub fn model(&self) -> EdgeLabelModel {
        self.model
    }

    /// Sets the placement model.
    pub fn set_model(&mut self, model: EdgeLabelModel) {
        self.model = model;
    }

    /// The distance from the edge path.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Sets the distance from the edge path. Negative distances are
    /// rejected.
    pub fn set_distance(&mut self, distance: f64) -> Result<(), String> {
        if distance < 0.0 {
            return Err(format!("label distance must be non-negative, got {distance}"));
        }
        self.distance = distance;
        Ok(())
    }

    /// The placement ratio along the edge path, 0.0 at the source and 1.0
    /// at the target.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Sets the placement ratio. Values outside `0.0..=1.0` are rejected.
    pub fn set_ratio(&mut self, ratio: f64) -> Result<(), String> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(format!("label ratio must be within 0..=1, got {ratio}"));
        }
        self.ratio = ratio;
        Ok(())
    }

    /// Renders this label as a `y:EdgeLabel` element.
    pub fn render(&self) -> Element {
        let element = Element::new("y:EdgeLabel")
            .with("distance", self.distance)
            .with("ratio", self.ratio)
            .with("modelName", self.model.model_name());
        let element = match self.model.model_position() {
            Some(position) => element.with("modelPosition", position),
            None => element,
        };
        self.typography
            .apply(element)
            .child(svg::node::Text::new(self.text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_label_rejects_empty_text() {
        assert!(NodeLabel::new("").is_err());

        let mut label = NodeLabel::new("a").unwrap();
        assert!(label.set_text("").is_err());
        assert_eq!(label.text(), "a");
    }

    #[test]
    fn test_node_label_default_render() {
        let label = NodeLabel::new("Gateway").unwrap();
        let rendered = label.render().to_string();
        assert!(rendered.starts_with("<y:NodeLabel"));
        assert!(rendered.contains("modelName=\"internal\""));
        assert!(rendered.contains("modelPosition=\"c\""));
        assert!(rendered.contains("fontFamily=\"Dialog\""));
        assert!(rendered.contains("fontSize=\"12\""));
        assert!(rendered.contains("hasBackgroundColor=\"false\""));
        assert!(rendered.contains("Gateway"));
    }

    #[test]
    fn test_label_text_is_escaped_exactly_once() {
        let label = NodeLabel::new("a < b & c").unwrap();
        let rendered = label.render().to_string();
        assert!(rendered.contains("a &lt; b &amp; c"));
        assert!(!rendered.contains("&amp;lt;"), "text must not be escaped twice");
    }

    #[test]
    fn test_smart_position_subsets() {
        assert!(NodeLabelModel::corners(SmartPosition::SouthEast).is_ok());
        assert!(NodeLabelModel::corners(SmartPosition::East).is_err());
        assert!(NodeLabelModel::sides(SmartPosition::East).is_ok());
        assert!(NodeLabelModel::sides(SmartPosition::SouthEast).is_err());
        assert!(NodeLabelModel::sandwich(SmartPosition::South).is_ok());
        assert!(NodeLabelModel::sandwich(SmartPosition::East).is_err());
    }

    #[test]
    fn test_edge_label_slider_has_no_position() {
        let mut label = EdgeLabel::new("x").unwrap();
        label.set_model(EdgeLabelModel::CenterSlider);
        let rendered = label.render().to_string();
        assert!(rendered.contains("modelName=\"center_slider\""));
        assert!(!rendered.contains("modelPosition"));
    }

    #[test]
    fn test_edge_label_ratio_bounds() {
        let mut label = EdgeLabel::new("x").unwrap();
        assert!(label.set_ratio(1.5).is_err());
        assert!(label.set_ratio(0.25).is_ok());
        assert!(label.set_distance(-1.0).is_err());
    }

    #[test]
    fn test_font_size_must_be_positive() {
        let mut label = EdgeLabel::new("x").unwrap();
        assert!(label.set_font_size(0).is_err());
        assert!(label.set_font_size(10).is_ok());
        assert_eq!(label.font_size(), 10);
    }
}
