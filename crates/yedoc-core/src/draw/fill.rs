//! Fill styling for node interiors.

use svg::node::element::Element;

use crate::{color::Color, draw::ElementExt};

/// Fill definition for a node interior, rendered as `y:Fill`.
///
/// A `None` color renders as yEd's `"none"`; the `transparent` flag is
/// independent of the colors and makes yEd draw the interior fully
/// see-through while remembering the configured colors.
///
/// # Examples
///
/// ```
/// use yedoc_core::color::Color;
/// use yedoc_core::draw::Fill;
///
/// let mut fill = Fill::default();
/// fill.set_color(Some(Color::new("#CCCCFF").unwrap()));
/// assert!(!fill.transparent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    color: Option<Color>,
    color2: Option<Color>,
    transparent: bool,
}

impl Fill {
    /// Creates an opaque single-color fill.
    pub fn new(color: Color) -> Self {
        Self {
            color: Some(color),
            color2: None,
            transparent: false,
        }
    }

    /// The primary fill color.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets the primary fill color; `None` renders as `"none"`.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// The secondary (gradient) fill color, rarely set.
    pub fn color2(&self) -> Option<Color> {
        self.color2
    }

    /// Sets the secondary (gradient) fill color.
    pub fn set_color2(&mut self, color: Option<Color>) {
        self.color2 = color;
    }

    /// Whether the interior is drawn fully transparent.
    pub fn transparent(&self) -> bool {
        self.transparent
    }

    /// Sets the transparency flag.
    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    /// Renders this fill as a `y:Fill` element.
    pub fn render(&self) -> Element {
        let mut element = Element::new("y:Fill").with(
            "color",
            self.color
                .map_or_else(|| "none".to_string(), |c| c.to_hex()),
        );
        if let Some(color2) = self.color2 {
            element = element.with("color2", color2.to_hex());
        }
        element.with("transparent", self.transparent.to_string())
    }
}

impl Default for Fill {
    /// The fill yEd applies to freshly created nodes: opaque `#FFCC00`.
    fn default() -> Self {
        Self::new(Color::new("#FFCC00").expect("'#FFCC00' is a valid CSS color"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fill_is_yed_yellow() {
        let fill = Fill::default();
        let rendered = fill.render().to_string();
        assert!(rendered.contains("color=\"#FFCC00\""));
        assert!(rendered.contains("transparent=\"false\""));
        assert!(!rendered.contains("color2"));
    }

    #[test]
    fn test_render_with_color2() {
        let mut fill = Fill::default();
        fill.set_color2(Some(Color::new("white").unwrap()));
        let rendered = fill.render().to_string();
        assert!(rendered.contains("color2=\"#FFFFFF\""));
    }

    #[test]
    fn test_render_none_color() {
        let mut fill = Fill::default();
        fill.set_color(None);
        fill.set_transparent(true);
        let rendered = fill.render().to_string();
        assert!(rendered.contains("color=\"none\""));
        assert!(rendered.contains("transparent=\"true\""));
    }
}
