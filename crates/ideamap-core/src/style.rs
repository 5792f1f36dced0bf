use serde::{Deserialize, Serialize};

/// Layout algorithm selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    #[default]
    Spring,
    Circular,
    Shell,
    Planar,
}

impl LayoutStyle {
    pub const ALL: [LayoutStyle; 4] = [
        LayoutStyle::Spring,
        LayoutStyle::Circular,
        LayoutStyle::Shell,
        LayoutStyle::Planar,
    ];

    /// Resolves a user-facing layout name. Unrecognized names select spring;
    /// layout selection is never a fatal error.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circular" => Self::Circular,
            "shell" => Self::Shell,
            "planar" => Self::Planar,
            _ => Self::Spring,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Circular => "circular",
            Self::Shell => "shell",
            Self::Planar => "planar",
        }
    }
}

/// Marker shape for central and subtopic nodes. Detail nodes always render as
/// circles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Triangle,
}

/// User-chosen visual parameters for a single render.
///
/// Defaults match the original tool's widget defaults. The numeric fields are
/// slider-backed there, so out-of-range programmatic input is clamped via
/// [`StyleConfig::clamped`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub layout: LayoutStyle,
    pub central_color: String,
    pub subtopic_color: String,
    pub detail_color: String,
    pub central_shape: NodeShape,
    pub subtopic_shape: NodeShape,
    /// Marker area for the central node; subtopics use 0.8x, details 0.6x.
    pub node_size: f64,
    pub edge_width: f64,
    pub font_size: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            layout: LayoutStyle::Spring,
            central_color: "#ff5733".to_string(),
            subtopic_color: "#33c3ff".to_string(),
            detail_color: "#66ff66".to_string(),
            central_shape: NodeShape::Circle,
            subtopic_shape: NodeShape::Circle,
            node_size: 3000.0,
            edge_width: 2.0,
            font_size: 12.0,
        }
    }
}

impl StyleConfig {
    pub const NODE_SIZE_MIN: f64 = 100.0;
    pub const NODE_SIZE_MAX: f64 = 5000.0;
    pub const EDGE_WIDTH_MIN: f64 = 1.0;
    pub const EDGE_WIDTH_MAX: f64 = 10.0;
    pub const FONT_SIZE_MIN: f64 = 8.0;
    pub const FONT_SIZE_MAX: f64 = 24.0;

    /// Clamps the numeric fields into their slider ranges. Non-finite values
    /// collapse to the range minimum.
    pub fn clamped(mut self) -> Self {
        self.node_size = clamp_or_min(self.node_size, Self::NODE_SIZE_MIN, Self::NODE_SIZE_MAX);
        self.edge_width = clamp_or_min(self.edge_width, Self::EDGE_WIDTH_MIN, Self::EDGE_WIDTH_MAX);
        self.font_size = clamp_or_min(self.font_size, Self::FONT_SIZE_MIN, Self::FONT_SIZE_MAX);
        self
    }
}

fn clamp_or_min(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}
