use serde::Serialize;

use super::params::ParamSpec;

/// Panel an indicator renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorCategory {
    /// Drawn on the price chart itself.
    Overlay,
    /// Drawn in a separate bounded panel.
    Oscillator,
    /// Drawn in the volume panel.
    Volume,
}

impl IndicatorCategory {
    /// Display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorCategory::Overlay => "Overlay",
            IndicatorCategory::Oscillator => "Oscillator",
            IndicatorCategory::Volume => "Volume",
        }
    }
}

/// Rendering style for one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    Histogram,
    Area,
}

/// Descriptor for one output line of an indicator.
///
/// The UI pairs `values[i]` of a result with the output spec at the same
/// index to obtain color and label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSpec {
    pub name: &'static str,
    pub color: &'static str,
    pub line_width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LineStyle>,
}

impl OutputSpec {
    /// Solid line output with default width.
    pub fn line(name: &'static str, color: &'static str) -> Self {
        Self {
            name,
            color,
            line_width: 1.5,
            style: None,
        }
    }

    /// Output with an explicit style.
    pub fn styled(name: &'static str, color: &'static str, style: LineStyle) -> Self {
        Self {
            name,
            color,
            line_width: 1.5,
            style: Some(style),
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}

/// Layout hints for oscillator/volume panels.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PanelHints {
    /// Suggested panel height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Horizontal reference lines (e.g. overbought/oversold levels).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reference_lines: Vec<f64>,
    /// Fixed value bounds for the panel's y-axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<(f64, f64)>,
}

/// Immutable descriptor for an indicator type, constructed once per
/// instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorConfig {
    /// Display name, e.g. "Relative Strength Index".
    pub name: &'static str,
    /// Short name, e.g. "RSI". Doubles as the fingerprint prefix.
    pub short_name: &'static str,
    pub category: IndicatorCategory,
    pub description: &'static str,
    /// Ordered parameter declarations.
    pub params: Vec<ParamSpec>,
    /// Ordered output line declarations.
    pub outputs: Vec<OutputSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelHints>,
}
