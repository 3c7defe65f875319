use geo::Coord;
use serde::Serialize;

use super::color::Hsl;
use crate::{merge::MergedDistrict, registry::DistrictId};

/// Visual state of one marker. Selection takes precedence over hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerState {
    Default,
    Hovered,
    Selected,
}

impl MarkerState {
    pub fn resolve(is_selected: bool, is_hovered: bool) -> Self {
        match (is_selected, is_hovered) {
            (true, _) => MarkerState::Selected,
            (false, true) => MarkerState::Hovered,
            (false, false) => MarkerState::Default,
        }
    }

    pub fn style(&self) -> MarkerStyle {
        match self {
            MarkerState::Default => MarkerStyle {
                size_px: 36.0,
                border_px: 3.0,
                scale: 1.0,
                z_index: 10,
                font_px: 11.0,
                shadow: "0 4px 6px rgba(0,0,0,0.15)",
            },
            MarkerState::Hovered => MarkerStyle {
                size_px: 36.0,
                border_px: 3.0,
                scale: 1.1,
                z_index: 15,
                font_px: 11.0,
                shadow: "0 6px 12px rgba(0,0,0,0.2)",
            },
            MarkerState::Selected => MarkerStyle {
                size_px: 44.0,
                border_px: 4.0,
                scale: 1.2,
                z_index: 20,
                font_px: 12.0,
                shadow: "0 0 0 4px rgba(253, 166, 32, 0.5), 0 8px 16px rgba(0,0,0,0.3)",
            },
        }
    }
}

/// Resolved visuals for a marker state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub size_px: f64,
    pub border_px: f64,
    pub scale: f64,
    pub z_index: i32,
    pub font_px: f64,
    pub shadow: &'static str,
}

impl MarkerStyle {
    /// Rendered diameter after scaling.
    #[inline] pub fn diameter(&self) -> f64 { self.size_px * self.scale }
}

/// Declarative description of one marker in a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerDescriptor {
    pub id: DistrictId,
    pub position: Coord<f64>,
    pub label: String,
    pub color: Hsl,
    pub state: MarkerState,
}

impl MarkerDescriptor {
    pub fn new(district: &MergedDistrict, state: MarkerState) -> Self {
        Self {
            id: district.id.clone(),
            position: district.coordinates,
            label: saturation_label(district.metrics.saturation_ratio),
            color: district.risk_level.color(),
            state,
        }
    }

    #[inline] pub fn style(&self) -> MarkerStyle { self.state.style() }
}

/// Marker label: saturation rounded to a whole percent.
pub fn saturation_label(saturation: f64) -> String {
    format!("{}%", saturation.round() as i64)
}
