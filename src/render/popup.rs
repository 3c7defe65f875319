use serde::Serialize;

use super::viewport::ScreenPoint;
use crate::{merge::MergedDistrict, metrics::RiskLevel, registry::DistrictId};

/// Where the floating detail popup goes.
/// `anchor` is the projected marker position; `position` is the popup's
/// bottom-centre, lifted above the marker by the configured offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupPlacement {
    pub district: DistrictId,
    pub anchor: ScreenPoint,
    pub position: ScreenPoint,
}

impl PopupPlacement {
    pub fn new(district: DistrictId, anchor: ScreenPoint, offset_px: f64) -> Self {
        Self {
            district,
            anchor,
            position: ScreenPoint { x: anchor.x, y: anchor.y - offset_px },
        }
    }
}

/// Text shown in the popup card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupContent {
    pub district: DistrictId,
    pub risk_level: RiskLevel,
    pub badge: String,
    pub name: String,
    pub state: String,
    pub saturation: String,
    pub update_index: String,
    pub deviation: String,
    pub equity_gap: String,
}

impl PopupContent {
    pub fn new(district: &MergedDistrict) -> Self {
        let metrics = &district.metrics;
        Self {
            district: district.id.clone(),
            risk_level: district.risk_level,
            badge: district.risk_level.badge(),
            name: district.name.clone(),
            state: district.state.clone(),
            saturation: format!("{}%", metrics.saturation_ratio),
            update_index: format!("{:.1}", metrics.update_intensity),
            deviation: format!("{}", metrics.temporal_deviation),
            equity_gap: format!("{}%", metrics.equity_gap),
        }
    }
}
