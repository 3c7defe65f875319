//! Colours for risk categories.

use std::fmt;

use crate::metrics::RiskLevel;

/// HSL color: h in degrees, s and l in [0.0, 1.0].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self { Self { h, s, l } }
}

impl fmt::Display for Hsl {
    /// Format as CSS HSL:
    ///   hsl({h:.0}, {s:.0}%, {l:.0}%)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // normalize hue into [0,360)
        let h = (self.h % 360.0 + 360.0) % 360.0;
        let s = (self.s * 100.0).clamp(0.0, 100.0);
        let l = (self.l * 100.0).clamp(0.0, 100.0);
        write!(f, "hsl({:.0}, {:.0}%, {:.0}%)", h, s, l)
    }
}

/// Neutral gray for anything without a risk category.
pub const NEUTRAL: Hsl = Hsl::new(220.0, 0.09, 0.46);

impl RiskLevel {
    /// Marker and legend colour: green, amber, orange, red.
    pub fn color(&self) -> Hsl {
        match self {
            RiskLevel::Low => Hsl::new(142.0, 0.71, 0.45),
            RiskLevel::Medium => Hsl::new(48.0, 0.96, 0.53),
            RiskLevel::High => Hsl::new(25.0, 0.95, 0.53),
            RiskLevel::Critical => Hsl::new(0.0, 0.84, 0.60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_colors_format_as_css() {
        assert_eq!(RiskLevel::Low.color().to_string(), "hsl(142, 71%, 45%)");
        assert_eq!(RiskLevel::Medium.color().to_string(), "hsl(48, 96%, 53%)");
        assert_eq!(RiskLevel::High.color().to_string(), "hsl(25, 95%, 53%)");
        assert_eq!(RiskLevel::Critical.color().to_string(), "hsl(0, 84%, 60%)");
        assert_eq!(NEUTRAL.to_string(), "hsl(220, 9%, 46%)");
    }

    #[test]
    fn hue_is_normalized() {
        assert_eq!(Hsl::new(-30.0, 0.5, 0.5).to_string(), "hsl(330, 50%, 50%)");
        assert_eq!(Hsl::new(720.0, 1.5, -0.1).to_string(), "hsl(0, 100%, 0%)");
    }
}
