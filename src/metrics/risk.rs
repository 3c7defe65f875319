use std::{fmt, str::FromStr};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Closed set of risk categories shown on the map.
/// Ordered by severity, so `Critical` compares greatest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::Critical];

    /// Map a backend risk label onto the closed set.
    /// Case-insensitive; "priority" is the backend's name for `Critical`.
    /// Anything unrecognized fails closed to `Low`.
    pub fn from_label(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_else(|| {
            tracing::debug!("[metrics] unrecognized risk label '{label}', using low");
            RiskLevel::Low
        })
    }

    /// Strict variant of `from_label`: `None` for unknown labels.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "critical" | "priority" => Some(RiskLevel::Critical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Human-readable label, e.g. for the sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Priority",
        }
    }

    /// Short badge text shown on the popup ("Priority Risk", "high Risk", ...).
    pub fn badge(&self) -> String {
        match self {
            RiskLevel::Critical => "Priority Risk".to_string(),
            level => format!("{} Risk", level.as_str()),
        }
    }

    /// Saturation band described by the map legend.
    pub fn legend(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low (>95%)",
            RiskLevel::Medium => "Medium (85-95%)",
            RiskLevel::High => "High (70-85%)",
            RiskLevel::Critical => "Priority (<70%)",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_label(s).ok_or_else(|| anyhow!("[metrics] unknown risk level '{s}'"))
    }
}
