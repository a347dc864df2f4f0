//! # Unit Display
//!
//! Conversion of raw scene lengths into host display units.
//!
//! The host supplies a length multiplier and, optionally, a unit name. When
//! no unit name is reported the generic `"unit"` token is used, so the panel
//! always renders something readable.

use config::constants::FALLBACK_UNIT_LABEL;
use serde::{Deserialize, Serialize};

/// Host-supplied unit settings for human-readable lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSettings {
    /// Multiplier from scene units to display units.
    pub scale_length: f64,
    /// Host-reported unit name, if any.
    pub length_unit: Option<String>,
}

impl UnitSettings {
    /// Create unit settings with an explicit unit name.
    pub fn new(scale_length: f64, length_unit: impl Into<String>) -> Self {
        Self {
            scale_length,
            length_unit: Some(length_unit.into()),
        }
    }

    /// The label shown next to lengths, falling back to the generic token.
    pub fn label(&self) -> &str {
        self.length_unit.as_deref().unwrap_or(FALLBACK_UNIT_LABEL)
    }

    /// Convert a raw scene length into display units.
    pub fn to_display(&self, length: f64) -> f64 {
        length * self.scale_length
    }

    /// Render a length the way the panel does: four decimals plus the label.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use ratioscale_core::UnitSettings;
    ///
    /// let units = UnitSettings::new(0.001, "mm");
    /// assert_eq!(units.format_length(1.0), "0.0010 mm");
    /// ```
    pub fn format_length(&self, length: f64) -> String {
        format!("{:.4} {}", self.to_display(length), self.label())
    }
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            scale_length: 1.0,
            length_unit: None,
        }
    }
}
