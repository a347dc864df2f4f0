//! Centralized configuration values shared across the ratio-scale pipeline.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((1.0_f64 - 1.0).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RATIO FIELD DEFAULTS
// =============================================================================

/// Default left-hand ratio term ("from" side of 1:700).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RATIO_LHS;
/// assert_eq!(DEFAULT_RATIO_LHS, 1.0);
/// ```
pub const DEFAULT_RATIO_LHS: f64 = 1.0;

/// Default right-hand ratio term ("to" side of 1:700).
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_RATIO_RHS;
/// assert_eq!(DEFAULT_RATIO_RHS, 700.0);
/// ```
pub const DEFAULT_RATIO_RHS: f64 = 700.0;

/// Smallest value either ratio term may take.
///
/// The host UI constrains both numeric fields to this minimum, which keeps
/// the derived factor finite and nonzero for any accepted settings snapshot.
///
/// # Examples
/// ```
/// use config::constants::MIN_RATIO_TERM;
/// assert!(MIN_RATIO_TERM > 0.0);
/// ```
pub const MIN_RATIO_TERM: f64 = 1e-4;

/// Whether the bake step ("apply transform") is on by default.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_APPLY_TRANSFORM;
/// assert!(DEFAULT_APPLY_TRANSFORM);
/// ```
pub const DEFAULT_APPLY_TRANSFORM: bool = true;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Label used when the host reports no specific length unit.
///
/// # Examples
/// ```
/// use config::constants::FALLBACK_UNIT_LABEL;
/// assert_eq!(FALLBACK_UNIT_LABEL, "unit");
/// ```
pub const FALLBACK_UNIT_LABEL: &str = "unit";

// =============================================================================
// SETTINGS SNAPSHOT
// =============================================================================

/// Immutable snapshot of the three user-facing fields read at invocation
/// time: the two ratio terms and the apply-transform flag.
///
/// The host owns the persistent state; this struct is the validated copy
/// handed to the calculator and the applicator.
///
/// # Examples
/// ```
/// use config::constants::ScaleSettings;
/// let settings = ScaleSettings::new(1.0, 700.0, true).expect("valid settings");
/// assert_eq!(settings.ratio_rhs, 700.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSettings {
    /// Left-hand ratio term, constrained to `>= MIN_RATIO_TERM`.
    pub ratio_lhs: f64,
    /// Right-hand ratio term, constrained to `>= MIN_RATIO_TERM`.
    pub ratio_rhs: f64,
    /// Whether to bake the new scale into each object after scaling.
    pub apply_transform: bool,
}

impl ScaleSettings {
    /// Builds a settings snapshot, enforcing the host field constraints on
    /// both ratio terms.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ScaleSettings;
    /// assert!(ScaleSettings::new(45.0, 1.0, false).is_ok());
    /// assert!(ScaleSettings::new(1.0, 0.0, true).is_err());
    /// ```
    pub fn new(
        ratio_lhs: f64,
        ratio_rhs: f64,
        apply_transform: bool,
    ) -> Result<Self, SettingsError> {
        if !ratio_lhs.is_finite() || ratio_lhs < MIN_RATIO_TERM {
            return Err(SettingsError::InvalidLhs(ratio_lhs));
        }
        if !ratio_rhs.is_finite() || ratio_rhs < MIN_RATIO_TERM {
            return Err(SettingsError::InvalidRhs(ratio_rhs));
        }
        Ok(Self {
            ratio_lhs,
            ratio_rhs,
            apply_transform,
        })
    }
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            ratio_lhs: DEFAULT_RATIO_LHS,
            ratio_rhs: DEFAULT_RATIO_RHS,
            apply_transform: DEFAULT_APPLY_TRANSFORM,
        }
    }
}

/// Error returned when invalid settings values are provided.
#[derive(Debug, PartialEq)]
pub enum SettingsError {
    /// Raised when the left-hand term is non-finite or below the minimum.
    InvalidLhs(f64),
    /// Raised when the right-hand term is non-finite or below the minimum.
    InvalidRhs(f64),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidLhs(value) => {
                write!(f, "ratio_lhs must be >= {MIN_RATIO_TERM}: {value}")
            }
            SettingsError::InvalidRhs(value) => {
                write!(f, "ratio_rhs must be >= {MIN_RATIO_TERM}: {value}")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
