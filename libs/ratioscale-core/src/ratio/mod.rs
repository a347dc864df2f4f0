//! # Ratio
//!
//! A lhs:rhs pair and the scale factor derived from it.
//!
//! The zero-denominator case is handled two ways on purpose:
//!
//! - [`Ratio::factor`] is the applicator path: a zero denominator is a hard
//!   [`RatioError::ZeroDenominator`] and nothing downstream may mutate.
//! - [`Ratio::factor_or_zero`] is the display path: a zero denominator
//!   yields the `0.0` sentinel so a live panel can keep rendering while the
//!   user is mid-edit. Callers must treat the sentinel as a degenerate
//!   state, not a legitimate scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when deriving a scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatioError {
    /// Right side of the ratio is zero.
    #[error("Right side of ratio cannot be zero.")]
    ZeroDenominator,
}

/// A scale ratio such as 1:700 or 45:1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratio {
    /// Left-hand term ("from" side).
    pub lhs: f64,
    /// Right-hand term ("to" side).
    pub rhs: f64,
}

impl Ratio {
    /// Create a ratio from its two terms.
    pub const fn new(lhs: f64, rhs: f64) -> Self {
        Self { lhs, rhs }
    }

    /// Derive the scale factor `lhs / rhs`, rejecting a zero denominator.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use ratioscale_core::Ratio;
    ///
    /// assert_eq!(Ratio::new(45.0, 1.0).factor().unwrap(), 45.0);
    /// assert!(Ratio::new(1.0, 0.0).factor().is_err());
    /// ```
    pub fn factor(&self) -> Result<f64, RatioError> {
        if self.rhs == 0.0 {
            return Err(RatioError::ZeroDenominator);
        }
        Ok(self.lhs / self.rhs)
    }

    /// Derive the scale factor with the display-path sentinel: a zero
    /// denominator yields `0.0` instead of an error.
    pub fn factor_or_zero(&self) -> f64 {
        if self.rhs == 0.0 {
            0.0
        } else {
            self.lhs / self.rhs
        }
    }

    /// True when the denominator is zero and no legitimate factor exists.
    pub fn is_degenerate(&self) -> bool {
        self.rhs == 0.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.lhs, self.rhs)
    }
}
