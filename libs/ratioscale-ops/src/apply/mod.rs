//! # Scale Applicator
//!
//! The one-shot operator: validate, scale every selected object, optionally
//! bake. All validation happens before the first mutation, so failure is
//! all-or-nothing.

use config::constants::ScaleSettings;
use ratioscale_core::RatioError;
use ratioscale_scene::Scalable;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::settings_ratio;

/// Errors that reject an invocation before any object is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// The selection is empty.
    #[error("No objects selected to scale.")]
    EmptySelection,

    /// The ratio has no legitimate factor.
    #[error(transparent)]
    InvalidRatio(#[from] RatioError),
}

/// Outcome of a successful invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplyReport {
    /// Number of objects scaled.
    pub scaled: usize,
    /// The factor every scale vector was multiplied by.
    pub factor: f64,
    /// Whether the scale was baked into the objects afterwards.
    pub baked: bool,
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scaled {} object(s) by {:.4}", self.scaled, self.factor)?;
        if self.baked {
            write!(f, " and applied transforms.")
        } else {
            write!(f, ".")
        }
    }
}

/// Scale every selected object by the settings ratio, baking afterwards when
/// `apply_transform` is set.
///
/// Scaling is cumulative: each object's existing scale vector is multiplied
/// component-wise by the factor. The bake pass runs only after every scale
/// vector has been updated, one object at a time, in selection order.
///
/// ## Example
///
/// ```rust
/// use config::constants::ScaleSettings;
/// use ratioscale_ops::apply_scale;
/// use ratioscale_scene::SceneObject;
///
/// let mut selection = vec![SceneObject::unit_cube("a"), SceneObject::unit_cube("b")];
/// let settings = ScaleSettings::new(45.0, 1.0, false).unwrap();
/// let report = apply_scale(&mut selection, &settings).unwrap();
/// assert_eq!(report.scaled, 2);
/// assert_eq!(report.factor, 45.0);
/// ```
pub fn apply_scale<T: Scalable>(
    objects: &mut [T],
    settings: &ScaleSettings,
) -> Result<ApplyReport, ApplyError> {
    if objects.is_empty() {
        return Err(ApplyError::EmptySelection);
    }
    let factor = settings_ratio(settings).factor()?;

    for object in objects.iter_mut() {
        let scaled = object.scale() * factor;
        object.set_scale(scaled);
    }

    if settings.apply_transform {
        for object in objects.iter_mut() {
            object.bake_scale();
        }
    }

    let report = ApplyReport {
        scaled: objects.len(),
        factor,
        baked: settings.apply_transform,
    };
    log::info!("{report}");
    Ok(report)
}
