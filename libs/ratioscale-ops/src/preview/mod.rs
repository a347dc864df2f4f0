//! # Scale Preview
//!
//! Live panel statistics: how big the selection is now and how big it would
//! be after applying the ratio. Recomputed on every refresh, never stored.

use ratioscale_core::{world_extent, Ratio, UnitSettings, Vec3};
use ratioscale_scene::Scalable;
use serde::{Deserialize, Serialize};

/// Axis labels for the per-axis report lines.
const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

/// Bounding statistics for the current selection under a candidate ratio.
///
/// `current` and `expected` are `None` when the selection is empty; the
/// display layer must render "N/A" for that case, never a zero size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePreview {
    /// Number of selected objects.
    pub selected: usize,
    /// Candidate factor, with the display-path `0.0` sentinel for a zero
    /// denominator.
    pub factor: f64,
    /// Per-axis world-space size of the selection.
    pub current: Option<Vec3>,
    /// Per-axis size the selection would have after scaling.
    pub expected: Option<Vec3>,
}

impl ScalePreview {
    /// Compute the preview for a selection and a candidate ratio.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use ratioscale_core::{Ratio, Vec3};
    /// use ratioscale_ops::ScalePreview;
    /// use ratioscale_scene::SceneObject;
    ///
    /// let selection = vec![SceneObject::unit_cube("hull")];
    /// let preview = ScalePreview::compute(&selection, Ratio::new(1.0, 2.0));
    /// assert_eq!(preview.current, Some(Vec3::ONE));
    /// assert_eq!(preview.expected, Some(Vec3::splat(0.5)));
    /// ```
    pub fn compute<T: Scalable>(objects: &[T], ratio: Ratio) -> Self {
        let factor = ratio.factor_or_zero();
        let extent = world_extent(
            objects
                .iter()
                .map(|object| (object.local_bounds(), object.world_transform())),
        );
        let current = extent.map(|extent| extent.size());
        let expected = current.map(|size| size * factor);
        Self {
            selected: objects.len(),
            factor,
            current,
            expected,
        }
    }

    /// Per-axis lines for the current bounds, in display units.
    pub fn current_report(&self, units: &UnitSettings) -> Vec<String> {
        axis_report(self.current, units)
    }

    /// Per-axis lines for the expected post-scale bounds, in display units.
    pub fn expected_report(&self, units: &UnitSettings) -> Vec<String> {
        axis_report(self.expected, units)
    }
}

fn axis_report(size: Option<Vec3>, units: &UnitSettings) -> Vec<String> {
    match size {
        Some(size) => AXIS_LABELS
            .iter()
            .zip([size.x, size.y, size.z])
            .map(|(label, value)| format!("{label}: {}", units.format_length(value)))
            .collect(),
        None => vec!["N/A".to_string()],
    }
}

#[cfg(test)]
mod tests;
