//! # Bounding Extents
//!
//! Axis-aligned min/max spans and the world-space fold over object corner
//! sets that feeds the panel statistics.

use crate::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding extent in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent3 {
    /// Per-axis minimum corner.
    pub min: Vec3,
    /// Per-axis maximum corner.
    pub max: Vec3,
}

impl Extent3 {
    /// Create an extent from its corner points.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a degenerate extent spanning a single point.
    pub const fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the extent to include `point`.
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// The smallest extent containing both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Per-axis span, `max - min`.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Midpoint of the extent.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The eight corner points of the extent, in a fixed order.
    pub fn corners(&self) -> [Vec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(max.x, max.y, max.z),
            Vec3::new(max.x, max.y, min.z),
        ]
    }
}

/// Fold the world-space extent of a collection of objects, each given as its
/// eight local bounding corners plus the affine transform into world space.
///
/// Returns `None` for an empty collection; callers must report "not
/// applicable" rather than a zero-sized extent.
///
/// ## Example
///
/// ```rust
/// use ratioscale_core::{world_extent, Mat4, Vec3};
///
/// let corners = [
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(0.0, 0.0, 1.0),
///     Vec3::new(0.0, 1.0, 1.0),
///     Vec3::new(0.0, 1.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 1.0),
///     Vec3::new(1.0, 1.0, 1.0),
///     Vec3::new(1.0, 1.0, 0.0),
/// ];
/// let extent = world_extent([(corners, Mat4::IDENTITY)]).unwrap();
/// assert_eq!(extent.size(), Vec3::ONE);
/// ```
pub fn world_extent<I>(objects: I) -> Option<Extent3>
where
    I: IntoIterator<Item = ([Vec3; 8], Mat4)>,
{
    let mut extent: Option<Extent3> = None;
    for (corners, matrix) in objects {
        for corner in corners {
            let world = matrix.transform_point3(corner);
            extent = Some(match extent {
                Some(mut current) => {
                    current.expand(world);
                    current
                }
                None => Extent3::from_point(world),
            });
        }
    }
    extent
}

#[cfg(test)]
mod tests;
