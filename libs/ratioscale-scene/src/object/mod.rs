//! # Scene Objects
//!
//! The [`Scalable`] capability trait and the in-memory [`SceneObject`].

use glam::DQuat;
use ratioscale_core::{Extent3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Capability contract for anything the pipeline can scale.
///
/// Hosts expose their own object handles behind this trait; the pipeline
/// never assumes more than these five operations.
pub trait Scalable {
    /// Current per-axis scale vector.
    fn scale(&self) -> Vec3;

    /// Replace the per-axis scale vector.
    fn set_scale(&mut self, scale: Vec3);

    /// The eight corners of the object's local-space bounding box.
    fn local_bounds(&self) -> [Vec3; 8];

    /// Affine transform from local space to world space, scale included.
    fn world_transform(&self) -> Mat4;

    /// Commit the current scale into the base geometry and reset the stored
    /// scale to identity. The object's world-space footprint must not change.
    fn bake_scale(&mut self);
}

/// An in-memory scene object: a local bounding extent positioned in the
/// world by translation, rotation, and scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Human-readable object name.
    pub name: String,
    /// World-space translation.
    pub translation: Vec3,
    /// World-space rotation.
    pub rotation: DQuat,
    /// Per-axis scale vector.
    pub scale: Vec3,
    local: Extent3,
}

impl SceneObject {
    /// Create an object at the origin with identity rotation and scale.
    pub fn new(name: impl Into<String>, local: Extent3) -> Self {
        Self {
            name: name.into(),
            translation: Vec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: Vec3::ONE,
            local,
        }
    }

    /// A unit cube spanning the origin to (1, 1, 1), handy in tests.
    pub fn unit_cube(name: impl Into<String>) -> Self {
        Self::new(name, Extent3::new(Vec3::ZERO, Vec3::ONE))
    }

    /// Set the translation, builder style.
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Set the rotation, builder style.
    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scale, builder style.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// The object's local bounding extent, scale not applied.
    pub fn local_extent(&self) -> Extent3 {
        self.local
    }
}

impl Scalable for SceneObject {
    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    fn local_bounds(&self) -> [Vec3; 8] {
        self.local.corners()
    }

    fn world_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    fn bake_scale(&mut self) {
        // Fold the scale into the stored geometry. Component-wise min/max
        // keeps the extent well-formed under negative scale components.
        let a = self.local.min * self.scale;
        let b = self.local.max * self.scale;
        self.local = Extent3::new(a.min(b), a.max(b));
        self.scale = Vec3::ONE;
    }
}
