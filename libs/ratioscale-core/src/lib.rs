//! # Ratioscale Core
//!
//! Ratio arithmetic, bounding extents, and unit display.
//!
//! ## Architecture
//!
//! ```text
//! ScaleSettings (config) → Ratio (factor) ┐
//!                                         ├→ ratioscale-ops (preview, apply)
//! local corners + world transform → Extent3 ┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ratioscale_core::Ratio;
//!
//! let ratio = Ratio::new(1.0, 700.0);
//! let factor = ratio.factor().unwrap();
//! assert!((factor - 1.0 / 700.0).abs() < 1e-12);
//! ```

pub mod extent;
pub mod ratio;
pub mod units;

/// Shared 3-component vector type, `f64` precision.
pub use glam::DVec3 as Vec3;
/// Shared affine transform type, `f64` precision.
pub use glam::DMat4 as Mat4;

// Re-export public API
pub use extent::{world_extent, Extent3};
pub use ratio::{Ratio, RatioError};
pub use units::UnitSettings;
