//! # Ratioscale Scene
//!
//! The host capability surface. Scene objects are owned and mutated by the
//! host application; this crate describes the minimal contract the pipeline
//! needs from them ([`Scalable`]) and ships one in-memory implementation
//! ([`SceneObject`]) so everything downstream is exercisable without a host.

pub mod object;

// Re-export public API
pub use object::{Scalable, SceneObject};
