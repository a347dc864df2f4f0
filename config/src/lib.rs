//! # Config Crate
//!
//! Centralized configuration for the ratio-scale pipeline. All tunable
//! values (ratio field defaults, the minimum accepted ratio term, the
//! floating-point tolerance, the fallback unit label) are defined here so
//! downstream crates avoid scattering literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ScaleSettings, DEFAULT_RATIO_RHS};
//!
//! let settings = ScaleSettings::default();
//! assert_eq!(settings.ratio_rhs, DEFAULT_RATIO_RHS);
//! assert!(settings.apply_transform);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every constant defined once, used everywhere
//! - **Validated at Construction**: `ScaleSettings::new` rejects degenerate
//!   ratio terms before they reach any arithmetic
//! - **Host-Shaped Defaults**: defaults match the UI field contract
//!   (1.0 : 700.0, apply transform on)

pub mod constants;

pub use constants::{ScaleSettings, SettingsError};
