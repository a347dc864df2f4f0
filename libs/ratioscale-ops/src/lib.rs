//! # Ratioscale Ops
//!
//! The two operations behind the ratio-scale tool: the live preview shown
//! while the user edits the ratio, and the one-shot applicator triggered by
//! the user action.
//!
//! ## Architecture
//!
//! ```text
//! ScaleSettings ─→ ScalePreview::compute ─→ panel statistics
//!              └─→ apply_scale ─→ ApplyReport │ ApplyError ─→ StatusMessage
//! ```
//!
//! ## Example
//!
//! ```rust
//! use config::constants::ScaleSettings;
//! use ratioscale_ops::execute;
//! use ratioscale_scene::SceneObject;
//!
//! let mut selection = vec![SceneObject::unit_cube("hull")];
//! let message = execute(&mut selection, &ScaleSettings::default());
//! assert_eq!(message.text, "Scaled 1 object(s) by 0.0014 and applied transforms.");
//! ```

pub mod apply;
pub mod preview;
pub mod report;

use config::constants::ScaleSettings;
use ratioscale_core::Ratio;
use ratioscale_scene::Scalable;

// Re-export public API
pub use apply::{apply_scale, ApplyError, ApplyReport};
pub use preview::ScalePreview;
pub use report::{Severity, StatusMessage};

/// The ratio described by a settings snapshot.
pub fn settings_ratio(settings: &ScaleSettings) -> Ratio {
    Ratio::new(settings.ratio_lhs, settings.ratio_rhs)
}

/// Run the operator end to end and report the outcome the way a host
/// notification channel expects it.
///
/// This function is total: every failure is converted into a terminal
/// [`StatusMessage`], nothing propagates past the invocation boundary.
/// The empty selection maps to a warning (the original surfaced it as a
/// modal popup), the degenerate ratio to an error.
pub fn execute<T: Scalable>(objects: &mut [T], settings: &ScaleSettings) -> StatusMessage {
    match apply_scale(objects, settings) {
        Ok(report) => StatusMessage::info(report.to_string()),
        Err(error @ ApplyError::EmptySelection) => {
            log::warn!("scale rejected: {error}");
            StatusMessage::warning(error.to_string())
        }
        Err(error) => {
            log::error!("scale rejected: {error}");
            StatusMessage::error(error.to_string())
        }
    }
}
