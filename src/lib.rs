/// Flash/ambient lighting ratio calculator
///
/// The library side is UI-free so the numbers can be tested on their own:
/// - `ratio` - the stop-difference transform and the named preset table
/// - `state` - the single interactive value (clamped stop) and the session
/// - `preview` - the illustrative scene colours derived from a result
/// - `color` - HSL conversion helpers used by the preview
///
/// The iced application in `main.rs` only binds widgets to these functions.

pub mod color;
pub mod error;
pub mod preview;
pub mod ratio;
pub mod state;

pub use error::RatioError;
pub use ratio::{compute_lighting_ratio, Effect, LightingResult, NamedRatio, COMMON_RATIOS};
pub use state::{Session, StopDifference};
