/// State management module
///
/// The calculator has exactly one piece of state, the stop difference:
/// - Clamping, snapping and parsing of the value (stop.rs)
/// - The session that owns it and derives everything else (session.rs)

pub mod session;
pub mod stop;

pub use session::{Report, Session};
pub use stop::{StopDifference, Tone};
