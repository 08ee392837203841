//! Mission type definitions.
//!
//! - `MissionEntry`: immutable snapshot of a candidate unit of work
//! - `MissionStatus`: active / queued / paused lifecycle

mod status;
mod types;

pub use status::MissionStatus;
pub use types::MissionEntry;
