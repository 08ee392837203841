//! Result rendering for the CLI host.
//!
//! - `OutputWriter`: text or JSON output
//! - `PlanReport`: structured report of one `plan` run

mod writer;

pub use writer::{OutputWriter, PlanReport};
