//! Command implementations

pub mod evaluate;
pub mod schedule;
pub mod simple;
pub mod status;

pub use evaluate::{EvaluationResult, evaluate_guess};
pub use schedule::{ScheduleEntry, build_schedule};
pub use simple::run_simple;
pub use status::{StatusReport, daily_status};
