//! Service layer - business logic orchestration
//!
//! Services sit between the CLI and the store. Each one owns a single
//! feature area and returns typed errors the caller can match on.

mod account;
mod progression;
mod status;
mod workout;

pub use account::AccountService;
pub use progression::{next_weight, ProgressionService, Suggestion, Trend};
pub use status::{ExerciseSummary, StatusService, StatusSummary};
pub use workout::WorkoutService;
