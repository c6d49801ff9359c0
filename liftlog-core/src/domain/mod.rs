//! Core domain entities
//!
//! Pure data structures and validation, no I/O.

pub mod record;
pub mod result;
pub mod user;

pub use record::{Record, WorkoutSet};
pub use result::{Error, Result};
pub use user::Username;
