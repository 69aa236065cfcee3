#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;
pub mod time;

pub use quiz::{Boundary, QuizError, QuizSnapshot, QuizState, SnapshotError};
pub use time::Clock;
