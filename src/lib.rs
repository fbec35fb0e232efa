//! Aggregation and derived-metrics core for a personal workout log.
//!
//! The session collection is the single source of truth; every view here is
//! a pure function over an immutable snapshot of it, recomputed on read.

pub mod analysis;
pub mod dates;
pub mod export;
pub mod metrics;
pub mod model;
pub mod progress;
pub mod query;
pub mod records;
pub mod store;
pub mod template;

pub use model::{
    ALL_MUSCLE_GROUPS, CardioLog, Exercise, MuscleGroup, Session, WorkoutSet, WorkoutTemplate,
};
