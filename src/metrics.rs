//! Volume and strength metrics over sets, exercises and sessions.

use crate::model::{Exercise, Session, WorkoutSet};

/// Training volume of one set: `weight * reps`, or 0 for a bodyweight set.
pub fn set_volume(set: &WorkoutSet) -> f32 {
    if set.is_bodyweight {
        return 0.0;
    }
    set.weight * set.reps as f32
}

/// Sum of [`set_volume`] over an exercise's sets.
pub fn exercise_volume(exercise: &Exercise) -> f32 {
    exercise.sets.iter().map(set_volume).sum()
}

/// Sum of [`exercise_volume`] over a session's exercises.
pub fn session_volume(session: &Session) -> f32 {
    session.exercises.iter().map(exercise_volume).sum()
}

/// Sum of [`session_volume`] over the whole collection.
pub fn aggregate_volume(sessions: &[Session]) -> f32 {
    sessions.iter().map(session_volume).sum()
}

/// Estimated one-rep max via the Epley formula: `weight * (1 + reps / 30)`.
///
/// Zero reps estimate nothing, and a single rep already is a measured max so
/// the weight passes through untouched. The formula is deliberately not
/// clamped; extreme rep counts produce proportionally larger and less
/// reliable estimates.
pub fn estimated_one_rep_max(weight: f32, reps: u32) -> f32 {
    match reps {
        0 => 0.0,
        1 => weight,
        _ => weight * (1.0 + reps as f32 / 30.0),
    }
}
