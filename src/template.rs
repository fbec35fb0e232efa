//! Template materialization and session draft validation.
//!
//! A draft session moves Empty -> Populated -> Validated -> Committed: rows
//! accumulate freely while editing, [`validate_exercises`] drops the blank
//! ones on submit, and [`crate::store::commit_draft`] assigns an identifier
//! and merges the result into the collection.

use crate::dates::today_string;
use crate::model::{Exercise, Session, WorkoutTemplate, new_id};

/// Seed a fresh draft session from a template.
///
/// Exercises and sets are copied deeply with fresh identifiers so edits to
/// the draft can never reach the stored template. The draft gets today's
/// date and no session id until it is committed.
pub fn materialize(template: &WorkoutTemplate) -> Session {
    Session {
        id: String::new(),
        date: today_string(),
        exercises: copy_exercises(&template.exercises),
        notes: template.notes.clone().unwrap_or_default(),
        tags: template.tags.clone(),
        ..Default::default()
    }
}

/// Keep only exercises with a non-blank name.
///
/// An empty result is fine; a cardio-only session commits with no exercises.
pub fn validate_exercises(exercises: Vec<Exercise>) -> Vec<Exercise> {
    exercises
        .into_iter()
        .filter(|e| !e.name.trim().is_empty())
        .collect()
}

/// Save a session's content as a new reusable template.
pub fn template_from_session(name: &str, session: &Session, created_at: &str) -> WorkoutTemplate {
    WorkoutTemplate {
        id: new_id(),
        name: name.trim().to_string(),
        exercises: validate_exercises(copy_exercises(&session.exercises)),
        tags: session.tags.clone(),
        notes: if session.notes.is_empty() {
            None
        } else {
            Some(session.notes.clone())
        },
        created_at: created_at.to_string(),
    }
}

fn copy_exercises(exercises: &[Exercise]) -> Vec<Exercise> {
    exercises
        .iter()
        .map(|e| Exercise {
            id: new_id(),
            name: e.name.clone(),
            sets: e
                .sets
                .iter()
                .map(|s| {
                    let mut copy = s.clone();
                    copy.id = new_id();
                    copy
                })
                .collect(),
        })
        .collect()
}
