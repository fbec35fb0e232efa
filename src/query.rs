//! Filtering and date-bucketing over the session collection.

use crate::model::{MuscleGroup, Session};
use std::collections::{BTreeMap, BTreeSet};

/// Search criteria for the session list. All criteria must pass; a field left
/// empty passes unconditionally, so the default filter is the identity.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    /// Case-insensitive substring matched against exercise names and notes.
    pub query: String,
    /// Session passes when its tag set intersects this one.
    pub tags: Vec<MuscleGroup>,
    /// Inclusive ISO date lower bound.
    pub date_from: Option<String>,
    /// Inclusive ISO date upper bound.
    pub date_to: Option<String>,
}

impl SessionFilter {
    pub fn matches(&self, session: &Session) -> bool {
        if !self.query.trim().is_empty() {
            let query = self.query.to_lowercase();
            let in_exercises = session
                .exercises
                .iter()
                .any(|e| e.name.to_lowercase().contains(&query));
            let in_notes = session.notes.to_lowercase().contains(&query);
            if !in_exercises && !in_notes {
                return false;
            }
        }
        if !self.tags.is_empty() && !self.tags.iter().any(|t| session.has_tag(*t)) {
            return false;
        }
        if let Some(from) = &self.date_from {
            if session.date < *from {
                return false;
            }
        }
        if let Some(to) = &self.date_to {
            if session.date > *to {
                return false;
            }
        }
        true
    }
}

/// Apply `filter` and return the surviving sessions in input order.
pub fn filter_sessions<'a>(sessions: &'a [Session], filter: &SessionFilter) -> Vec<&'a Session> {
    sessions.iter().filter(|s| filter.matches(s)).collect()
}

/// Bucket sessions by exact date string, keeping input order inside a day.
///
/// A day can hold several sessions; none are merged.
pub fn sessions_by_date<'a>(sessions: &'a [Session]) -> BTreeMap<String, Vec<&'a Session>> {
    let mut buckets: BTreeMap<String, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        buckets.entry(session.date.clone()).or_default().push(session);
    }
    buckets
}

/// Whether any session was logged on `date`.
pub fn has_training_on(buckets: &BTreeMap<String, Vec<&Session>>, date: &str) -> bool {
    buckets.contains_key(date)
}

/// Sorted distinct non-blank exercise names across the collection.
///
/// Names are listed exactly as stored; trimming is only the blank check, so
/// a listed name always round-trips into the exact-match stats and progress
/// lookups.
pub fn unique_exercise_names(sessions: &[Session]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for session in sessions {
        for exercise in &session.exercises {
            if !exercise.name.trim().is_empty() {
                names.insert(exercise.name.clone());
            }
        }
    }
    names.into_iter().collect()
}
