//! Collection mutations and the persistence boundary.
//!
//! Mutations are pure reducers: each takes the current collection and returns
//! a new one, the caller owns the single authoritative copy. Persistence
//! loads and saves whole collections as JSON under the platform config
//! directory, one file per authenticated identity.

use crate::dates::duration_minutes;
use crate::model::{Session, WorkoutTemplate, new_id};
use crate::template::validate_exercises;
use dirs_next as dirs;
use std::path::PathBuf;

const APP_DIR: &str = "ironlog";
const TEMPLATES_FILE: &str = "ironlog_templates.json";

/// Replace the session sharing `session.id`, or prepend it as the newest
/// record when no id matches.
pub fn upsert_session(sessions: &[Session], session: Session) -> Vec<Session> {
    if sessions.iter().any(|s| s.id == session.id) {
        return sessions
            .iter()
            .map(|s| {
                if s.id == session.id {
                    session.clone()
                } else {
                    s.clone()
                }
            })
            .collect();
    }
    let mut next = Vec::with_capacity(sessions.len() + 1);
    next.push(session);
    next.extend(sessions.iter().cloned());
    next
}

/// Remove the session with `id`, if present.
pub fn delete_session(sessions: &[Session], id: &str) -> Vec<Session> {
    sessions.iter().filter(|s| s.id != id).cloned().collect()
}

/// Validate and commit a draft session into the collection.
///
/// Blank-name exercises are dropped (an exercise-free result still commits,
/// e.g. a cardio-only day), the duration is derived from the start/end
/// instants when both are present, and a draft without an id gets a fresh
/// one. Update-by-id otherwise.
pub fn commit_draft(mut draft: Session, sessions: &[Session]) -> Vec<Session> {
    draft.exercises = validate_exercises(draft.exercises);
    if let (Some(start), Some(end)) = (&draft.start_time, &draft.end_time) {
        draft.duration = duration_minutes(start, end);
    }
    if draft.id.is_empty() {
        draft.id = new_id();
    }
    upsert_session(sessions, draft)
}

/// Replace the template sharing `template.id`, or append it.
pub fn upsert_template(
    templates: &[WorkoutTemplate],
    template: WorkoutTemplate,
) -> Vec<WorkoutTemplate> {
    let mut next: Vec<WorkoutTemplate> = templates.to_vec();
    match next.iter_mut().find(|t| t.id == template.id) {
        Some(slot) => *slot = template,
        None => next.push(template),
    }
    next
}

/// Remove the template with `id`, if present.
pub fn delete_template(templates: &[WorkoutTemplate], id: &str) -> Vec<WorkoutTemplate> {
    templates.iter().filter(|t| t.id != id).cloned().collect()
}

fn config_path(file: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join(file))
}

fn sessions_file(user: Option<&str>) -> String {
    match user {
        Some(id) => format!("ironlog_sessions_{id}.json"),
        None => "ironlog_sessions.json".to_string(),
    }
}

fn load_collection<T: serde::de::DeserializeOwned>(file: &str) -> Vec<T> {
    let Some(path) = config_path(file) else {
        return Vec::new();
    };
    let Ok(data) = std::fs::read_to_string(&path) else {
        return Vec::new();
    };
    // Records are converted one by one so a single corrupt entry costs only
    // itself, not the whole collection.
    let values: Vec<serde_json::Value> = match serde_json::from_str(&data) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Failed to parse {}: {e}", path.display());
            return Vec::new();
        }
    };
    let mut items = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value(value) {
            Ok(item) => items.push(item),
            Err(e) => log::warn!("Skipping corrupt record in {}: {e}", path.display()),
        }
    }
    items
}

fn save_collection<T: serde::Serialize>(file: &str, items: &[T]) -> std::io::Result<()> {
    let path = config_path(file).ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory")
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_string_pretty(items).map_err(std::io::Error::other)?;
    std::fs::write(path, data)
}

/// Load the full session collection for `user`, newest first as saved.
///
/// A missing or unreadable file degrades to an empty collection.
pub fn load_sessions(user: Option<&str>) -> Vec<Session> {
    load_collection(&sessions_file(user))
}

/// Persist the full session collection for `user`.
pub fn save_sessions(user: Option<&str>, sessions: &[Session]) -> std::io::Result<()> {
    save_collection(&sessions_file(user), sessions)
}

/// Load the template collection, shared across identities.
pub fn load_templates() -> Vec<WorkoutTemplate> {
    load_collection(TEMPLATES_FILE)
}

/// Persist the template collection.
pub fn save_templates(templates: &[WorkoutTemplate]) -> std::io::Result<()> {
    save_collection(TEMPLATES_FILE, templates)
}
