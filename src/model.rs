//! Domain records for the workout log.
//!
//! Everything here is a plain serde value type. The core never mutates a
//! loaded collection; derived views are built from borrowed snapshots and
//! mutations go through the reducers in [`crate::store`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed set of muscle-group tags a session can carry.
///
/// The serialized labels keep the log app's bilingual strings so exported
/// text and saved tags read the same as before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    #[serde(rename = "胸 (Chest)")]
    Chest,
    #[serde(rename = "背中 (Back)")]
    Back,
    #[serde(rename = "脚 (Legs)")]
    Legs,
    #[serde(rename = "肩 (Shoulders)")]
    Shoulders,
    #[serde(rename = "腕 (Arms)")]
    Arms,
    #[serde(rename = "腹筋 (Abs)")]
    Abs,
    #[serde(rename = "有酸素 (Cardio)")]
    Cardio,
}

pub const ALL_MUSCLE_GROUPS: [MuscleGroup; 7] = [
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Legs,
    MuscleGroup::Shoulders,
    MuscleGroup::Arms,
    MuscleGroup::Abs,
    MuscleGroup::Cardio,
];

impl MuscleGroup {
    /// English display label.
    pub fn label(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One performed set: `weight` kilograms for `reps` repetitions.
///
/// When `is_bodyweight` is set the stored weight is ignored by every
/// volume/weight computation; the rep count still counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutSet {
    pub id: String,
    pub weight: f32,
    pub reps: u32,
    pub is_bodyweight: bool,
}

/// A named movement inside a session, with its sets in performance order.
///
/// A blank name marks the row as incomplete; such exercises are dropped on
/// commit and ignored by all aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: Vec<WorkoutSet>,
}

/// Cardio portion of a session, present only when one was logged.
///
/// Grouping both fields in one value keeps the strength-only and
/// cardio-inclusive session shapes distinct: either the whole block is there
/// or none of it is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardioLog {
    /// Duration in minutes.
    pub duration_min: u32,
    /// Distance in kilometers.
    pub distance_km: f32,
}

impl CardioLog {
    /// Average speed in km/h, or `None` unless both fields are positive.
    ///
    /// A zero duration yields `None`, never an infinity.
    pub fn average_speed_kmh(self) -> Option<f32> {
        if self.duration_min > 0 && self.distance_km > 0.0 {
            Some(self.distance_km / (self.duration_min as f32 / 60.0))
        } else {
            None
        }
    }
}

/// One logged workout on a calendar date.
///
/// `date` is a plain ISO `YYYY-MM-DD` string with no time component, so
/// lexicographic order equals chronological order everywhere dates are
/// compared. All fields default when absent so a partially corrupt record
/// degrades statistics instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub id: String,
    pub date: String,
    pub exercises: Vec<Exercise>,
    pub notes: String,
    pub tags: Vec<MuscleGroup>,
    /// ISO 8601 instant when the session was started, if tracked.
    pub start_time: Option<String>,
    /// ISO 8601 instant when the session was finished, if tracked.
    pub end_time: Option<String>,
    /// Whole minutes between start and end, filled in at commit time.
    pub duration: Option<i64>,
    pub cardio: Option<CardioLog>,
}

impl Session {
    pub fn has_tag(&self, tag: MuscleGroup) -> bool {
        self.tags.contains(&tag)
    }
}

/// A reusable exercise plan used to seed new session drafts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutTemplate {
    pub id: String,
    pub name: String,
    pub exercises: Vec<Exercise>,
    pub tags: Vec<MuscleGroup>,
    pub notes: Option<String>,
    pub created_at: String,
}

/// Generate a fresh opaque identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardio_speed_needs_positive_fields() {
        let log = CardioLog {
            duration_min: 30,
            distance_km: 5.0,
        };
        assert!((log.average_speed_kmh().unwrap() - 10.0).abs() < 1e-6);

        let stopped = CardioLog {
            duration_min: 0,
            distance_km: 5.0,
        };
        assert_eq!(stopped.average_speed_kmh(), None);

        let stationary = CardioLog {
            duration_min: 30,
            distance_km: 0.0,
        };
        assert_eq!(stationary.average_speed_kmh(), None);
    }

    #[test]
    fn session_defaults_fill_missing_fields() {
        let session: Session =
            serde_json::from_str(r#"{"id":"a","date":"2024-01-01"}"#).unwrap();
        assert!(session.exercises.is_empty());
        assert!(session.tags.is_empty());
        assert!(session.notes.is_empty());
        assert_eq!(session.cardio, None);
    }

    #[test]
    fn set_defaults_to_zero_values() {
        let set: WorkoutSet = serde_json::from_str(r#"{"id":"s1"}"#).unwrap();
        assert_eq!(set.weight, 0.0);
        assert_eq!(set.reps, 0);
        assert!(!set.is_bodyweight);
    }

    #[test]
    fn muscle_group_round_trips_original_labels() {
        let json = serde_json::to_string(&MuscleGroup::Chest).unwrap();
        assert_eq!(json, "\"胸 (Chest)\"");
        let parsed: MuscleGroup = serde_json::from_str("\"有酸素 (Cardio)\"").unwrap();
        assert_eq!(parsed, MuscleGroup::Cardio);
    }

    #[test]
    fn has_tag_checks_membership() {
        let session = Session {
            tags: vec![MuscleGroup::Chest, MuscleGroup::Cardio],
            ..Default::default()
        };
        assert!(session.has_tag(MuscleGroup::Cardio));
        assert!(!session.has_tag(MuscleGroup::Legs));
    }

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
