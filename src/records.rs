//! Personal-record extraction from the per-exercise rollups.

use crate::analysis::ExerciseStats;
use crate::metrics::estimated_one_rep_max;
use crate::model::Session;
use serde::{Deserialize, Serialize};

/// Which metric a record is for, with its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordKind {
    /// Heaviest single set ever logged, with the Epley estimate from that set.
    MaxWeight { weight: f32, estimated_1rm: f32 },
    /// Highest single-set rep count ever logged.
    MaxReps { reps: u32 },
}

/// Best-ever value for one exercise/metric pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub exercise: String,
    pub kind: RecordKind,
    /// Last date the exercise was trained; records are listed newest first.
    pub date: String,
}

/// Derive the PR list from the rollups plus the raw sessions.
///
/// The raw sessions are needed to recover the set behind a max-weight record:
/// the first exercise instance containing a set at that weight is scanned and
/// the highest rep count among its matching sets wins, since more reps at the
/// same weight makes the better 1RM estimate. Output is sorted descending by
/// date (stable), not by magnitude.
pub fn personal_records(stats: &[ExerciseStats], sessions: &[Session]) -> Vec<PersonalRecord> {
    let mut records = Vec::new();

    for stat in stats {
        if stat.max_weight > 0.0 {
            let estimated_1rm = best_reps_at_weight(sessions, &stat.name, stat.max_weight)
                .map(|reps| estimated_one_rep_max(stat.max_weight, reps))
                .unwrap_or(0.0);
            records.push(PersonalRecord {
                exercise: stat.name.clone(),
                kind: RecordKind::MaxWeight {
                    weight: stat.max_weight,
                    estimated_1rm,
                },
                date: stat.last_date.clone(),
            });
        }
        if stat.max_reps > 0 {
            records.push(PersonalRecord {
                exercise: stat.name.clone(),
                kind: RecordKind::MaxReps {
                    reps: stat.max_reps,
                },
                date: stat.last_date.clone(),
            });
        }
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

fn best_reps_at_weight(sessions: &[Session], name: &str, weight: f32) -> Option<u32> {
    let instance = sessions
        .iter()
        .flat_map(|s| &s.exercises)
        .find(|e| {
            e.name == name
                && e.sets
                    .iter()
                    .any(|set| !set.is_bodyweight && set.weight == weight)
        })?;
    instance
        .sets
        .iter()
        .filter(|set| !set.is_bodyweight && set.weight == weight)
        .map(|set| set.reps)
        .max()
}
