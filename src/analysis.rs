// Module for aggregating per-exercise and overview statistics.
use crate::dates::parse_iso;
use crate::metrics::set_volume;
use crate::model::{ALL_MUSCLE_GROUPS, MuscleGroup, Session};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summary numbers for the whole session collection.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_sessions: usize,
    pub total_volume: f32,
    pub weekly_sessions: usize,
    pub monthly_sessions: usize,
}

/// Lifetime rollup for a single exercise name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStats {
    pub name: String,
    /// Cumulative volume across every non-bodyweight set.
    pub total_volume: f32,
    /// Heaviest single set ever logged; bodyweight sets excluded.
    pub max_weight: f32,
    /// Highest single-set rep count; bodyweight sets included.
    pub max_reps: u32,
    pub total_sets: usize,
    /// Most recent session date the exercise appears in.
    pub last_date: String,
}

/// Aggregate per-exercise statistics from the session collection.
///
/// Names are matched by exact case-sensitive equality and blank names are
/// skipped entirely. Accumulation is insertion-ordered and the final sort is
/// stable, so exercises with equal volume keep first-encounter order.
pub fn exercise_stats(sessions: &[Session]) -> Vec<ExerciseStats> {
    let mut stats: Vec<ExerciseStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for session in sessions {
        for exercise in &session.exercises {
            if exercise.name.trim().is_empty() {
                continue;
            }
            let i = *index.entry(exercise.name.clone()).or_insert_with(|| {
                stats.push(ExerciseStats {
                    name: exercise.name.clone(),
                    last_date: session.date.clone(),
                    ..Default::default()
                });
                stats.len() - 1
            });
            let entry = &mut stats[i];

            for set in &exercise.sets {
                if !set.is_bodyweight {
                    entry.total_volume += set_volume(set);
                    entry.max_weight = entry.max_weight.max(set.weight);
                }
                entry.max_reps = entry.max_reps.max(set.reps);
                entry.total_sets += 1;
            }
            if session.date > entry.last_date {
                entry.last_date = session.date.clone();
            }
        }
    }

    stats.sort_by(|a, b| b.total_volume.total_cmp(&a.total_volume));
    stats
}

/// Compute the overview numbers shown on the dashboard summary.
///
/// `today` anchors the weekly (7 day) and monthly (30 day) windows so the
/// computation stays a pure function of its inputs.
pub fn overview(sessions: &[Session], today: NaiveDate) -> OverviewStats {
    if sessions.is_empty() {
        return OverviewStats::default();
    }
    log::info!("Computing overview for {} sessions", sessions.len());
    OverviewStats {
        total_sessions: sessions.len(),
        total_volume: crate::metrics::aggregate_volume(sessions),
        weekly_sessions: sessions_since(sessions, today - Duration::days(7)),
        monthly_sessions: sessions_since(sessions, today - Duration::days(30)),
    }
}

/// Count sessions dated on or after `cutoff`. Unparsable dates are skipped.
pub fn sessions_since(sessions: &[Session], cutoff: NaiveDate) -> usize {
    sessions
        .iter()
        .filter_map(|s| parse_iso(&s.date))
        .filter(|d| *d >= cutoff)
        .count()
}

/// How many sessions carry each muscle-group tag, most frequent first.
///
/// Groups with no sessions are omitted; ties keep display order.
pub fn tag_frequency(sessions: &[Session]) -> Vec<(MuscleGroup, usize)> {
    let mut counts: Vec<(MuscleGroup, usize)> =
        ALL_MUSCLE_GROUPS.iter().map(|g| (*g, 0)).collect();
    for session in sessions {
        for tag in &session.tags {
            if let Some(entry) = counts.iter_mut().find(|(g, _)| g == tag) {
                entry.1 += 1;
            }
        }
    }
    counts.retain(|(_, n)| *n > 0);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Distinct training dates, newest first, at most `limit` entries.
pub fn recent_training_dates(sessions: &[Session], limit: usize) -> Vec<String> {
    let mut dates: Vec<String> = sessions.iter().map(|s| s.date.clone()).collect();
    dates.sort_by(|a, b| b.cmp(a));
    dates.dedup();
    dates.truncate(limit);
    dates
}
