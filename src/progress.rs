//! Chronological per-exercise progress series and the overall volume trend.

use crate::metrics::{estimated_one_rep_max, exercise_volume, session_volume};
use crate::model::Session;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One occurrence of an exercise, for trend display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub date: String,
    /// Heaviest non-bodyweight set in this instance. Stays 0 when every set
    /// was bodyweight, matching the original log's rendering.
    pub max_weight: f32,
    /// Highest rep count in this instance, bodyweight sets included.
    pub max_reps: u32,
    /// Volume of this instance alone.
    pub volume: f32,
    /// Best Epley estimate over the non-bodyweight sets, 0 when there are none.
    pub estimated_1rm: f32,
}

/// Build the progress series for `name`, ascending by date.
///
/// The series is sparse: sessions without the exercise contribute nothing,
/// and an unknown name yields an empty series. Sessions sharing a date each
/// keep their own point, in input order (stable sort). When a session lists
/// the exercise twice only the first instance is charted.
pub fn exercise_progress(sessions: &[Session], name: &str) -> Vec<ProgressPoint> {
    let mut points: Vec<ProgressPoint> = sessions
        .iter()
        .filter_map(|session| {
            let exercise = session.exercises.iter().find(|e| e.name == name)?;
            let mut max_weight = 0.0f32;
            let mut max_reps = 0u32;
            let mut best_1rm = 0.0f32;
            for set in &exercise.sets {
                if !set.is_bodyweight {
                    max_weight = max_weight.max(set.weight);
                    best_1rm = best_1rm.max(estimated_one_rep_max(set.weight, set.reps));
                }
                max_reps = max_reps.max(set.reps);
            }
            Some(ProgressPoint {
                date: session.date.clone(),
                max_weight,
                max_reps,
                volume: exercise_volume(exercise),
                estimated_1rm: best_1rm,
            })
        })
        .collect();
    points.sort_by(|a, b| a.date.cmp(&b.date));
    points
}

/// Total volume per distinct training date, ascending, truncated to the most
/// recent `last_n` dates.
pub fn volume_trend(sessions: &[Session], last_n: usize) -> Vec<(String, f32)> {
    let mut by_date: BTreeMap<String, f32> = BTreeMap::new();
    for session in sessions {
        *by_date.entry(session.date.clone()).or_insert(0.0) += session_volume(session);
    }
    let mut trend: Vec<(String, f32)> = by_date.into_iter().collect();
    if trend.len() > last_n {
        trend.drain(..trend.len() - last_n);
    }
    trend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exercise, WorkoutSet};

    fn set(weight: f32, reps: u32, bodyweight: bool) -> WorkoutSet {
        WorkoutSet {
            id: String::new(),
            weight,
            reps,
            is_bodyweight: bodyweight,
        }
    }

    fn session(date: &str, name: &str, sets: Vec<WorkoutSet>) -> Session {
        Session {
            date: date.into(),
            exercises: vec![Exercise {
                id: String::new(),
                name: name.into(),
                sets,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn series_is_sparse_and_date_ordered() {
        let sessions = vec![
            session("2024-01-05", "Squat", vec![set(110.0, 5, false)]),
            session("2024-01-01", "Squat", vec![set(100.0, 5, false)]),
            session("2024-01-03", "Bench", vec![set(80.0, 5, false)]),
        ];
        let series = exercise_progress(&sessions, "Squat");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, "2024-01-01");
        assert_eq!(series[1].date, "2024-01-05");
        assert!(series.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn unknown_exercise_yields_empty_series() {
        let sessions = vec![session("2024-01-01", "Squat", vec![set(100.0, 5, false)])];
        assert!(exercise_progress(&sessions, "Deadlift").is_empty());
        assert!(exercise_progress(&[], "Squat").is_empty());
    }

    #[test]
    fn point_fields_cover_the_instance() {
        let sessions = vec![session(
            "2024-01-01",
            "Bench",
            vec![set(100.0, 5, false), set(90.0, 10, false), set(0.0, 15, true)],
        )];
        let series = exercise_progress(&sessions, "Bench");
        let p = &series[0];
        assert_eq!(p.max_weight, 100.0);
        assert_eq!(p.max_reps, 15);
        assert!((p.volume - 1400.0).abs() < 1e-3);
        // 90x10 estimates higher than 100x5.
        assert!((p.estimated_1rm - 90.0 * (1.0 + 10.0 / 30.0)).abs() < 1e-3);
    }

    #[test]
    fn bodyweight_only_instance_charts_zero_weight() {
        let sessions = vec![session("2024-01-01", "Dips", vec![set(0.0, 12, true)])];
        let series = exercise_progress(&sessions, "Dips");
        assert_eq!(series[0].max_weight, 0.0);
        assert_eq!(series[0].estimated_1rm, 0.0);
        assert_eq!(series[0].max_reps, 12);
        assert_eq!(series[0].volume, 0.0);
    }

    #[test]
    fn same_date_sessions_keep_separate_points() {
        let sessions = vec![
            session("2024-02-01", "Squat", vec![set(100.0, 5, false)]),
            session("2024-02-01", "Squat", vec![set(105.0, 3, false)]),
        ];
        let series = exercise_progress(&sessions, "Squat");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].max_weight, 100.0);
        assert_eq!(series[1].max_weight, 105.0);
    }

    #[test]
    fn trend_sums_by_date_and_truncates() {
        let sessions = vec![
            session("2024-01-01", "Squat", vec![set(100.0, 5, false)]),
            session("2024-01-01", "Bench", vec![set(80.0, 5, false)]),
            session("2024-01-02", "Row", vec![set(60.0, 10, false)]),
            session("2024-01-03", "Press", vec![set(40.0, 8, false)]),
        ];
        let trend = volume_trend(&sessions, 30);
        assert_eq!(
            trend,
            vec![
                ("2024-01-01".to_string(), 900.0),
                ("2024-01-02".to_string(), 600.0),
                ("2024-01-03".to_string(), 320.0),
            ]
        );

        let last_two = volume_trend(&sessions, 2);
        assert_eq!(last_two.len(), 2);
        assert_eq!(last_two[0].0, "2024-01-02");
    }
}
