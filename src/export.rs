//! Plain-data exports: markdown day logs plus CSV/JSON serialization of
//! sessions, statistics and personal records. These are the fully-resolved
//! record lists handed to the external file and summarizer collaborators.

use crate::analysis::ExerciseStats;
use crate::model::Session;
use crate::records::{PersonalRecord, RecordKind};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>(
    value: &T,
    path: P,
) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, value).map_err(std::io::Error::other)
}

pub fn write_csv<T: Serialize>(writer: impl Write, records: &[T]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.flush().map_err(Into::into)
}

pub fn save_sessions_json<P: AsRef<Path>>(path: P, sessions: &[Session]) -> std::io::Result<()> {
    write_json(sessions, path)
}

pub fn save_stats_json<P: AsRef<Path>>(path: P, stats: &[ExerciseStats]) -> std::io::Result<()> {
    write_json(stats, path)
}

pub fn save_stats_csv<P: AsRef<Path>>(path: P, stats: &[ExerciseStats]) -> csv::Result<()> {
    write_csv(std::fs::File::create(path)?, stats)
}

pub fn save_records_json<P: AsRef<Path>>(
    path: P,
    records: &[PersonalRecord],
) -> std::io::Result<()> {
    write_json(records, path)
}

/// CSV needs flat rows, so the record kind is split into per-metric columns.
pub fn save_records_csv<P: AsRef<Path>>(path: P, records: &[PersonalRecord]) -> csv::Result<()> {
    #[derive(Serialize)]
    struct Row<'a> {
        exercise: &'a str,
        kind: &'a str,
        weight: Option<f32>,
        reps: Option<u32>,
        estimated_1rm: Option<f32>,
        date: &'a str,
    }
    let rows: Vec<Row> = records
        .iter()
        .map(|r| match r.kind {
            RecordKind::MaxWeight {
                weight,
                estimated_1rm,
            } => Row {
                exercise: &r.exercise,
                kind: "max_weight",
                weight: Some(weight),
                reps: None,
                estimated_1rm: Some(estimated_1rm),
                date: &r.date,
            },
            RecordKind::MaxReps { reps } => Row {
                exercise: &r.exercise,
                kind: "max_reps",
                weight: None,
                reps: Some(reps),
                estimated_1rm: None,
                date: &r.date,
            },
        })
        .collect();
    write_csv(std::fs::File::create(path)?, &rows)
}

/// Render a session list as a markdown day log.
///
/// One `##` section per session with its tags, exercises and sets;
/// bodyweight sets print as "BW". This mirrors what the original app copied
/// to the clipboard or handed to the AI summarizer.
pub fn markdown_log(sessions: &[Session]) -> String {
    let mut md = String::from("# Workout Log\n\n");
    for session in sessions {
        md.push_str(&format!("## {}\n", session.date));
        if !session.tags.is_empty() {
            let tags: Vec<&str> = session.tags.iter().map(|t| t.label()).collect();
            md.push_str(&format!("**Tags:** {}\n\n", tags.join(", ")));
        }
        for exercise in &session.exercises {
            md.push_str(&format!("### {}\n", exercise.name));
            for (i, set) in exercise.sets.iter().enumerate() {
                let weight = if set.is_bodyweight {
                    "BW".to_string()
                } else {
                    format!("{}kg", set.weight)
                };
                md.push_str(&format!("- Set {}: {} x {}reps\n", i + 1, weight, set.reps));
            }
            md.push('\n');
        }
        if let Some(cardio) = session.cardio {
            if let Some(speed) = cardio.average_speed_kmh() {
                md.push_str(&format!(
                    "**Cardio:** {}min, {}km ({speed:.2} km/h)\n\n",
                    cardio.duration_min, cardio.distance_km
                ));
            }
        }
        if !session.notes.is_empty() {
            md.push_str(&format!("> **Memo:** {}\n", session.notes));
        }
        md.push_str("\n---\n\n");
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CardioLog, Exercise, MuscleGroup, WorkoutSet};

    fn sample_session() -> Session {
        Session {
            id: "a".into(),
            date: "2024-01-01".into(),
            exercises: vec![Exercise {
                id: "e1".into(),
                name: "Bench Press".into(),
                sets: vec![
                    WorkoutSet {
                        id: "s1".into(),
                        weight: 100.0,
                        reps: 5,
                        is_bodyweight: false,
                    },
                    WorkoutSet {
                        id: "s2".into(),
                        weight: 0.0,
                        reps: 12,
                        is_bodyweight: true,
                    },
                ],
            }],
            notes: "solid session".into(),
            tags: vec![MuscleGroup::Chest],
            ..Default::default()
        }
    }

    #[test]
    fn markdown_lists_sets_and_notes() {
        let md = markdown_log(&[sample_session()]);
        assert!(md.contains("## 2024-01-01"));
        assert!(md.contains("**Tags:** Chest"));
        assert!(md.contains("### Bench Press"));
        assert!(md.contains("- Set 1: 100kg x 5reps"));
        assert!(md.contains("- Set 2: BW x 12reps"));
        assert!(md.contains("> **Memo:** solid session"));
    }

    #[test]
    fn markdown_includes_cardio_only_when_speed_exists() {
        let mut session = sample_session();
        session.cardio = Some(CardioLog {
            duration_min: 30,
            distance_km: 5.0,
        });
        let md = markdown_log(&[session.clone()]);
        assert!(md.contains("**Cardio:** 30min, 5km (10.00 km/h)"));

        session.cardio = Some(CardioLog {
            duration_min: 0,
            distance_km: 5.0,
        });
        let md = markdown_log(&[session]);
        assert!(!md.contains("Cardio:"));
    }

    #[test]
    fn stats_csv_round_trips_rows() {
        let stats = vec![ExerciseStats {
            name: "Bench".into(),
            total_volume: 500.0,
            max_weight: 100.0,
            max_reps: 5,
            total_sets: 1,
            last_date: "2024-01-01".into(),
        }];
        let mut buf = Vec::new();
        write_csv(&mut buf, &stats).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("name,total_volume,max_weight,max_reps,total_sets,last_date"));
        assert!(out.contains("Bench,500.0,100.0,5,1,2024-01-01"));
    }

    #[test]
    fn records_csv_flattens_the_kind() {
        let records = vec![
            PersonalRecord {
                exercise: "Bench".into(),
                kind: RecordKind::MaxWeight {
                    weight: 100.0,
                    estimated_1rm: 120.0,
                },
                date: "2024-01-01".into(),
            },
            PersonalRecord {
                exercise: "Pull-Up".into(),
                kind: RecordKind::MaxReps { reps: 12 },
                date: "2024-01-01".into(),
            },
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prs.csv");
        save_records_csv(&path, &records).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        assert!(out.contains("Bench,max_weight,100.0,,120.0,2024-01-01"));
        assert!(out.contains("Pull-Up,max_reps,,12,,2024-01-01"));
    }

    #[test]
    fn stats_save_paths_round_trip() {
        let stats = vec![ExerciseStats {
            name: "Bench".into(),
            total_volume: 500.0,
            max_weight: 100.0,
            max_reps: 5,
            total_sets: 1,
            last_date: "2024-01-01".into(),
        }];
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("stats.json");
        save_stats_json(&json_path, &stats).unwrap();
        let loaded: Vec<ExerciseStats> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(loaded, stats);

        let csv_path = dir.path().join("stats.csv");
        save_stats_csv(&csv_path, &stats).unwrap();
        let out = std::fs::read_to_string(&csv_path).unwrap();
        assert!(out.starts_with("name,total_volume,max_weight,max_reps,total_sets,last_date"));
        assert!(out.contains("Bench,500.0,100.0,5,1,2024-01-01"));
    }

    #[test]
    fn records_json_round_trip() {
        let records = vec![PersonalRecord {
            exercise: "Bench".into(),
            kind: RecordKind::MaxWeight {
                weight: 100.0,
                estimated_1rm: 120.0,
            },
            date: "2024-01-01".into(),
        }];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prs.json");
        save_records_json(&path, &records).unwrap();
        let loaded: Vec<PersonalRecord> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn sessions_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.json");
        let sessions = vec![sample_session()];
        save_sessions_json(&path, &sessions).unwrap();
        let loaded: Vec<Session> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, sessions);
    }
}
