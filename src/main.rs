//! Text dashboard over the persisted workout log.
//!
//! Loads the session and template collections and prints the summary the
//! statistics view is built from. An optional first argument selects the
//! identity whose log to load.

use chrono::Local;
use log::info;

use ironlog::records::RecordKind;
use ironlog::{analysis, progress, query, records, store};

fn main() {
    env_logger::init();

    let user = std::env::args().nth(1);
    let sessions = store::load_sessions(user.as_deref());
    let templates = store::load_templates();
    info!(
        "Loaded {} sessions and {} templates",
        sessions.len(),
        templates.len()
    );

    let today = Local::now().date_naive();
    let overview = analysis::overview(&sessions, today);
    println!("Sessions logged   {}", overview.total_sessions);
    println!("Total volume      {:.0} kg", overview.total_volume);
    println!("Last 7 days       {}", overview.weekly_sessions);
    println!("Last 30 days      {}", overview.monthly_sessions);

    let stats = analysis::exercise_stats(&sessions);
    if !stats.is_empty() {
        println!("\nTop exercises by volume");
        for stat in stats.iter().take(10) {
            println!(
                "  {:<24} {:>9.0} kg  max {:>5.1} kg x {:<3} sets {:<4} last {}",
                stat.name,
                stat.total_volume,
                stat.max_weight,
                stat.max_reps,
                stat.total_sets,
                stat.last_date
            );
        }
    }

    let prs = records::personal_records(&stats, &sessions);
    if !prs.is_empty() {
        println!("\nPersonal records");
        for pr in prs.iter().take(8) {
            match pr.kind {
                RecordKind::MaxWeight {
                    weight,
                    estimated_1rm,
                } => println!(
                    "  {:<24} {:>6.1} kg  (est. 1RM {:.1} kg)  {}",
                    pr.exercise, weight, estimated_1rm, pr.date
                ),
                RecordKind::MaxReps { reps } => {
                    println!("  {:<24} {:>6} reps  {}", pr.exercise, reps, pr.date)
                }
            }
        }
    }

    let trend = progress::volume_trend(&sessions, 7);
    if !trend.is_empty() {
        println!("\nRecent daily volume");
        for (date, volume) in &trend {
            println!("  {date}  {volume:.0} kg");
        }
    }

    let tags = analysis::tag_frequency(&sessions);
    if !tags.is_empty() {
        println!("\nTag frequency");
        for (tag, count) in &tags {
            println!("  {tag}: {count} sessions");
        }
    }

    let buckets = query::sessions_by_date(&sessions);
    println!("\nTraining days: {}", buckets.len());
}
