use jiff::civil::date;
use planor_core::{params::CreateChallenge, Tracker, TrackerBuilder};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Helper function to create a test tracker
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Linear challenge starting on 2024-01-01
pub fn linear_challenge(title: &str, start: Decimal, step: Decimal, weeks: u32) -> CreateChallenge {
    CreateChallenge {
        title: title.to_string(),
        start_amount: start,
        step_amount: step,
        total_weeks: weeks,
        start_date: Some(date(2024, 1, 1)),
        ..Default::default()
    }
}
