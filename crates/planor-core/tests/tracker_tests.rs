mod common;

use common::{create_test_tracker, linear_challenge};
use jiff::civil::date;
use planor_core::{
    models::NewChallenge,
    params::{Id, ListChallenges, ListLedgerEntries, MarkWeekPaid, Simulate},
    ChallengeError, ChallengeStatus, ChallengeStore, CreateChallenge, Database, Direction,
    LedgerStatus,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_full_challenge_lifecycle() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let challenge = tracker
        .create_challenge(&linear_challenge("Four weeks", dec!(10), dec!(5), 4))
        .await
        .expect("Failed to create challenge");

    for week in 1..=4 {
        let outcome = tracker
            .mark_week_paid(&MarkWeekPaid {
                id: challenge.id,
                week,
                amount: None,
                account_id: Some("checking".to_string()),
            })
            .await
            .expect("Failed to record payment");
        assert_eq!(outcome.ledger, LedgerStatus::Recorded);
    }

    let enriched = tracker
        .get_enriched_challenge(&Id { id: challenge.id })
        .await
        .expect("Failed to get challenge");
    assert_eq!(enriched.challenge.status, ChallengeStatus::Completed);
    assert_eq!(enriched.challenge.total_deposited, dec!(70));
    assert_eq!(enriched.target_total, dec!(70));
    assert_eq!(enriched.progress_percent, dec!(100));
    assert_eq!(enriched.weeks_remaining, 0);
    assert_eq!(enriched.current_week_amount, dec!(0));
    assert_eq!(enriched.achieved_milestones, vec![25, 50, 75, 100]);
    assert_eq!(enriched.next_milestone, None);

    let ledger = tracker
        .list_ledger_entries(&ListLedgerEntries::default())
        .await
        .expect("Failed to list ledger");
    let total: rust_decimal::Decimal = ledger.iter().map(|e| e.entry.amount).sum();
    assert_eq!(ledger.len(), 4);
    assert_eq!(total, dec!(70));
}

#[tokio::test]
async fn test_repeat_payment_replaces_previous_amount() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let challenge = tracker
        .create_challenge(&linear_challenge("Corrections", dec!(1), dec!(1), 52))
        .await
        .expect("Failed to create challenge");

    for amount in [dec!(1), dec!(5)] {
        tracker
            .mark_week_paid(&MarkWeekPaid {
                id: challenge.id,
                week: 1,
                amount: Some(amount),
                account_id: None,
            })
            .await
            .expect("Failed to record payment");
    }

    let stored = tracker
        .get_challenge(&Id { id: challenge.id })
        .await
        .expect("Failed to get challenge");
    assert_eq!(stored.deposit_history.len(), 1);
    assert_eq!(stored.total_deposited, dec!(5));
    assert_eq!(stored.current_week, 1);
}

#[tokio::test]
async fn test_out_of_order_payments_track_highest_week() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let challenge = tracker
        .create_challenge(&linear_challenge("Skipping ahead", dec!(1), dec!(1), 10))
        .await
        .expect("Failed to create challenge");

    for week in [5, 2] {
        tracker
            .mark_week_paid(&MarkWeekPaid {
                id: challenge.id,
                week,
                ..Default::default()
            })
            .await
            .expect("Failed to record payment");
    }

    let enriched = tracker
        .get_enriched_challenge(&Id { id: challenge.id })
        .await
        .expect("Failed to get challenge");
    assert_eq!(enriched.challenge.current_week, 5);
    assert_eq!(enriched.challenge.total_deposited, dec!(7));
    assert_eq!(enriched.paid_weeks, 2);
    assert_eq!(enriched.current_week_amount, dec!(6));
}

#[tokio::test]
async fn test_invalid_week_leaves_challenge_untouched() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let challenge = tracker
        .create_challenge(&linear_challenge("Bounds", dec!(1), dec!(1), 3))
        .await
        .expect("Failed to create challenge");

    for week in [0, 4] {
        let result = tracker
            .mark_week_paid(&MarkWeekPaid {
                id: challenge.id,
                week,
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ChallengeError::InvalidSchedule { .. })));
    }

    let stored = tracker
        .get_challenge(&Id { id: challenge.id })
        .await
        .expect("Failed to get challenge");
    assert_eq!(stored.version, 1);
    assert!(stored.deposit_history.is_empty());
}

#[tokio::test]
async fn test_payment_on_missing_challenge() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .mark_week_paid(&MarkWeekPaid {
            id: 404,
            week: 1,
            ..Default::default()
        })
        .await;
    assert!(matches!(
        result,
        Err(ChallengeError::ChallengeNotFound { id: 404 })
    ));
}

#[tokio::test]
async fn test_custom_schedule_drives_defaults() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let challenge = tracker
        .create_challenge(&CreateChallenge {
            custom_amounts: Some(vec![dec!(20), dec!(0), dec!(35.50)]),
            ..linear_challenge("Irregular", dec!(1), dec!(1), 3)
        })
        .await
        .expect("Failed to create challenge");

    let outcome = tracker
        .mark_week_paid(&MarkWeekPaid {
            id: challenge.id,
            week: 3,
            ..Default::default()
        })
        .await
        .expect("Failed to record payment");
    assert_eq!(outcome.amount, dec!(35.50));

    let summaries = tracker
        .list_challenges_summary(&ListChallenges::default())
        .await
        .expect("Failed to list");
    assert_eq!(summaries[0].target_total, dec!(55.50));
}

#[tokio::test]
async fn test_simulate_matches_created_schedule() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let simulation = tracker
        .simulate(&Simulate {
            start_amount: dec!(1),
            step_amount: dec!(1),
            total_weeks: 52,
            direction: Direction::Standard,
        })
        .expect("Failed to simulate");

    let challenge = tracker
        .create_challenge(&linear_challenge("Simulated", dec!(1), dec!(1), 52))
        .await
        .expect("Failed to create challenge");
    let enriched = tracker
        .get_enriched_challenge(&Id { id: challenge.id })
        .await
        .expect("Failed to get challenge");

    assert_eq!(simulation.target_total, dec!(1378));
    assert_eq!(simulation.weekly_amounts, enriched.weekly_amounts);
    assert_eq!(simulation.last_week_amount, dec!(52));
}

#[tokio::test]
async fn test_oversized_stored_record_still_lists() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let db = Database::new(tracker.database_path()).expect("Failed to open database");
    let stored = db
        .insert(NewChallenge {
            title: "Imported".to_string(),
            start_amount: Decimal::MAX,
            step_amount: dec!(1),
            total_weeks: 2,
            direction: Direction::Standard,
            custom_amounts: None,
            target_amount: None,
            start_date: date(2024, 1, 1),
        })
        .expect("Failed to insert");

    let summaries = tracker
        .list_challenges_summary(&ListChallenges::default())
        .await
        .expect("Failed to list");
    assert_eq!(summaries.0.len(), 1);

    let enriched = tracker
        .get_enriched_challenge(&Id { id: stored.id })
        .await
        .expect("Failed to show");
    assert!(enriched.weekly_amounts.is_empty());
    assert_eq!(enriched.target_total, Decimal::ZERO);

    let paid = tracker
        .mark_week_paid(&MarkWeekPaid {
            id: stored.id,
            week: 1,
            amount: Some(dec!(5)),
            account_id: None,
        })
        .await
        .expect("Failed to record explicit payment");
    assert_eq!(paid.challenge.total_deposited, dec!(5));
}

#[tokio::test]
async fn test_create_rejects_oversized_schedules() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker
        .create_challenge(&linear_challenge("Too big", Decimal::MAX, dec!(1), 2))
        .await;
    assert!(matches!(result, Err(ChallengeError::InvalidSchedule { .. })));

    let result = tracker
        .create_challenge(&linear_challenge("Too long", dec!(1), dec!(1), 1041))
        .await;
    assert!(matches!(result, Err(ChallengeError::InvalidSchedule { .. })));

    let listed = tracker
        .list_challenges(&ListChallenges::default())
        .await
        .expect("Failed to list");
    assert!(listed.is_empty());
}
