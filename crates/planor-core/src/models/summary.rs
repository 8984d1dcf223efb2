//! Challenge summary types for list views.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ChallengeStatus, EnrichedChallenge};

/// Compact per-challenge line for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeSummary {
    /// Challenge ID
    pub id: u64,
    pub title: String,
    pub status: ChallengeStatus,
    pub current_week: u32,
    pub total_weeks: u32,
    pub total_deposited: Decimal,
    pub target_total: Decimal,
    pub progress_percent: Decimal,
    /// Creation timestamp
    pub created_at: Timestamp,
}

impl From<&EnrichedChallenge> for ChallengeSummary {
    fn from(enriched: &EnrichedChallenge) -> Self {
        let challenge = &enriched.challenge;
        Self {
            id: challenge.id,
            title: challenge.title.clone(),
            status: challenge.status,
            current_week: challenge.current_week,
            total_weeks: challenge.total_weeks,
            total_deposited: challenge.total_deposited,
            target_total: enriched.target_total,
            progress_percent: enriched.progress_percent,
            created_at: challenge.created_at,
        }
    }
}
