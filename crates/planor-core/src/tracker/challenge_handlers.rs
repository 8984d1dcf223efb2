//! Challenge handler operations that return formatted wrapper types for the
//! Tracker.

use super::Tracker;
use crate::{
    display::{ChallengeSummaries, CreateResult, DeleteResult, UpdateResult},
    enrich::enrich,
    error::Result,
    models::{ChallengeStatus, ChallengeSummary, EnrichedChallenge},
    params::{CreateChallenge, DeleteChallenge, Id, ListChallenges, MarkWeekPaid},
    reconcile::LedgerStatus,
};

impl Tracker {
    /// Handle listing challenges as progress summaries.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use planor_core::{params::ListChallenges, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let summaries = tracker.list_challenges_summary(&ListChallenges::default()).await?;
    /// println!("{summaries}");
    /// # Result::<(), planor_core::ChallengeError>::Ok(())
    /// # };
    /// ```
    pub async fn list_challenges_summary(
        &self,
        params: &ListChallenges,
    ) -> Result<ChallengeSummaries> {
        let challenges = self.list_challenges(params).await?;
        let summaries: Vec<ChallengeSummary> = challenges
            .iter()
            .map(|challenge| ChallengeSummary::from(&enrich(challenge)))
            .collect();
        Ok(ChallengeSummaries(summaries))
    }

    /// Handle creating a challenge, returning the enriched record.
    pub async fn create_challenge_result(
        &self,
        params: &CreateChallenge,
    ) -> Result<CreateResult<EnrichedChallenge>> {
        let challenge = self.create_challenge(params).await?;
        Ok(CreateResult::new(enrich(&challenge)))
    }

    /// Handle recording a payment, describing what changed.
    pub async fn mark_week_paid_result(
        &self,
        params: &MarkWeekPaid,
    ) -> Result<UpdateResult<EnrichedChallenge>> {
        let outcome = self.mark_week_paid(params).await?;

        let mut changes = vec![format!(
            "Recorded {} for week {}",
            crate::display::Money(&outcome.amount),
            params.week
        )];
        if outcome.completed {
            changes.push("Challenge completed".to_string());
        }
        match &outcome.ledger {
            LedgerStatus::NotRequested => {}
            LedgerStatus::Recorded => changes.push(format!(
                "Ledger entry added to account {}",
                params.account_id.as_deref().unwrap_or_default()
            )),
            LedgerStatus::Failed(reason) => {
                changes.push(format!("Ledger entry not recorded: {reason}"))
            }
        }

        Ok(UpdateResult::with_changes(enrich(&outcome.challenge), changes))
    }

    /// Handle pausing or resuming a challenge.
    pub async fn toggle_pause_result(&self, params: &Id) -> Result<UpdateResult<EnrichedChallenge>> {
        let challenge = self.toggle_pause(params).await?;
        let change = match challenge.status {
            ChallengeStatus::Paused => "Challenge paused",
            _ => "Challenge resumed",
        };
        Ok(UpdateResult::with_changes(
            enrich(&challenge),
            vec![change.to_string()],
        ))
    }

    /// Handle deleting a challenge.
    pub async fn delete_challenge_result(
        &self,
        params: &DeleteChallenge,
    ) -> Result<DeleteResult<EnrichedChallenge>> {
        let deleted = self.delete_challenge(params).await?;
        Ok(DeleteResult::new(enrich(&deleted)))
    }
}
