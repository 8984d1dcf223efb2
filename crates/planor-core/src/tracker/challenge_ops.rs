//! Challenge operations for the Tracker.

use jiff::{Timestamp, Zoned};
use log::info;

use super::Tracker;
use crate::{
    enrich::enrich,
    error::{ChallengeError, Result},
    models::{Challenge, ChallengeFilter, EnrichedChallenge, Simulation},
    params::{CreateChallenge, DeleteChallenge, Id, ListChallenges, MarkWeekPaid, Simulate},
    reconcile::{self, PaymentOutcome},
    store::ChallengeStore,
};

impl Tracker {
    /// Validates and persists a new challenge. A missing start date defaults
    /// to today in the system time zone.
    pub async fn create_challenge(&self, params: &CreateChallenge) -> Result<Challenge> {
        let new_challenge = params.validate(Zoned::now().date())?;

        let challenge = self
            .with_database(move |db| db.insert(new_challenge))
            .await?;
        info!("Created challenge {} '{}'", challenge.id, challenge.title);
        Ok(challenge)
    }

    /// Retrieves a challenge by its ID.
    pub async fn get_challenge(&self, params: &Id) -> Result<Challenge> {
        let id = params.id;
        self.with_database(move |db| db.get(id)).await
    }

    /// Retrieves a challenge together with its derived view fields.
    pub async fn get_enriched_challenge(&self, params: &Id) -> Result<EnrichedChallenge> {
        let challenge = self.get_challenge(params).await?;
        Ok(enrich(&challenge))
    }

    /// Lists challenges, newest first.
    pub async fn list_challenges(&self, params: &ListChallenges) -> Result<Vec<Challenge>> {
        let filter = ChallengeFilter::from(params);
        self.with_database(move |db| db.list(&filter)).await
    }

    /// Records a weekly deposit and, when an account is given, mirrors it to
    /// the ledger.
    ///
    /// Without an explicit amount the scheduled amount for the week is used.
    /// A failed ledger write does not fail the call; inspect
    /// [`PaymentOutcome::ledger`].
    pub async fn mark_week_paid(&self, params: &MarkWeekPaid) -> Result<PaymentOutcome> {
        let params = params.clone();
        let category = self.ledger_category.clone();
        self.with_database(move |db| {
            reconcile::record_payment(
                db,
                Some(db),
                &params,
                &category,
                &Zoned::now(),
            )
        })
        .await
    }

    /// Flips a challenge between active and paused.
    pub async fn toggle_pause(&self, params: &Id) -> Result<Challenge> {
        let id = params.id;
        self.with_database(move |db| {
            let challenge = db.get(id)?;
            let toggled = reconcile::toggle_pause(challenge, Timestamp::now())?;
            db.put(&toggled)
        })
        .await
    }

    /// Permanently deletes a challenge. Requires `confirmed`.
    pub async fn delete_challenge(&self, params: &DeleteChallenge) -> Result<Challenge> {
        if !params.confirmed {
            return Err(ChallengeError::invalid_input("confirmed")
                .with_reason("deletion must be explicitly confirmed"));
        }
        let id = params.id;
        let deleted = self.with_database(move |db| db.delete(id)).await?;
        info!("Deleted challenge {} '{}'", deleted.id, deleted.title);
        Ok(deleted)
    }

    /// Previews a schedule without touching the database.
    pub fn simulate(&self, params: &Simulate) -> Result<Simulation> {
        reconcile::simulate(
            params.start_amount,
            params.step_amount,
            params.total_weeks,
            params.direction,
        )
    }
}
