//! Ledger operations for the Tracker.

use super::Tracker;
use crate::{
    display::LedgerEntries, error::Result, models::LedgerEntry, params::ListLedgerEntries,
};

impl Tracker {
    /// Lists ledger entries mirrored from challenge deposits, newest first.
    pub async fn list_ledger_entries(&self, params: &ListLedgerEntries) -> Result<Vec<LedgerEntry>> {
        let account_id = params.account_id.clone();
        self.with_database(move |db| db.list_ledger_entries(account_id.as_deref()))
            .await
    }

    /// Same as [`Tracker::list_ledger_entries`], wrapped for display.
    pub async fn list_ledger_summary(&self, params: &ListLedgerEntries) -> Result<LedgerEntries> {
        Ok(LedgerEntries(self.list_ledger_entries(params).await?))
    }
}
