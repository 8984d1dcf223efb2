//! Filter types for querying challenges.

use super::{Challenge, ChallengeStatus};

/// Filter options for listing challenges.
#[derive(Debug, Clone, Default)]
pub struct ChallengeFilter {
    /// Filter by title (case-insensitive partial match)
    pub title_contains: Option<String>,

    /// Filter by status. `None` lists every status.
    pub status: Option<ChallengeStatus>,
}

impl ChallengeFilter {
    /// Filter for a single status.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planor_core::models::{ChallengeFilter, ChallengeStatus};
    ///
    /// let filter = ChallengeFilter::with_status(ChallengeStatus::Paused);
    /// assert_eq!(filter.status, Some(ChallengeStatus::Paused));
    /// assert!(filter.title_contains.is_none());
    /// ```
    pub fn with_status(status: ChallengeStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// In-process evaluation, used by stores without a query language.
    pub fn matches(&self, challenge: &Challenge) -> bool {
        if self.status.is_some_and(|status| status != challenge.status) {
            return false;
        }
        match &self.title_contains {
            Some(needle) => challenge
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }
}
