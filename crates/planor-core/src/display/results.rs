//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{Challenge, EnrichedChallenge};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, Timestamp};
/// use planor_core::{display::CreateResult, enrich::enrich, models::NewChallenge};
/// use rust_decimal::Decimal;
///
/// let challenge = NewChallenge {
///     title: "Holiday".to_string(),
///     start_amount: Decimal::from(5),
///     step_amount: Decimal::from(5),
///     total_weeks: 10,
///     direction: Default::default(),
///     custom_amounts: None,
///     target_amount: None,
///     start_date: date(2024, 3, 4),
/// }
/// .into_challenge(3, Timestamp::now());
///
/// let output = CreateResult::new(enrich(&challenge)).to_string();
/// assert!(output.starts_with("Created challenge with ID: 3"));
/// assert!(output.contains("- Progress: 0.00 of 275.00 (0.0%)"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of the changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

/// Records that can be reported by the result wrappers.
pub trait Resource: fmt::Display {
    fn resource_id(&self) -> u64;

    fn resource_title(&self) -> &str;
}

impl Resource for Challenge {
    fn resource_id(&self) -> u64 {
        self.id
    }

    fn resource_title(&self) -> &str {
        &self.title
    }
}

impl Resource for EnrichedChallenge {
    fn resource_id(&self) -> u64 {
        self.challenge.id
    }

    fn resource_title(&self) -> &str {
        &self.challenge.title
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created challenge with ID: {}", self.resource.resource_id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated challenge with ID: {}", self.resource.resource_id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted challenge '{}' (ID: {})",
            self.resource.resource_title(),
            self.resource.resource_id()
        )
    }
}
