//! Status and confirmation messages for operation feedback.

use std::fmt;

/// One-line outcome message, used where an operation has no record to show.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_labels() {
        let success = OperationStatus::success("Deletion cancelled");
        assert_eq!(success.to_string(), "Success: Deletion cancelled\n");

        let failure = OperationStatus::failure("Challenge 7 not found");
        assert!(failure.to_string().starts_with("Error:"));
    }
}
