//! Admin PIN gating management operations

use crate::error::{Result, TeachlogError};

/// PIN used until the user sets their own
pub const DEFAULT_PIN: &str = "1007";

/// Shared local PIN. No lockout or throttling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPin(String);

impl AdminPin {
    /// Create a PIN, rejecting an empty value
    pub fn new(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(TeachlogError::Validation("PIN cannot be empty".to_string()));
        }
        Ok(AdminPin(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string comparison against the entered value
    pub fn matches(&self, entered: &str) -> bool {
        self.0 == entered
    }

    /// Check the entered value, failing with `IncorrectPin` on mismatch
    pub fn verify(&self, entered: &str) -> Result<()> {
        if self.matches(entered) {
            Ok(())
        } else {
            Err(TeachlogError::IncorrectPin)
        }
    }
}

impl Default for AdminPin {
    fn default() -> Self {
        AdminPin(DEFAULT_PIN.to_string())
    }
}
