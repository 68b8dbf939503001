use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for an account holder
pub type HolderId = Uuid;

/// unique identifier for a loan application
pub type ApplicationId = Uuid;

/// account types a holder can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
        }
    }
}

/// loan application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// no application decided yet
    Pending,
    /// application passed the debt-to-income check
    Approved,
    /// application failed the debt-to-income check
    Rejected,
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// immutable snapshot of a loan application at decision time
///
/// Copies the holder's attributes by value; later mutation of the holder's
/// live balances never changes a logged record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub application_id: ApplicationId,
    pub holder_id: HolderId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub income: Money,
    pub expenses: Money,
    pub existing_loan_emi: Money,
    pub requested_amount: Money,
    pub debt_to_income: Option<Rate>,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// outcome of a loan application returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDecision {
    pub application_id: ApplicationId,
    pub status: ApplicationStatus,
    pub requested_amount: Money,
    pub debt_to_income: Option<Rate>,
    /// holder's live loan balance after the decision
    pub loan_balance: Money,
}

impl LoanDecision {
    pub fn is_approved(&self) -> bool {
        self.status == ApplicationStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_display() {
        assert_eq!(AccountType::Checking.to_string(), "checking");
        assert_eq!(AccountType::Savings.to_string(), "savings");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ApplicationStatus::Approved.to_string(), "approved");
        assert_eq!(ApplicationStatus::Rejected.to_string(), "rejected");
        assert_eq!(ApplicationStatus::Pending.to_string(), "pending");
    }
}
