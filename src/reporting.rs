/// reporting over the ledger's application log
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::ledger::Ledger;
use crate::types::{AccountType, ApplicationStatus, LoanApplication};

/// default number of entries in the loan ranking
pub const DEFAULT_RANKING_LIMIT: usize = 5;

/// demographic-only view of a rejected applicant
///
/// Requested amount and status are deliberately excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub income: Money,
    pub expenses: Money,
    pub existing_loan_emi: Money,
}

impl ApplicantProfile {
    pub fn from_application(application: &LoanApplication) -> Self {
        Self {
            name: application.name.clone(),
            age: application.age,
            gender: application.gender.clone(),
            income: application.income,
            expenses: application.expenses,
            existing_loan_emi: application.existing_loan_emi,
        }
    }
}

/// top approved applications by requested amount
///
/// Stable sort: equal amounts keep their original application order.
pub fn best_loans(applications: &[LoanApplication], limit: usize) -> Vec<&LoanApplication> {
    let mut approved: Vec<&LoanApplication> = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Approved)
        .collect();
    approved.sort_by(|a, b| b.requested_amount.cmp(&a.requested_amount));
    approved.truncate(limit);
    approved
}

/// demographic profiles of rejected applicants, in application order
pub fn rejected_profiles(applications: &[LoanApplication]) -> Vec<ApplicantProfile> {
    applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Rejected)
        .map(ApplicantProfile::from_application)
        .collect()
}

/// serializable summary view of a ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerReport {
    pub checking_holders: usize,
    pub savings_holders: usize,
    pub applications_received: usize,
    pub loans_approved: usize,
    pub loans_rejected: usize,
    pub approved_volume: Money,
}

impl LedgerReport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let applications = ledger.applications();
        let approved: Vec<&LoanApplication> = applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Approved)
            .collect();

        Self {
            checking_holders: ledger.holder_count(AccountType::Checking),
            savings_holders: ledger.holder_count(AccountType::Savings),
            applications_received: applications.len(),
            loans_approved: approved.len(),
            loans_rejected: applications.len() - approved.len(),
            approved_volume: approved
                .iter()
                .fold(Money::ZERO, |total, a| total + a.requested_amount),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn application(name: &str, amount: i64, status: ApplicationStatus) -> LoanApplication {
        LoanApplication {
            application_id: Uuid::new_v4(),
            holder_id: Uuid::new_v4(),
            name: name.to_string(),
            age: 30,
            gender: "female".to_string(),
            income: Money::from_major(100_000),
            expenses: Money::from_major(20_000),
            existing_loan_emi: Money::ZERO,
            requested_amount: Money::from_major(amount),
            debt_to_income: None,
            status,
            applied_at: Utc::now(),
        }
    }

    #[test]
    fn test_best_loans_sorted_descending() {
        let log = vec![
            application("a", 10_000, ApplicationStatus::Approved),
            application("b", 40_000, ApplicationStatus::Approved),
            application("c", 25_000, ApplicationStatus::Approved),
        ];

        let best = best_loans(&log, 5);
        let amounts: Vec<Money> = best.iter().map(|a| a.requested_amount).collect();
        assert_eq!(
            amounts,
            vec![
                Money::from_major(40_000),
                Money::from_major(25_000),
                Money::from_major(10_000)
            ]
        );
    }

    #[test]
    fn test_best_loans_excludes_rejected_and_respects_limit() {
        let log = vec![
            application("a", 50_000, ApplicationStatus::Rejected),
            application("b", 10_000, ApplicationStatus::Approved),
            application("c", 20_000, ApplicationStatus::Approved),
            application("d", 30_000, ApplicationStatus::Approved),
        ];

        let best = best_loans(&log, 2);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].requested_amount, Money::from_major(30_000));
        assert_eq!(best[1].requested_amount, Money::from_major(20_000));
    }

    #[test]
    fn test_best_loans_ties_keep_application_order() {
        let log = vec![
            application("first", 25_000, ApplicationStatus::Approved),
            application("second", 25_000, ApplicationStatus::Approved),
            application("third", 25_000, ApplicationStatus::Approved),
        ];

        let best = best_loans(&log, 5);
        let names: Vec<&str> = best.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rejected_profiles_projection() {
        let log = vec![
            application("approved", 10_000, ApplicationStatus::Approved),
            application("declined", 30_000, ApplicationStatus::Rejected),
        ];

        let profiles = rejected_profiles(&log);
        assert_eq!(profiles.len(), 1);

        let profile = &profiles[0];
        assert_eq!(profile.name, "declined");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.income, Money::from_major(100_000));

        // projection carries no amount or status field
        let json = serde_json::to_value(profile).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 6);
        assert!(!keys.iter().any(|k| k.contains("amount") || k.contains("status")));
    }

    #[test]
    fn test_rejected_profiles_keep_application_order() {
        let log = vec![
            application("x", 1, ApplicationStatus::Rejected),
            application("y", 2, ApplicationStatus::Approved),
            application("z", 3, ApplicationStatus::Rejected),
        ];

        let names: Vec<String> = rejected_profiles(&log).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["x".to_string(), "z".to_string()]);
    }
}
