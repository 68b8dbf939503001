pub mod decimal;
pub mod eligibility;
pub mod errors;
pub mod events;
pub mod holder;
pub mod ledger;
pub mod reporting;
pub mod types;

// re-export key types
pub use decimal::{Money, Rate};
pub use eligibility::{EligibilityAssessment, EligibilityEngine, DTI_THRESHOLD};
pub use errors::{BankError, Result};
pub use events::{Event, EventStore};
pub use holder::{AccountHolder, FinancialProfile};
pub use ledger::Ledger;
pub use reporting::{ApplicantProfile, LedgerReport, DEFAULT_RANKING_LIMIT};
pub use types::{
    AccountType, ApplicationId, ApplicationStatus, HolderId, LoanApplication, LoanDecision,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
