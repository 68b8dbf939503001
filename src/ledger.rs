use hourglass_rs::{SafeTimeProvider, TimeSource};
use uuid::Uuid;

use crate::decimal::Money;
use crate::eligibility::EligibilityEngine;
use crate::errors::{BankError, Result};
use crate::events::{Event, EventStore};
use crate::holder::AccountHolder;
use crate::reporting::{self, ApplicantProfile};
use crate::types::{AccountType, ApplicationStatus, HolderId, LoanApplication, LoanDecision};

/// in-memory ledger: account registries plus the loan application log
pub struct Ledger {
    checking: Vec<HolderId>,
    savings: Vec<HolderId>,
    applications: Vec<LoanApplication>,
    eligibility: EligibilityEngine,
    pub events: EventStore,
    time: SafeTimeProvider,
}

impl Ledger {
    /// create a ledger using system time
    pub fn new() -> Self {
        Self::with_time(SafeTimeProvider::new(TimeSource::System))
    }

    /// create a ledger with an injected time provider
    pub fn with_time(time: SafeTimeProvider) -> Self {
        Self {
            checking: Vec::new(),
            savings: Vec::new(),
            applications: Vec::new(),
            eligibility: EligibilityEngine::standard(),
            events: EventStore::new(),
            time,
        }
    }

    fn registry(&self, account_type: AccountType) -> &Vec<HolderId> {
        match account_type {
            AccountType::Checking => &self.checking,
            AccountType::Savings => &self.savings,
        }
    }

    fn registry_mut(&mut self, account_type: AccountType) -> &mut Vec<HolderId> {
        match account_type {
            AccountType::Checking => &mut self.checking,
            AccountType::Savings => &mut self.savings,
        }
    }

    /// check registry membership for a holder
    pub fn has_account(&self, holder: &AccountHolder, account_type: AccountType) -> bool {
        self.registry(account_type).contains(&holder.id)
    }

    /// number of holders registered for an account type
    pub fn holder_count(&self, account_type: AccountType) -> usize {
        self.registry(account_type).len()
    }

    /// open an account of the given type for a holder
    ///
    /// Opening is guarded: a second open of the same holder/type is refused,
    /// so `holder_count` counts distinct holders.
    pub fn open_account(
        &mut self,
        holder: &AccountHolder,
        account_type: AccountType,
    ) -> Result<()> {
        if self.has_account(holder, account_type) {
            return Err(BankError::AccountAlreadyOpen {
                name: holder.name.clone(),
                account_type,
            });
        }

        self.registry_mut(account_type).push(holder.id);

        self.events.emit(Event::AccountOpened {
            holder_id: holder.id,
            name: holder.name.clone(),
            account_type,
            timestamp: self.time.now(),
        });

        Ok(())
    }

    /// deposit into a holder's account, returning the new balance
    ///
    /// The amount's sign is not validated; a negative deposit decreases the
    /// balance, matching the tolerant semantics of the simulation.
    pub fn deposit(
        &mut self,
        holder: &mut AccountHolder,
        account_type: AccountType,
        amount: Money,
    ) -> Result<Money> {
        if !self.has_account(holder, account_type) {
            return Err(BankError::HolderNotFound {
                name: holder.name.clone(),
                account_type,
            });
        }

        let balance = holder.balance_mut(account_type);
        *balance += amount;
        let new_balance = *balance;

        self.events.emit(Event::DepositReceived {
            holder_id: holder.id,
            name: holder.name.clone(),
            account_type,
            amount,
            new_balance,
            timestamp: self.time.now(),
        });

        Ok(new_balance)
    }

    /// withdraw from a holder's account, returning the new balance
    pub fn withdraw(
        &mut self,
        holder: &mut AccountHolder,
        account_type: AccountType,
        amount: Money,
    ) -> Result<Money> {
        if !self.has_account(holder, account_type) {
            return Err(BankError::HolderNotFound {
                name: holder.name.clone(),
                account_type,
            });
        }

        let available = holder.balance(account_type);
        if available < amount {
            return Err(BankError::InsufficientFunds {
                name: holder.name.clone(),
                account_type,
                available,
                requested: amount,
            });
        }

        let balance = holder.balance_mut(account_type);
        *balance -= amount;
        let new_balance = *balance;

        self.events.emit(Event::WithdrawalCompleted {
            holder_id: holder.id,
            name: holder.name.clone(),
            account_type,
            amount,
            new_balance,
            timestamp: self.time.now(),
        });

        Ok(new_balance)
    }

    /// evaluate a loan application and record the decision
    ///
    /// On approval the requested amount is added to the holder's live loan
    /// balance. Both branches append an immutable snapshot to the application
    /// log and update the holder's most recent status.
    pub fn apply_for_loan(&mut self, holder: &mut AccountHolder, amount: Money) -> LoanDecision {
        let assessment = self.eligibility.assess(&holder.profile);
        let now = self.time.now();
        let application_id = Uuid::new_v4();

        let status = if assessment.eligible {
            holder.loan_balance += amount;
            ApplicationStatus::Approved
        } else {
            ApplicationStatus::Rejected
        };
        holder.loan_status = status;

        self.applications.push(LoanApplication {
            application_id,
            holder_id: holder.id,
            name: holder.name.clone(),
            age: holder.age,
            gender: holder.gender.clone(),
            income: holder.profile.income,
            expenses: holder.profile.expenses,
            existing_loan_emi: holder.profile.existing_loan_emi,
            requested_amount: amount,
            debt_to_income: assessment.debt_to_income,
            status,
            applied_at: now,
        });

        match (status, assessment.debt_to_income) {
            (ApplicationStatus::Approved, Some(ratio)) => self.events.emit(Event::LoanApproved {
                application_id,
                holder_id: holder.id,
                name: holder.name.clone(),
                amount,
                debt_to_income: ratio,
                new_loan_balance: holder.loan_balance,
                timestamp: now,
            }),
            _ => self.events.emit(Event::LoanRejected {
                application_id,
                holder_id: holder.id,
                name: holder.name.clone(),
                amount,
                debt_to_income: assessment.debt_to_income,
                timestamp: now,
            }),
        }

        LoanDecision {
            application_id,
            status,
            requested_amount: amount,
            debt_to_income: assessment.debt_to_income,
            loan_balance: holder.loan_balance,
        }
    }

    /// pay back part of the outstanding loan
    ///
    /// Returns the amount actually paid: the full amount when the live loan
    /// balance covers it, zero (and no mutation) otherwise.
    pub fn pay_back_loan(&mut self, holder: &mut AccountHolder, amount: Money) -> Money {
        if holder.loan_balance < amount {
            return Money::ZERO;
        }

        holder.loan_balance -= amount;

        self.events.emit(Event::LoanRepaid {
            holder_id: holder.id,
            name: holder.name.clone(),
            amount,
            remaining_balance: holder.loan_balance,
            timestamp: self.time.now(),
        });

        amount
    }

    /// the full application log, in application order
    pub fn applications(&self) -> &[LoanApplication] {
        &self.applications
    }

    /// top approved applications by requested amount
    pub fn best_loans(&self, limit: usize) -> Vec<&LoanApplication> {
        reporting::best_loans(&self.applications, limit)
    }

    /// demographic profiles of rejected applicants, in application order
    pub fn rejected_applicant_profiles(&self) -> Vec<ApplicantProfile> {
        reporting::rejected_profiles(&self.applications)
    }

    /// drain accumulated events
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
