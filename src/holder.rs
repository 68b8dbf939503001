use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::Result;
use crate::ledger::Ledger;
use crate::types::{AccountType, ApplicationStatus, HolderId, LoanDecision};

/// financial profile used for loan eligibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub income: Money,
    pub expenses: Money,
    pub existing_loan_emi: Money,
}

impl FinancialProfile {
    /// create a profile with no existing loan installment
    pub fn new(income: Money, expenses: Money) -> Self {
        Self {
            income,
            expenses,
            existing_loan_emi: Money::ZERO,
        }
    }

    /// set the existing loan installment obligation
    pub fn with_existing_emi(mut self, emi: Money) -> Self {
        self.existing_loan_emi = emi;
        self
    }

    /// total recurring obligations (expenses plus existing installment)
    pub fn monthly_obligations(&self) -> Money {
        self.expenses + self.existing_loan_emi
    }
}

/// a bank customer with identity, financial profile, and balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountHolder {
    pub id: HolderId,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub profile: FinancialProfile,
    pub checking_balance: Money,
    pub savings_balance: Money,
    /// live outstanding loan amount, mutated only by loan approval and repayment
    pub loan_balance: Money,
    /// status of the most recent loan application
    pub loan_status: ApplicationStatus,
}

impl AccountHolder {
    /// create a new holder with zero balances and no loan history
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        profile: FinancialProfile,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            gender: gender.into(),
            profile,
            checking_balance: Money::ZERO,
            savings_balance: Money::ZERO,
            loan_balance: Money::ZERO,
            loan_status: ApplicationStatus::Pending,
        }
    }

    /// balance for the given account type
    pub fn balance(&self, account_type: AccountType) -> Money {
        match account_type {
            AccountType::Checking => self.checking_balance,
            AccountType::Savings => self.savings_balance,
        }
    }

    pub(crate) fn balance_mut(&mut self, account_type: AccountType) -> &mut Money {
        match account_type {
            AccountType::Checking => &mut self.checking_balance,
            AccountType::Savings => &mut self.savings_balance,
        }
    }

    // convenience methods that forward to the ledger; no logic of their own

    /// deposit into this holder's account via the ledger
    pub fn deposit(
        &mut self,
        ledger: &mut Ledger,
        account_type: AccountType,
        amount: Money,
    ) -> Result<Money> {
        ledger.deposit(self, account_type, amount)
    }

    /// withdraw from this holder's account via the ledger
    pub fn withdraw(
        &mut self,
        ledger: &mut Ledger,
        account_type: AccountType,
        amount: Money,
    ) -> Result<Money> {
        ledger.withdraw(self, account_type, amount)
    }

    /// apply for a loan via the ledger
    pub fn apply_for_loan(&mut self, ledger: &mut Ledger, amount: Money) -> LoanDecision {
        ledger.apply_for_loan(self, amount)
    }

    /// pay back part of the outstanding loan via the ledger
    pub fn pay_back_loan(&mut self, ledger: &mut Ledger, amount: Money) -> Money {
        ledger.pay_back_loan(self, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holder_starts_empty() {
        let profile = FinancialProfile::new(Money::from_major(100_000), Money::from_major(20_000));
        let holder = AccountHolder::new("Alice", 30, "female", profile);

        assert_eq!(holder.checking_balance, Money::ZERO);
        assert_eq!(holder.savings_balance, Money::ZERO);
        assert_eq!(holder.loan_balance, Money::ZERO);
        assert_eq!(holder.loan_status, ApplicationStatus::Pending);
    }

    #[test]
    fn test_profile_obligations() {
        let profile = FinancialProfile::new(Money::from_major(60_000), Money::from_major(25_000))
            .with_existing_emi(Money::from_major(5_000));

        assert_eq!(profile.monthly_obligations(), Money::from_major(30_000));
    }

    #[test]
    fn test_balance_by_account_type() {
        let profile = FinancialProfile::new(Money::from_major(50_000), Money::from_major(10_000));
        let mut holder = AccountHolder::new("Bruno", 40, "male", profile);

        *holder.balance_mut(AccountType::Checking) += Money::from_major(300);
        *holder.balance_mut(AccountType::Savings) += Money::from_major(700);

        assert_eq!(holder.balance(AccountType::Checking), Money::from_major(300));
        assert_eq!(holder.balance(AccountType::Savings), Money::from_major(700));
    }
}
