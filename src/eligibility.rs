use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::holder::FinancialProfile;

/// debt-to-income threshold above which applications are declined
pub const DTI_THRESHOLD: Rate = Rate::from_decimal(Decimal::from_parts(36, 0, 0, false, 2));

/// outcome of an eligibility assessment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityAssessment {
    pub eligible: bool,
    /// None when the applicant has no income
    pub debt_to_income: Option<Rate>,
    pub threshold: Rate,
}

/// evaluates loan eligibility from a financial profile
#[derive(Debug, Clone, Copy)]
pub struct EligibilityEngine {
    threshold: Rate,
}

impl EligibilityEngine {
    /// create an engine with a custom threshold
    pub fn new(threshold: Rate) -> Self {
        Self { threshold }
    }

    /// engine with the standard 0.36 debt-to-income threshold
    pub fn standard() -> Self {
        Self::new(DTI_THRESHOLD)
    }

    pub fn threshold(&self) -> Rate {
        self.threshold
    }

    /// debt-to-income ratio: (expenses + existing installment) / income
    ///
    /// None when income is zero; a zero-income profile is never eligible.
    pub fn debt_to_income(&self, profile: &FinancialProfile) -> Option<Rate> {
        Rate::ratio(profile.monthly_obligations(), profile.income)
    }

    /// assess a profile; eligible iff the ratio is defined and within threshold
    pub fn assess(&self, profile: &FinancialProfile) -> EligibilityAssessment {
        let debt_to_income = self.debt_to_income(profile);
        let eligible = match debt_to_income {
            Some(ratio) => ratio <= self.threshold,
            None => false,
        };

        EligibilityAssessment {
            eligible,
            debt_to_income,
            threshold: self.threshold,
        }
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::standard()
    }
}
