/// quick start - minimal example to get started
use retail_bank_rs::{AccountHolder, AccountType, FinancialProfile, Ledger, LedgerReport, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ledger = Ledger::new();

    // a customer earning $100,000 with $20,000 recurring expenses
    let profile = FinancialProfile::new(Money::from_major(100_000), Money::from_major(20_000));
    let mut holder = AccountHolder::new("Amara", 30, "female", profile);

    // open an account and fund it
    ledger.open_account(&holder, AccountType::Checking)?;
    ledger.deposit(&mut holder, AccountType::Checking, Money::from_major(10_000))?;

    // apply for a loan
    let decision = ledger.apply_for_loan(&mut holder, Money::from_major(25_000));
    println!("loan {}: balance now {}", decision.status, decision.loan_balance);

    // print the summary report
    println!("{}", LedgerReport::from_ledger(&ledger).to_json_pretty()?);

    Ok(())
}
