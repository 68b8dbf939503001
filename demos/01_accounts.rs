/// account operations - deposits, withdrawals, and the failure notices
use retail_bank_rs::{AccountHolder, AccountType, FinancialProfile, Ledger, Money};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== account operations example ===\n");

    let mut ledger = Ledger::new();

    let profile = FinancialProfile::new(Money::from_major(50_000), Money::from_major(12_000));
    let mut holder = AccountHolder::new("Ben", 27, "male", profile);

    // operations against an unopened account are refused with a notice
    if let Err(notice) = ledger.deposit(&mut holder, AccountType::Savings, Money::from_major(500)) {
        println!("notice: {}", notice);
    }

    ledger.open_account(&holder, AccountType::Savings)?;
    println!("savings account opened for {}", holder.name);

    let balance = ledger.deposit(&mut holder, AccountType::Savings, Money::from_major(6_000))?;
    println!("deposited $6000, balance: ${}", balance);

    // overdrawing is refused, balance untouched
    if let Err(notice) = ledger.withdraw(&mut holder, AccountType::Savings, Money::from_major(9_000)) {
        println!("notice: {}", notice);
    }

    let balance = ledger.withdraw(&mut holder, AccountType::Savings, Money::from_major(4_000))?;
    println!("withdrew $4000, balance: ${}", balance);

    println!(
        "\nsavings holders registered: {}",
        ledger.holder_count(AccountType::Savings)
    );

    Ok(())
}
