/// full simulation - the complete retail bank walk-through
///
/// Three customers open checking and savings accounts, fund them, apply for
/// loans, repay, withdraw, and the ledger reports at the end. All state is
/// built locally; each run starts fresh.
use retail_bank_rs::{
    AccountHolder, AccountType, FinancialProfile, Ledger, LedgerReport, Money,
    DEFAULT_RANKING_LIMIT,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== retail bank simulation ===\n");

    let mut ledger = Ledger::new();

    let mut amara = AccountHolder::new(
        "Amara",
        30,
        "female",
        FinancialProfile::new(Money::from_major(100_000), Money::from_major(20_000)),
    );
    let mut ben = AccountHolder::new(
        "Ben",
        25,
        "male",
        FinancialProfile::new(Money::from_major(40_000), Money::from_major(15_000)),
    );
    let mut chitra = AccountHolder::new(
        "Chitra",
        35,
        "female",
        FinancialProfile::new(Money::from_major(60_000), Money::from_major(25_000))
            .with_existing_emi(Money::from_major(5_000)),
    );

    // open checking and savings for everyone
    for holder in [&amara, &ben, &chitra] {
        ledger.open_account(holder, AccountType::Checking)?;
        ledger.open_account(holder, AccountType::Savings)?;
        println!("{} opened checking and savings accounts", holder.name);
    }

    // fund the accounts through the holder facade
    amara.deposit(&mut ledger, AccountType::Checking, Money::from_major(10_000))?;
    amara.deposit(&mut ledger, AccountType::Savings, Money::from_major(5_000))?;
    ben.deposit(&mut ledger, AccountType::Checking, Money::from_major(8_000))?;
    ben.deposit(&mut ledger, AccountType::Savings, Money::from_major(6_000))?;
    chitra.deposit(&mut ledger, AccountType::Checking, Money::from_major(12_000))?;
    chitra.deposit(&mut ledger, AccountType::Savings, Money::from_major(10_000))?;

    // loan applications
    for (holder, amount) in [
        (&mut amara, Money::from_major(25_000)),
        (&mut ben, Money::from_major(30_000)),
        (&mut chitra, Money::from_major(40_000)),
    ] {
        let decision = holder.apply_for_loan(&mut ledger, amount);
        println!("{} applied for ${}: {}", holder.name, amount, decision.status);
    }

    // partial repayment
    let paid = amara.pay_back_loan(&mut ledger, Money::from_major(5_000));
    println!("{} paid back ${} of the loan", amara.name, paid);

    // withdrawals
    amara.withdraw(&mut ledger, AccountType::Checking, Money::from_major(5_000))?;
    ben.withdraw(&mut ledger, AccountType::Savings, Money::from_major(4_000))?;
    chitra.withdraw(&mut ledger, AccountType::Checking, Money::from_major(10_000))?;

    println!(
        "\ncustomers with checking accounts: {}",
        ledger.holder_count(AccountType::Checking)
    );
    println!(
        "customers with savings accounts: {}",
        ledger.holder_count(AccountType::Savings)
    );

    println!("\nbest performing loans:");
    for application in ledger.best_loans(DEFAULT_RANKING_LIMIT) {
        println!(
            "  {} - ${} ({})",
            application.name, application.requested_amount, application.status
        );
    }

    println!("\nrejected applicant demographics:");
    for profile in ledger.rejected_applicant_profiles() {
        println!(
            "  {} ({}, {}) income ${}, expenses ${}, existing emi ${}",
            profile.name,
            profile.age,
            profile.gender,
            profile.income,
            profile.expenses,
            profile.existing_loan_emi
        );
    }

    println!("\nledger summary:");
    println!("{}", LedgerReport::from_ledger(&ledger).to_json_pretty()?);

    Ok(())
}
