/// loan decisions - debt-to-income evaluation, ranking, and rejection profiles
use retail_bank_rs::{
    AccountHolder, FinancialProfile, Ledger, Money, DEFAULT_RANKING_LIMIT,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== loan decisions example ===\n");

    let mut ledger = Ledger::new();

    // ratio 0.20 - comfortably eligible
    let mut amara = AccountHolder::new(
        "Amara",
        30,
        "female",
        FinancialProfile::new(Money::from_major(100_000), Money::from_major(20_000)),
    );

    // ratio 0.375 - above the 0.36 threshold
    let mut ben = AccountHolder::new(
        "Ben",
        25,
        "male",
        FinancialProfile::new(Money::from_major(40_000), Money::from_major(15_000)),
    );

    // ratio 0.50 once the existing installment is counted
    let mut chitra = AccountHolder::new(
        "Chitra",
        35,
        "female",
        FinancialProfile::new(Money::from_major(60_000), Money::from_major(25_000))
            .with_existing_emi(Money::from_major(5_000)),
    );

    for (holder, amount) in [
        (&mut amara, Money::from_major(25_000)),
        (&mut ben, Money::from_major(30_000)),
        (&mut chitra, Money::from_major(40_000)),
    ] {
        let decision = ledger.apply_for_loan(holder, amount);
        match decision.debt_to_income {
            Some(ratio) => println!(
                "{}: requested ${}, ratio {}, {}",
                holder.name, amount, ratio, decision.status
            ),
            None => println!("{}: requested ${}, no income, {}", holder.name, amount, decision.status),
        }
    }

    println!("\nbest performing loans:");
    for application in ledger.best_loans(DEFAULT_RANKING_LIMIT) {
        println!("  {} - ${}", application.name, application.requested_amount);
    }

    println!("\nrejected applicant demographics:");
    for profile in ledger.rejected_applicant_profiles() {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    }

    Ok(())
}
