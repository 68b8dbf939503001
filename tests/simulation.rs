use chrono::{TimeZone, Utc};
use retail_bank_rs::{
    AccountHolder, AccountType, ApplicationStatus, FinancialProfile, Ledger, LedgerReport, Money,
    SafeTimeProvider, TimeSource,
};

/// ledger pinned to a fixed instant so logged timestamps are deterministic
fn test_ledger() -> Ledger {
    let opening_day = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    Ledger::with_time(SafeTimeProvider::new(TimeSource::Test(opening_day)))
}

#[test]
fn end_to_end_scenario() {
    let mut ledger = test_ledger();
    let mut holder = AccountHolder::new(
        "Amara",
        30,
        "female",
        FinancialProfile::new(Money::from_major(100_000), Money::from_major(20_000)),
    );

    // open both account types
    ledger.open_account(&holder, AccountType::Checking).unwrap();
    ledger.open_account(&holder, AccountType::Savings).unwrap();

    // fund checking
    let balance = holder
        .deposit(&mut ledger, AccountType::Checking, Money::from_major(10_000))
        .unwrap();
    assert_eq!(balance, Money::from_major(10_000));

    // ratio 0.20 - approved, live balance tracks the requested amount
    let decision = holder.apply_for_loan(&mut ledger, Money::from_major(25_000));
    assert_eq!(decision.status, ApplicationStatus::Approved);
    assert_eq!(holder.loan_balance, Money::from_major(25_000));

    // partial repayment returns the amount paid
    let paid = holder.pay_back_loan(&mut ledger, Money::from_major(5_000));
    assert_eq!(paid, Money::from_major(5_000));
    assert_eq!(holder.loan_balance, Money::from_major(20_000));

    // withdrawal leaves the remainder
    let balance = holder
        .withdraw(&mut ledger, AccountType::Checking, Money::from_major(5_000))
        .unwrap();
    assert_eq!(balance, Money::from_major(5_000));
}

#[test]
fn three_customer_simulation_reports() {
    let mut ledger = test_ledger();

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

    for holder in [&amara, &ben, &chitra] {
        ledger.open_account(holder, AccountType::Checking).unwrap();
        ledger.open_account(holder, AccountType::Savings).unwrap();
    }
    assert_eq!(ledger.holder_count(AccountType::Checking), 3);
    assert_eq!(ledger.holder_count(AccountType::Savings), 3);

    let approved = amara.apply_for_loan(&mut ledger, Money::from_major(25_000));
    let rejected_ratio = ben.apply_for_loan(&mut ledger, Money::from_major(30_000));
    let rejected_emi = chitra.apply_for_loan(&mut ledger, Money::from_major(40_000));

    assert!(approved.is_approved());
    assert_eq!(rejected_ratio.status, ApplicationStatus::Rejected);
    assert_eq!(rejected_emi.status, ApplicationStatus::Rejected);

    // ranking contains only the approved loan
    let best = ledger.best_loans(5);
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].name, "Amara");
    assert_eq!(best[0].requested_amount, Money::from_major(25_000));

    // rejection profiles in application order, demographics only
    let profiles = ledger.rejected_applicant_profiles();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].name, "Ben");
    assert_eq!(profiles[1].name, "Chitra");
    assert_eq!(profiles[1].existing_loan_emi, Money::from_major(5_000));

    // summary report round-trips through json
    let report = LedgerReport::from_ledger(&ledger);
    assert_eq!(report.checking_holders, 3);
    assert_eq!(report.applications_received, 3);
    assert_eq!(report.loans_approved, 1);
    assert_eq!(report.loans_rejected, 2);
    assert_eq!(report.approved_volume, Money::from_major(25_000));

    let json = report.to_json_pretty().unwrap();
    let restored: LedgerReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}

#[test]
fn logged_timestamps_come_from_the_injected_clock() {
    let opening_day = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let mut ledger = Ledger::with_time(SafeTimeProvider::new(TimeSource::Test(opening_day)));

    let mut holder = AccountHolder::new(
        "Amara",
        30,
        "female",
        FinancialProfile::new(Money::from_major(100_000), Money::from_major(20_000)),
    );
    ledger.apply_for_loan(&mut holder, Money::from_major(1_000));

    assert_eq!(ledger.applications()[0].applied_at, opening_day);
}
