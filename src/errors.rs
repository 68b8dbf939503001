use thiserror::Error;

use crate::decimal::Money;
use crate::types::AccountType;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("{name} does not have a {account_type} account")]
    HolderNotFound {
        name: String,
        account_type: AccountType,
    },

    #[error("insufficient balance in {name}'s {account_type} account: available {available}, requested {requested}")]
    InsufficientFunds {
        name: String,
        account_type: AccountType,
        available: Money,
        requested: Money,
    },

    #[error("{name} already has a {account_type} account")]
    AccountAlreadyOpen {
        name: String,
        account_type: AccountType,
    },
}

pub type Result<T> = std::result::Result<T, BankError>;
