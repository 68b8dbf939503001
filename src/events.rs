use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{AccountType, ApplicationId, HolderId};

/// all events that can be emitted by the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // account events
    AccountOpened {
        holder_id: HolderId,
        name: String,
        account_type: AccountType,
        timestamp: DateTime<Utc>,
    },
    DepositReceived {
        holder_id: HolderId,
        name: String,
        account_type: AccountType,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },
    WithdrawalCompleted {
        holder_id: HolderId,
        name: String,
        account_type: AccountType,
        amount: Money,
        new_balance: Money,
        timestamp: DateTime<Utc>,
    },

    // loan events
    LoanApproved {
        application_id: ApplicationId,
        holder_id: HolderId,
        name: String,
        amount: Money,
        debt_to_income: Rate,
        new_loan_balance: Money,
        timestamp: DateTime<Utc>,
    },
    LoanRejected {
        application_id: ApplicationId,
        holder_id: HolderId,
        name: String,
        amount: Money,
        debt_to_income: Option<Rate>,
        timestamp: DateTime<Utc>,
    },
    LoanRepaid {
        holder_id: HolderId,
        name: String,
        amount: Money,
        remaining_balance: Money,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
