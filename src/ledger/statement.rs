use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Customer;

use super::account::{Account, AccountNumber};
use super::entry::LedgerEntry;

/// Point-in-time view of an account for statement rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statement {
    pub branch: String,
    pub account_number: AccountNumber,
    pub holder: String,
    pub entries: Vec<LedgerEntry>,
    pub balance: Decimal,
}

impl Statement {
    pub fn capture(account: &Account, holder: &Customer) -> Self {
        Self {
            branch: account.branch().to_string(),
            account_number: account.number(),
            holder: holder.display_name().to_string(),
            entries: account.history().all().to_vec(),
            balance: account.balance(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the signed entry amounts; equals `balance` for any account.
    pub fn net_movement(&self) -> Decimal {
        self.entries.iter().map(LedgerEntry::signed_amount).sum()
    }
}
