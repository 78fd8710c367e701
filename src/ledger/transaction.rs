//! Deposit and withdrawal requests and the gate that records them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::time::Clock;
use crate::errors::OperationError;

use super::account::Account;
use super::entry::{EntryKind, LedgerEntry};

/// A requested operation carrying its amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Transaction::Deposit(amount) | Transaction::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Transaction::Deposit(_) => EntryKind::Deposit,
            Transaction::Withdrawal(_) => EntryKind::Withdrawal,
        }
    }

    /// Applies the operation to `account` and, only on success, appends a
    /// ledger entry stamped with `clock.now()`.
    pub fn register(
        &self,
        account: &mut Account,
        clock: &dyn Clock,
    ) -> Result<LedgerEntry, OperationError> {
        let outcome = match self {
            Transaction::Deposit(amount) => account.deposit(*amount),
            Transaction::Withdrawal(amount) => account.withdraw(*amount),
        };
        if let Err(err) = outcome {
            tracing::info!(
                account = %account.number(),
                kind = %self.kind(),
                amount = %self.amount(),
                reason = %err,
                "operation rejected"
            );
            return Err(err);
        }

        let entry = LedgerEntry::new(self.kind(), self.amount(), clock.now());
        account.record(entry.clone());
        tracing::debug!(
            account = %account.number(),
            kind = %entry.kind,
            amount = %entry.amount,
            balance = %account.balance(),
            "operation recorded"
        );
        Ok(entry)
    }
}
