use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Customer, Displayable};
use crate::errors::OperationError;

use super::entry::LedgerEntry;
use super::history::TransactionHistory;

pub const DEFAULT_BRANCH: &str = "0001";

/// Account identifier, unique within a directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumber(pub u32);

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Withdrawal limits applied to checking accounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckingLimits {
    pub withdrawal_ceiling: Decimal,
    /// Cap on successful withdrawals over the whole account history.
    pub max_withdrawals: u32,
}

impl Default for CheckingLimits {
    fn default() -> Self {
        Self {
            withdrawal_ceiling: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

/// Rule set used when a withdrawal is requested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WithdrawalPolicy {
    /// Only the balance and amount checks apply.
    #[default]
    Standard,
    /// Ceiling and count checks run before the standard checks.
    Checking(CheckingLimits),
}

/// A customer account holding a balance and its transaction history.
///
/// The balance is private: it only moves through `deposit`/`withdraw`, which
/// are reachable from [`Transaction::register`](super::Transaction::register).
/// Not deserializable: accounts only come from `open` and `open_checking`.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    balance: Decimal,
    owner: Uuid,
    policy: WithdrawalPolicy,
    history: TransactionHistory,
}

impl Account {
    /// Opens a standard account with a zero balance for `owner`.
    pub fn open(number: AccountNumber, owner: &Customer, branch: impl Into<String>) -> Self {
        Self::with_policy(number, owner, branch, WithdrawalPolicy::Standard)
    }

    /// Opens a checking account governed by `limits`.
    pub fn open_checking(
        number: AccountNumber,
        owner: &Customer,
        branch: impl Into<String>,
        limits: CheckingLimits,
    ) -> Self {
        Self::with_policy(number, owner, branch, WithdrawalPolicy::Checking(limits))
    }

    fn with_policy(
        number: AccountNumber,
        owner: &Customer,
        branch: impl Into<String>,
        policy: WithdrawalPolicy,
    ) -> Self {
        Self {
            number,
            branch: branch.into(),
            balance: Decimal::ZERO,
            owner: owner.id(),
            policy,
            history: TransactionHistory::new(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Identifier of the owning customer.
    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.policy, WithdrawalPolicy::Checking(_))
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    pub(crate) fn deposit(&mut self, amount: Decimal) -> Result<(), OperationError> {
        if amount <= Decimal::ZERO {
            return Err(OperationError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(OperationError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }

    pub(crate) fn withdraw(&mut self, amount: Decimal) -> Result<(), OperationError> {
        if let WithdrawalPolicy::Checking(limits) = self.policy {
            if amount > limits.withdrawal_ceiling {
                return Err(OperationError::WithdrawalCeilingExceeded {
                    requested: amount,
                    ceiling: limits.withdrawal_ceiling,
                });
            }
            if self.history.withdrawal_count() >= limits.max_withdrawals as usize {
                return Err(OperationError::WithdrawalLimitExceeded {
                    limit: limits.max_withdrawals,
                });
            }
        }
        self.debit(amount)
    }

    fn debit(&mut self, amount: Decimal) -> Result<(), OperationError> {
        if amount > self.balance {
            return Err(OperationError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        if amount <= Decimal::ZERO {
            return Err(OperationError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(OperationError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        Ok(())
    }

    pub(crate) fn record(&mut self, entry: LedgerEntry) {
        self.history.append(entry);
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        let kind = if self.is_checking() { "C/C" } else { "Acct" };
        format!("Branch {} / {} {}", self.branch, kind, self.number)
    }
}
