use std::result::Result as StdResult;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ledger::AccountNumber;

/// Business-rule rejections raised by deposits and withdrawals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("Withdrawal of {requested} exceeds the per-withdrawal ceiling of {ceiling}")]
    WithdrawalCeilingExceeded { requested: Decimal, ceiling: Decimal },
    #[error("Maximum number of withdrawals ({limit}) reached")]
    WithdrawalLimitExceeded { limit: u32 },
    /// The resulting balance would not be representable.
    #[error("Amount {amount} cannot be applied to a balance of {balance}")]
    BalanceOverflow { balance: Decimal, amount: Decimal },
}

/// Lookup and registration failures owned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Customer already registered: {0}")]
    CustomerAlreadyRegistered(String),
    #[error("Account {0} already exists")]
    DuplicateAccount(AccountNumber),
    #[error("Account {account} does not belong to this customer")]
    AccountNotOwned { account: AccountNumber },
}

/// Persistence failures for the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Unified error type for the core and directory layers.
#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = StdResult<T, BankError>;

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}
