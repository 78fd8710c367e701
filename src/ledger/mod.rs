//! Account, transaction history, and the operations that move balances.

pub mod account;
pub mod entry;
pub mod history;
pub mod statement;
pub mod transaction;

pub use account::{Account, AccountNumber, CheckingLimits, WithdrawalPolicy, DEFAULT_BRANCH};
pub use entry::{EntryKind, LedgerEntry};
pub use history::TransactionHistory;
pub use statement::Statement;
pub use transaction::Transaction;
