#![doc(test(attr(deny(warnings))))]

//! Bank Core models a minimal retail-banking ledger: customers own accounts,
//! accounts accept deposits and withdrawals, and every successful operation is
//! appended to the account's transaction history.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use crate::core::{Clock, Directory, FixedClock, SystemClock};
pub use crate::domain::{Customer, CustomerProfile, Individual};
pub use crate::errors::{BankError, DirectoryError, OperationError};
pub use crate::ledger::{
    Account, AccountNumber, CheckingLimits, EntryKind, LedgerEntry, Statement, Transaction,
    TransactionHistory, WithdrawalPolicy,
};

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
