use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::time::Clock;
use crate::domain::common::Displayable;
use crate::errors::{BankError, DirectoryError};
use crate::ledger::{Account, AccountNumber, LedgerEntry, Transaction};

/// A bank customer and the accounts it owns.
///
/// `id` and `accounts` back the ownership check; they are only set by the
/// constructors and `add_account`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Customer {
    id: Uuid,
    pub address: String,
    pub profile: CustomerProfile,
    accounts: Vec<AccountNumber>,
}

/// Identity details that depend on the kind of customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CustomerProfile {
    Individual(Individual),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Individual {
    pub name: String,
    pub birth_date: NaiveDate,
    /// Unique across the directory; used as the lookup key.
    pub tax_id: String,
}

impl Customer {
    pub fn new(address: impl Into<String>, profile: CustomerProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            address: address.into(),
            profile,
            accounts: Vec::new(),
        }
    }

    /// Creates an individual customer.
    pub fn individual(
        name: impl Into<String>,
        birth_date: NaiveDate,
        tax_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self::new(
            address,
            CustomerProfile::Individual(Individual {
                name: name.into(),
                birth_date,
                tax_id: tax_id.into(),
            }),
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tax_id(&self) -> &str {
        match &self.profile {
            CustomerProfile::Individual(person) => &person.tax_id,
        }
    }

    pub fn display_name(&self) -> &str {
        match &self.profile {
            CustomerProfile::Individual(person) => &person.name,
        }
    }

    /// Owned account numbers in the order they were opened.
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    pub fn owns(&self, account: &Account) -> bool {
        account.owner() == self.id && self.accounts.contains(&account.number())
    }

    /// Registers `transaction` against one of this customer's accounts.
    pub fn execute(
        &self,
        account: &mut Account,
        transaction: &Transaction,
        clock: &dyn Clock,
    ) -> Result<LedgerEntry, BankError> {
        if !self.owns(account) {
            return Err(DirectoryError::AccountNotOwned {
                account: account.number(),
            }
            .into());
        }
        Ok(transaction.register(account, clock)?)
    }
}

impl Displayable for Customer {
    fn display_label(&self) -> String {
        format!("{} ({})", self.display_name(), self.tax_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time::SystemClock;
    use crate::ledger::DEFAULT_BRANCH;
    use rust_decimal_macros::dec;

    fn customer(name: &str, tax_id: &str) -> Customer {
        Customer::individual(
            name,
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            tax_id,
            "Rua C, 3",
        )
    }

    #[test]
    fn execute_runs_transaction_on_owned_account() {
        let mut owner = customer("Carla", "111");
        let mut account = Account::open(AccountNumber(1), &owner, DEFAULT_BRANCH);
        owner.add_account(account.number());

        let entry = owner
            .execute(&mut account, &Transaction::Deposit(dec!(80)), &SystemClock)
            .expect("owner may deposit");
        assert_eq!(entry.amount, dec!(80));
        assert_eq!(account.balance(), dec!(80));
    }

    #[test]
    fn execute_rejects_foreign_account() {
        let mut owner = customer("Carla", "111");
        let stranger = customer("Davi", "222");
        let mut account = Account::open(AccountNumber(1), &owner, DEFAULT_BRANCH);
        owner.add_account(account.number());

        let err = stranger
            .execute(&mut account, &Transaction::Deposit(dec!(80)), &SystemClock)
            .unwrap_err();
        assert!(matches!(
            err,
            BankError::Directory(DirectoryError::AccountNotOwned { account }) if account == AccountNumber(1)
        ));
        assert!(account.history().is_empty());
    }

    #[test]
    fn clone_keeps_identity_and_fresh_customer_does_not() {
        let original = customer("Carla", "111");
        assert_eq!(original.clone().id(), original.id());
        assert_ne!(customer("Carla", "111").id(), original.id());
    }

    #[test]
    fn display_label_includes_tax_id() {
        assert_eq!(customer("Carla", "111").display_label(), "Carla (111)");
    }
}
