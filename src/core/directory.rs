//! Registry of customers and accounts used by the interaction layer.

use uuid::Uuid;

use crate::config::BankConfig;
use crate::core::time::{Clock, SystemClock};
use crate::domain::Customer;
use crate::errors::{BankError, DirectoryError};
use crate::ledger::{
    Account, AccountNumber, CheckingLimits, LedgerEntry, Statement, Transaction, DEFAULT_BRANCH,
};

/// Owns every customer and account for the lifetime of the process.
pub struct Directory {
    branch: String,
    checking_limits: CheckingLimits,
    customers: Vec<Customer>,
    accounts: Vec<Account>,
    clock: Box<dyn Clock>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH, CheckingLimits::default())
    }
}

impl Directory {
    pub fn new(branch: impl Into<String>, checking_limits: CheckingLimits) -> Self {
        Self {
            branch: branch.into(),
            checking_limits,
            customers: Vec::new(),
            accounts: Vec::new(),
            clock: Box::new(SystemClock),
        }
    }

    pub fn from_config(config: &BankConfig) -> Self {
        Self::new(config.branch_code.clone(), config.checking)
    }

    /// Replaces the clock used to timestamp ledger entries.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Adds a customer, rejecting a tax identifier that is already taken.
    pub fn register_customer(&mut self, customer: Customer) -> Result<Uuid, DirectoryError> {
        if self.find_customer(customer.tax_id()).is_some() {
            return Err(DirectoryError::CustomerAlreadyRegistered(
                customer.tax_id().to_string(),
            ));
        }
        let id = customer.id();
        tracing::info!(customer = %id, "customer registered");
        self.customers.push(customer);
        Ok(id)
    }

    pub fn customer(&self, tax_id: &str) -> Result<&Customer, DirectoryError> {
        self.find_customer(tax_id)
            .map(|index| &self.customers[index])
            .ok_or_else(|| DirectoryError::CustomerNotFound(tax_id.to_string()))
    }

    pub fn account(&self, number: AccountNumber) -> Result<&Account, DirectoryError> {
        self.accounts
            .iter()
            .find(|account| account.number() == number)
            .ok_or_else(|| DirectoryError::AccountNotFound(number.to_string()))
    }

    /// Opens a checking account for the customer with `tax_id`, numbering it
    /// after the highest number in use.
    pub fn open_checking_account(&mut self, tax_id: &str) -> Result<AccountNumber, DirectoryError> {
        let index = self
            .find_customer(tax_id)
            .ok_or_else(|| DirectoryError::CustomerNotFound(tax_id.to_string()))?;
        let number = self.next_account_number();
        let account = Account::open_checking(
            number,
            &self.customers[index],
            self.branch.clone(),
            self.checking_limits,
        );
        self.attach(index, account);
        Ok(number)
    }

    /// Adds an externally built account and links it to its owner.
    pub fn add_account(&mut self, account: Account) -> Result<AccountNumber, DirectoryError> {
        let number = account.number();
        if self.account(number).is_ok() {
            return Err(DirectoryError::DuplicateAccount(number));
        }
        let index = self
            .customers
            .iter()
            .position(|customer| customer.id() == account.owner())
            .ok_or_else(|| DirectoryError::CustomerNotFound(account.owner().to_string()))?;
        self.attach(index, account);
        Ok(number)
    }

    /// Resolves the account used for every operation of a customer.
    ///
    /// Always the first account the customer opened; customers with several
    /// accounts cannot pick another one.
    pub fn primary_account(&self, tax_id: &str) -> Result<&Account, DirectoryError> {
        let customer = self.customer(tax_id)?;
        let number = Self::first_account_of(customer)?;
        self.account(number)
    }

    /// Runs `transaction` against the customer's primary account.
    pub fn execute(
        &mut self,
        tax_id: &str,
        transaction: &Transaction,
    ) -> Result<LedgerEntry, BankError> {
        let index = self
            .find_customer(tax_id)
            .ok_or_else(|| DirectoryError::CustomerNotFound(tax_id.to_string()))?;
        let customer = &self.customers[index];
        let number = Self::first_account_of(customer)?;
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number() == number)
            .ok_or_else(|| DirectoryError::AccountNotFound(number.to_string()))?;
        customer.execute(account, transaction, self.clock.as_ref())
    }

    /// Captures the primary account's entries and balance.
    pub fn statement(&self, tax_id: &str) -> Result<Statement, DirectoryError> {
        let customer = self.customer(tax_id)?;
        let account = self.primary_account(tax_id)?;
        Ok(Statement::capture(account, customer))
    }

    fn find_customer(&self, tax_id: &str) -> Option<usize> {
        self.customers
            .iter()
            .position(|customer| customer.tax_id() == tax_id)
    }

    fn first_account_of(customer: &Customer) -> Result<AccountNumber, DirectoryError> {
        customer.accounts().first().copied().ok_or_else(|| {
            DirectoryError::AccountNotFound(format!(
                "customer {} has no account",
                customer.tax_id()
            ))
        })
    }

    fn next_account_number(&self) -> AccountNumber {
        let highest = self
            .accounts
            .iter()
            .map(|account| account.number().0)
            .max()
            .unwrap_or(0);
        AccountNumber(highest + 1)
    }

    fn attach(&mut self, owner_index: usize, account: Account) {
        let number = account.number();
        self.customers[owner_index].add_account(number);
        tracing::info!(
            account = %number,
            branch = %account.branch(),
            checking = account.is_checking(),
            "account opened"
        );
        self.accounts.push(account);
    }
}
