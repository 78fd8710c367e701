use std::{env, io, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::cli::formatting::{format_amount, render_statement};
use crate::cli::io::{InteractivePrompter, Prompter, ScriptPrompter};
use crate::cli::output;
use crate::config::{BankConfig, ConfigManager};
use crate::core::Directory;
use crate::domain::{Customer, Displayable};
use crate::errors::BankError;
use crate::ledger::{EntryKind, Transaction};

const SCRIPT_ENV: &str = "BANK_CORE_CLI_SCRIPT";
const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Failures that stop the menu loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BankError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Deposit,
    Withdraw,
    Statement,
    RegisterCustomer,
    OpenAccount,
    Exit,
}

const MENU: [(MenuAction, &str); 6] = [
    (MenuAction::Deposit, "Deposit"),
    (MenuAction::Withdraw, "Withdraw"),
    (MenuAction::Statement, "Statement"),
    (MenuAction::RegisterCustomer, "Register customer"),
    (MenuAction::OpenAccount, "Open checking account"),
    (MenuAction::Exit, "Exit"),
];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config = ConfigManager::from_env().load().map_err(BankError::from)?;
    let mut context = ShellContext::new(config);

    match mode {
        CliMode::Interactive => context.run(&mut InteractivePrompter::new()),
        CliMode::Script => {
            output::set_color_enabled(false);
            let stdin = io::stdin();
            context.run(&mut ScriptPrompter::new(stdin.lock()))
        }
    }
}

/// State carried across menu iterations.
pub struct ShellContext {
    directory: Directory,
    config: BankConfig,
}

impl ShellContext {
    pub fn new(config: BankConfig) -> Self {
        Self {
            directory: Directory::from_config(&config),
            config,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Runs the menu until the user exits or the prompter runs dry.
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let labels: Vec<&str> = MENU.iter().map(|(_, label)| *label).collect();
        while let Some(choice) = prompter.select("Choose an option", &labels)? {
            match MENU.get(choice).map(|(action, _)| *action) {
                Some(MenuAction::Deposit) => self.transact(prompter, EntryKind::Deposit)?,
                Some(MenuAction::Withdraw) => self.transact(prompter, EntryKind::Withdrawal)?,
                Some(MenuAction::Statement) => self.statement(prompter)?,
                Some(MenuAction::RegisterCustomer) => self.register_customer(prompter)?,
                Some(MenuAction::OpenAccount) => self.open_account(prompter)?,
                Some(MenuAction::Exit) => break,
                None => output::warning("Invalid option, please select again."),
            }
        }
        output::info("Goodbye.");
        Ok(())
    }

    fn transact(&mut self, prompter: &mut dyn Prompter, kind: EntryKind) -> Result<(), CliError> {
        let Some(tax_id) = prompter.text("Customer tax ID")? else {
            return Ok(());
        };
        if let Err(err) = self.directory.customer(&tax_id) {
            output::error(err);
            return Ok(());
        }

        let prompt = format!("{} amount", kind.label());
        let Some(raw) = prompter.text(&prompt)? else {
            return Ok(());
        };
        let amount = match parse_amount(&raw) {
            Some(amount) => amount,
            None => {
                output::error(format!("`{}` is not a valid amount.", raw));
                return Ok(());
            }
        };

        let transaction = match kind {
            EntryKind::Deposit => Transaction::Deposit(amount),
            EntryKind::Withdrawal => Transaction::Withdrawal(amount),
        };
        match self.directory.execute(&tax_id, &transaction) {
            Ok(entry) => output::success(format!(
                "{} of {} completed.",
                entry.kind,
                format_amount(&self.config.currency_symbol, entry.amount)
            )),
            Err(err) => output::error(format!("Operation not completed. {}", err)),
        }
        Ok(())
    }

    fn statement(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let Some(tax_id) = prompter.text("Customer tax ID")? else {
            return Ok(());
        };
        match self.directory.statement(&tax_id) {
            Ok(statement) => {
                output::section("STATEMENT");
                output::plain(render_statement(&statement, &self.config.currency_symbol));
            }
            Err(err) => output::error(err),
        }
        Ok(())
    }

    fn register_customer(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let Some(tax_id) = prompter.text("Tax ID (digits only)")? else {
            return Ok(());
        };
        if self.directory.customer(&tax_id).is_ok() {
            output::warning("Customer already registered.");
            return Ok(());
        }
        let Some(name) = prompter.text("Full name")? else {
            return Ok(());
        };
        let Some(raw_birth_date) = prompter.text("Birth date (dd/mm/yyyy)")? else {
            return Ok(());
        };
        let birth_date = match NaiveDate::parse_from_str(&raw_birth_date, BIRTH_DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                output::error(format!("`{}` is not a valid birth date.", raw_birth_date));
                return Ok(());
            }
        };
        let Some(address) = prompter.text("Address (street, number - district - city/state)")?
        else {
            return Ok(());
        };

        let customer = Customer::individual(name, birth_date, tax_id, address);
        match self.directory.register_customer(customer) {
            Ok(_) => output::success("Customer registered."),
            Err(err) => output::error(err),
        }
        Ok(())
    }

    fn open_account(&mut self, prompter: &mut dyn Prompter) -> Result<(), CliError> {
        let Some(tax_id) = prompter.text("Customer tax ID")? else {
            return Ok(());
        };
        let opened = self
            .directory
            .open_checking_account(&tax_id)
            .and_then(|number| self.directory.account(number));
        match opened {
            Ok(account) => {
                output::success(format!("Checking account opened: {}", account.display_label()));
                if let Ok(customer) = self.directory.customer(&tax_id) {
                    output::info(format!("Holder: {}", customer.display_label()));
                }
            }
            Err(err) => output::error(format!("Account not opened. {}", err)),
        }
        Ok(())
    }
}

/// Parses a user-entered amount, accepting a decimal comma.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.trim().replace(',', ".")).ok()
}
