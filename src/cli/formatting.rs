use rust_decimal::Decimal;

use crate::ledger::Statement;

const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{} {:.2}", symbol, amount)
}

/// Renders a statement as printable lines, oldest entry first.
pub fn render_statement(statement: &Statement, symbol: &str) -> String {
    let mut lines = vec![format!(
        "Branch: {}  Account: {}  Holder: {}",
        statement.branch, statement.account_number, statement.holder
    )];
    lines.push(String::new());

    if statement.is_empty() {
        lines.push("No transactions recorded.".to_string());
    } else {
        for entry in &statement.entries {
            lines.push(format!(
                "{}  {:<10} {}",
                entry.recorded_at.format(DATE_FORMAT),
                entry.kind.label(),
                format_amount(symbol, entry.amount)
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("Balance: {}", format_amount(symbol, statement.balance)));
    lines.join("\n")
}
