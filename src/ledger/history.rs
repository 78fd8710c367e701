use serde::Serialize;

use super::entry::{EntryKind, LedgerEntry};

/// Append-only, chronologically ordered ledger entries of one account.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TransactionHistory {
    entries: Vec<LedgerEntry>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Read-only view in insertion order.
    pub fn all(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    pub fn withdrawal_count(&self) -> usize {
        self.count_of(EntryKind::Withdrawal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn append_preserves_insertion_order() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut history = TransactionHistory::new();
        history.append(LedgerEntry::new(EntryKind::Deposit, dec!(100), at));
        history.append(LedgerEntry::new(EntryKind::Withdrawal, dec!(30), at));
        history.append(LedgerEntry::new(EntryKind::Deposit, dec!(5), at));

        let kinds: Vec<EntryKind> = history.all().iter().map(|entry| entry.kind).collect();
        assert_eq!(
            kinds,
            vec![EntryKind::Deposit, EntryKind::Withdrawal, EntryKind::Deposit]
        );
        assert_eq!(history.withdrawal_count(), 1);
        assert_eq!(history.count_of(EntryKind::Deposit), 2);
    }
}
