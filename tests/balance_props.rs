mod common;

use bank_core::{CheckingLimits, EntryKind, Transaction};
use common::{directory_with_account, TAX_ID};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    let amount = (-200i64..2_000i64).prop_map(|cents| Decimal::new(cents, 2));
    (any::<bool>(), amount).prop_map(|(deposit, amount)| {
        if deposit {
            Transaction::Deposit(amount)
        } else {
            Transaction::Withdrawal(amount)
        }
    })
}

proptest! {
    #[test]
    fn balance_equals_recorded_deposits_minus_withdrawals(
        transactions in prop::collection::vec(transaction_strategy(), 0..40),
        ceiling in 1i64..30,
        max_withdrawals in 0u32..6,
    ) {
        let limits = CheckingLimits {
            withdrawal_ceiling: Decimal::from(ceiling),
            max_withdrawals,
        };
        let (mut directory, number) = directory_with_account(limits);

        let mut succeeded = 0usize;
        for transaction in &transactions {
            let before = directory.account(number).unwrap().balance();
            match directory.execute(TAX_ID, transaction) {
                Ok(_) => succeeded += 1,
                Err(_) => {
                    prop_assert_eq!(directory.account(number).unwrap().balance(), before);
                }
            }
            prop_assert!(directory.account(number).unwrap().balance() >= Decimal::ZERO);
        }

        let account = directory.account(number).unwrap();
        let history = account.history();
        let deposits: Decimal = history
            .all()
            .iter()
            .filter(|entry| entry.kind == EntryKind::Deposit)
            .map(|entry| entry.amount)
            .sum();
        let withdrawals: Decimal = history
            .all()
            .iter()
            .filter(|entry| entry.kind == EntryKind::Withdrawal)
            .map(|entry| entry.amount)
            .sum();

        prop_assert_eq!(account.balance(), deposits - withdrawals);
        prop_assert_eq!(history.len(), succeeded);
        prop_assert!(history.withdrawal_count() <= max_withdrawals as usize);
        prop_assert!(history.all().iter().all(|entry| entry.amount > Decimal::ZERO));
    }
}
