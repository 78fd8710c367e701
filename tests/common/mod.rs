#![allow(dead_code)]

use bank_core::{AccountNumber, CheckingLimits, Customer, Directory, FixedClock};
use chrono::{NaiveDate, TimeZone, Utc};

pub const TAX_ID: &str = "12345678900";

pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 4, 15, 10, 0, 0).unwrap())
}

pub fn sample_customer(tax_id: &str) -> Customer {
    Customer::individual(
        "Ana Souza",
        NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
        tax_id,
        "Rua A, 10 - Centro - Recife/PE",
    )
}

/// Directory with one registered customer owning one checking account.
pub fn directory_with_account(limits: CheckingLimits) -> (Directory, AccountNumber) {
    let mut directory = Directory::new("0001", limits).with_clock(Box::new(fixed_clock()));
    directory
        .register_customer(sample_customer(TAX_ID))
        .expect("register customer");
    let number = directory
        .open_checking_account(TAX_ID)
        .expect("open checking account");
    (directory, number)
}
