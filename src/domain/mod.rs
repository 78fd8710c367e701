pub mod common;
pub mod customer;

pub use common::Displayable;
pub use customer::{Customer, CustomerProfile, Individual};
