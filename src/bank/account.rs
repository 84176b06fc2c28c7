#[allow(clippy::module_inception)]
pub mod account;
mod close;
mod deposit;
mod display;
mod withdrawal;

pub use account::{Account, AccountType};
