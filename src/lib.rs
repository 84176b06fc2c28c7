//! An in-memory bank.
//!
//! The core lives in [`bank`]: a [`bank::ledger::Ledger`] of accounts, routing
//! deposits, withdrawals, transfers and closures by account number.
//! The other modules replay a CSV script of operations against a ledger and
//! write out the resulting accounts.

pub mod bank;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod process;
pub mod report;
pub mod run;
