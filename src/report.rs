use crate::bank::{error::BankError, outcome::Outcome};
use crate::input::{Error, Operation};
use crate::process::Applied;

use std::sync::mpsc::Receiver;

// Every result ends up in the logs: successes at info, rejected operations at
// warn, unreadable rows at error. A rejected operation is an ordinary outcome
// of a session; an unreadable row means the script itself needs fixing.
pub fn log(
    input_errors: Receiver<Error>,
    applied: Receiver<Applied>,
) -> Vec<std::thread::JoinHandle<()>> {
    vec![
        std::thread::spawn(move || {
            for err in input_errors {
                input_error(&err);
            }
        }),
        std::thread::spawn(move || {
            for (operation, result) in applied {
                applied_operation(&operation, &result);
            }
        }),
    ]
}

fn input_error(err: &Error) {
    tracing::error!(error = ?err, "failed to read operation");
}

fn applied_operation(operation: &Operation, result: &Result<Outcome, BankError>) {
    match result {
        Ok(outcome) => tracing::info!(?operation, "{}", outcome),
        Err(err) => tracing::warn!(?operation, "{}", err),
    }
}
