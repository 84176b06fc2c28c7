use crate::bank::{account::Account, error::BankError, ledger::Ledger, outcome::Outcome};
use crate::input::Operation;

use std::sync::mpsc::{self, Receiver, Sender};

/// The result of applying one operation, along with the operation itself.
pub type Applied = (Operation, Result<Outcome, BankError>);

/// Replay a stream of operations against a fresh ledger.
///
/// The ledger is owned by a single thread for its whole life, so no locking
/// is needed. Results are streamed as they happen; once every operation has
/// been applied, the remaining accounts are sent, sorted by account number.
pub fn process(
    operations: Receiver<Operation>,
    accounts_tx: Sender<Account>,
) -> Receiver<Applied> {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let mut ledger = Ledger::new();

        for operation in operations {
            let result = apply(&mut ledger, &operation);
            tx.send((operation, result)).unwrap(); // Would only fail if the rx is disconnected, which should not happen here.
        }

        // We can only start sending accounts once we have processed all the operations.
        for account in ledger.into_accounts() {
            accounts_tx.send(account).unwrap(); // Would only fail if the rx is disconnected, which should not happen here.
        }
    });

    rx
}

pub fn apply(ledger: &mut Ledger, operation: &Operation) -> Result<Outcome, BankError> {
    match operation {
        Operation::Open {
            account,
            holder,
            account_type,
            opening_balance,
            overdraft_limit,
        } => ledger
            .create_account(
                account.as_str(),
                holder.as_str(),
                *account_type,
                *opening_balance,
                *overdraft_limit,
            )
            .map(|_| Outcome::Created),
        Operation::Deposit { account, amount } => ledger
            .deposit(account, *amount)
            .map(|tx| Outcome::Deposited(tx.amount())),
        Operation::Withdraw { account, amount } => ledger
            .withdraw(account, *amount)
            .map(|tx| Outcome::Withdrew(tx.amount())),
        Operation::Transfer { from, to, amount } => ledger
            .transfer_funds(from, to, *amount)
            .map(|_| Outcome::Transferred),
        Operation::Balance { account } => {
            ledger
                .check_balance(account)
                .map(|balance| Outcome::Balance {
                    account: account.clone(),
                    balance,
                })
        }
        Operation::History { account } => ledger
            .display_transaction_history(account)
            .map(Outcome::Report),
        Operation::Info { account } => ledger.display_account_info(account).map(Outcome::Report),
        Operation::Close { account } => ledger.close_account(account).map(|_| Outcome::Closed),
    }
}

#[cfg(test)]
mod tests {
    use super::{apply, process};
    use crate::bank::{account::AccountType, error::BankError, ledger::Ledger, outcome::Outcome};
    use crate::input::Operation;

    use rust_decimal_macros::dec;
    use std::sync::mpsc;

    fn open(account: &str, account_type: AccountType) -> Operation {
        Operation::Open {
            account: account.to_string(),
            holder: "John Doe".to_string(),
            account_type,
            opening_balance: dec!(1000),
            overdraft_limit: dec!(0),
        }
    }

    #[test]
    fn test_apply() {
        let mut ledger = Ledger::new();

        for (operation, want) in vec![
            (open("100000", AccountType::Savings), Ok(Outcome::Created)),
            (
                open("100000", AccountType::Savings),
                Err(BankError::DuplicateAccount("100000".to_string())),
            ),
            (
                Operation::Deposit {
                    account: "100000".to_string(),
                    amount: dec!(500),
                },
                Ok(Outcome::Deposited(dec!(500))),
            ),
            (
                Operation::Withdraw {
                    account: "100000".to_string(),
                    amount: dec!(2000),
                },
                Err(BankError::InsufficientBalance),
            ),
            (
                Operation::Balance {
                    account: "100000".to_string(),
                },
                Ok(Outcome::Balance {
                    account: "100000".to_string(),
                    balance: dec!(1500),
                }),
            ),
            (
                Operation::Transfer {
                    from: "100000".to_string(),
                    to: "nope".to_string(),
                    amount: dec!(1),
                },
                Err(BankError::TransferFailed(Box::new(
                    BankError::AccountNotFound,
                ))),
            ),
            (
                Operation::Close {
                    account: "100000".to_string(),
                },
                Ok(Outcome::Closed),
            ),
            (
                Operation::Info {
                    account: "100000".to_string(),
                },
                Err(BankError::AccountNotFound),
            ),
        ] {
            assert_eq!(want, apply(&mut ledger, &operation), "{:?}", operation);
        }
    }

    #[test]
    fn test_apply_history() {
        let mut ledger = Ledger::new();
        apply(&mut ledger, &open("100000", AccountType::Checking)).unwrap();

        let got = apply(
            &mut ledger,
            &Operation::History {
                account: "100000".to_string(),
            },
        );
        assert_eq!(
            Ok(Outcome::Report(
                "Transaction History for Account 100000:\n".to_string()
            )),
            got
        );
    }

    #[test]
    fn test_process_streams_results_then_accounts() {
        let (operations_tx, operations) = mpsc::channel();
        let (accounts_tx, accounts) = mpsc::channel();

        for operation in vec![
            open("2", AccountType::Savings),
            open("1", AccountType::Checking),
            Operation::Withdraw {
                account: "1".to_string(),
                amount: dec!(10),
            },
        ] {
            operations_tx.send(operation).unwrap();
        }
        drop(operations_tx);

        let results: Vec<_> = process(operations, accounts_tx).iter().collect();
        assert_eq!(3, results.len());
        assert!(results.iter().all(|(_, result)| result.is_ok()));

        let accounts: Vec<(String, rust_decimal::Decimal)> = accounts
            .iter()
            .map(|acc| (acc.number().to_string(), acc.balance()))
            .collect();
        assert_eq!(
            vec![("1".to_string(), dec!(990)), ("2".to_string(), dec!(1000))],
            accounts
        );
    }
}
