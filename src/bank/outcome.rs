use super::{AccountNumber, Amount, Dollars};
use std::fmt;

/// A successful operation, as reported to whoever drives the bank.
///
/// Business logic hands back typed values (transactions, balances, accounts);
/// this is where they get their historical wording.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created,
    Deposited(Amount),
    Withdrew(Amount),
    Balance {
        account: AccountNumber,
        balance: Amount,
    },
    /// A pre-formatted multi-line report: account info or transaction history.
    Report(String),
    Closed,
    Transferred,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created => f.write_str("Account created successfully."),
            Outcome::Deposited(amount) => write!(f, "Deposit of {} successful.", Dollars(*amount)),
            Outcome::Withdrew(amount) => {
                write!(f, "Withdrawal of {} successful.", Dollars(*amount))
            }
            Outcome::Balance { account, balance } => write!(
                f,
                "Balance for account {} is: {}",
                account,
                Dollars(*balance)
            ),
            Outcome::Report(report) => f.write_str(report),
            Outcome::Closed => f.write_str("Account closed successfully."),
            Outcome::Transferred => f.write_str("Funds transferred successfully."),
        }
    }
}

#[test]
fn test_outcome_messages() {
    use rust_decimal_macros::dec;

    for (outcome, want) in vec![
        (Outcome::Created, "Account created successfully."),
        (Outcome::Deposited(dec!(500)), "Deposit of $500.000000 successful."),
        (
            Outcome::Withdrew(dec!(0.5)),
            "Withdrawal of $0.500000 successful.",
        ),
        (
            Outcome::Withdrew(dec!(0.1234567)),
            "Withdrawal of $0.123457 successful.",
        ),
        (
            Outcome::Balance {
                account: "100000".to_string(),
                balance: dec!(1000),
            },
            "Balance for account 100000 is: $1000.000000",
        ),
        (
            Outcome::Balance {
                account: "200000".to_string(),
                balance: dec!(-300),
            },
            "Balance for account 200000 is: $-300.000000",
        ),
        (Outcome::Closed, "Account closed successfully."),
        (Outcome::Transferred, "Funds transferred successfully."),
    ] {
        assert_eq!(want, outcome.to_string());
    }
}
