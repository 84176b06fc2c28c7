use super::AccountNumber;
use std::fmt;
use thiserror::Error;

/// What a rejected amount was meant to be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountUse {
    Deposit,
    Withdrawal,
    OpeningBalance,
    OverdraftLimit,
}

impl fmt::Display for AmountUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AmountUse::Deposit => "deposit",
            AmountUse::Withdrawal => "withdrawal",
            AmountUse::OpeningBalance => "opening balance",
            AmountUse::OverdraftLimit => "overdraft limit",
        })
    }
}

/// Every way an operation on the bank can fail.
///
/// None of these are fatal: the ledger is left exactly as it was before the
/// failing call, and the caller decides whether to retry.
/// The `Display` wording is the one users of the bank have always seen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// The account has been closed, so no more transactions can be applied.
    #[error("Account is closed.")]
    AccountClosed,

    /// The amount is zero, negative, or otherwise unusable for its purpose.
    #[error("Invalid amount for {0}.")]
    InvalidAmount(AmountUse),

    /// A checking withdrawal would take the balance below the overdraft limit.
    #[error("Withdrawal exceeds overdraft limit.")]
    OverdraftExceeded,

    /// A savings withdrawal is larger than the balance.
    #[error("Insufficient balance.")]
    InsufficientBalance,

    /// No account is registered under that number.
    #[error("Account not found.")]
    AccountNotFound,

    /// An account is already registered under that number.
    #[error("Account {0} already exists.")]
    DuplicateAccount(AccountNumber),

    /// Accounts can only be opened as savings or checking.
    #[error("Invalid account type.")]
    InvalidAccountType,

    /// The new balance would not be representable.
    #[error("Amount overflows the account balance.")]
    Overflow,

    /// The destination leg of a transfer was rejected. Nothing was moved.
    #[error("Error transferring funds: {0}")]
    TransferFailed(Box<BankError>),
}

#[cfg(test)]
mod tests {
    use super::{AmountUse, BankError};

    #[test]
    fn test_error_messages() {
        for (err, want) in vec![
            (BankError::AccountClosed, "Account is closed."),
            (
                BankError::InvalidAmount(AmountUse::Deposit),
                "Invalid amount for deposit.",
            ),
            (
                BankError::InvalidAmount(AmountUse::Withdrawal),
                "Invalid amount for withdrawal.",
            ),
            (
                BankError::InvalidAmount(AmountUse::OverdraftLimit),
                "Invalid amount for overdraft limit.",
            ),
            (
                BankError::OverdraftExceeded,
                "Withdrawal exceeds overdraft limit.",
            ),
            (BankError::InsufficientBalance, "Insufficient balance."),
            (BankError::AccountNotFound, "Account not found."),
            (
                BankError::DuplicateAccount("100000".to_string()),
                "Account 100000 already exists.",
            ),
        ] {
            assert_eq!(want, err.to_string());
        }
    }

    #[test]
    fn test_transfer_failed_wraps_the_deposit_error() {
        let err = BankError::TransferFailed(Box::new(BankError::AccountNotFound));
        assert_eq!("Error transferring funds: Account not found.", err.to_string());
    }
}
