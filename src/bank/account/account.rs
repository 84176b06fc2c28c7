use crate::bank::{
    error::{AmountUse, BankError},
    transaction::{Kind, Transaction},
    AccountNumber, Amount,
};

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Savings,
    Checking,

    /// Stands for "no such account". Never assigned to a real account.
    #[serde(skip_deserializing)]
    Invalid,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::Invalid => "Invalid",
        })
    }
}

/// A single holder's balance, status and transaction log.
///
/// Account is a small state-machine: it starts open, accepts deposits and
/// withdrawals, and can be closed exactly once. Closing wipes the balance
/// and the history, and every later mutation is rejected.
///
/// Mutations go through two steps. First a [`Posting`] is planned against the
/// current state, which validates the amount and computes the new balance
/// without touching anything. Then the posting is applied, which cannot fail.
/// The ledger relies on this to make transfers all-or-nothing.
#[derive(Debug, Clone)]
pub struct Account {
    pub(super) number: AccountNumber,
    pub(super) holder: String,
    pub(super) account_type: AccountType,
    pub(super) balance: Amount,

    // Always zero for savings accounts.
    pub(super) overdraft_limit: Amount,
    pub(super) open: bool,

    // Append-only while the account is open.
    pub(super) history: Vec<Transaction>,
}

/// A validated, not yet applied, change to an account balance.
#[derive(Debug, PartialEq)]
pub(in crate::bank) struct Posting {
    pub(in crate::bank) kind: Kind,
    pub(in crate::bank) amount: Amount,
    pub(in crate::bank) balance: Amount,
}

impl Account {
    pub fn new(
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        account_type: AccountType,
        opening_balance: Amount,
        overdraft_limit: Amount,
    ) -> Result<Self, BankError> {
        let overdraft_limit = match account_type {
            AccountType::Invalid => return Err(BankError::InvalidAccountType),
            AccountType::Savings => dec!(0),
            AccountType::Checking => overdraft_limit,
        };

        if overdraft_limit < dec!(0) {
            return Err(BankError::InvalidAmount(AmountUse::OverdraftLimit));
        }

        if opening_balance < -overdraft_limit {
            return Err(BankError::InvalidAmount(AmountUse::OpeningBalance));
        }

        Ok(Self {
            number: number.into(),
            holder: holder.into(),
            account_type,
            balance: opening_balance,
            overdraft_limit,
            open: true,
            history: Vec::new(),
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn overdraft_limit(&self) -> Amount {
        self.overdraft_limit
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Every deposit and withdrawal applied so far, oldest first.
    pub fn transaction_history(&self) -> &[Transaction] {
        &self.history
    }

    /// Apply a posting planned against this account's current state,
    /// and log it.
    pub(in crate::bank) fn apply(&mut self, posting: Posting) -> Transaction {
        self.balance = posting.balance;

        let transaction = Transaction::new(posting.kind, posting.amount);
        self.history.push(transaction.clone());

        tracing::debug!(
            account = %self.number,
            kind = %posting.kind,
            amount = %posting.amount,
            balance = %self.balance,
            "transaction applied"
        );

        transaction
    }

    /// `balance + change`, or [`BankError::Overflow`] unless the result is exact.
    ///
    /// `Decimal` only fails on integer overflow: a sum needing more than 28
    /// significant digits is silently rounded instead. A rounded sum is exact
    /// only when neither operand had fractional digits beyond the ones kept.
    pub(super) fn checked_balance(balance: Amount, change: Amount) -> Result<Amount, BankError> {
        let sum = balance.checked_add(change).ok_or(BankError::Overflow)?;

        let needed = balance.normalize().scale().max(change.normalize().scale());
        if sum.scale() < needed {
            return Err(BankError::Overflow);
        }

        Ok(sum)
    }

    pub(super) fn ensure_open(&self) -> Result<(), BankError> {
        if !self.open {
            return Err(BankError::AccountClosed);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::bank::{
        account::account::{Account, AccountType},
        error::{AmountUse, BankError},
    };
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_savings() {
        let acc = Account::new("100000", "John Doe", AccountType::Savings, dec!(1000), dec!(0))
            .expect("should open a savings account");

        assert_eq!("100000", acc.number());
        assert_eq!("John Doe", acc.holder());
        assert_eq!(AccountType::Savings, acc.account_type());
        assert_eq!(dec!(1000), acc.balance());
        assert!(acc.is_open());
        assert!(acc.transaction_history().is_empty());
    }

    #[test]
    fn test_new_savings_ignores_overdraft() {
        let acc = Account::new("1", "A", AccountType::Savings, dec!(0), dec!(500))
            .expect("should open a savings account");

        assert_eq!(dec!(0), acc.overdraft_limit());
    }

    #[test]
    fn test_new_checking_may_start_overdrawn() {
        let acc = Account::new("1", "A", AccountType::Checking, dec!(-200), dec!(500))
            .expect("should open a checking account");

        assert_eq!(dec!(-200), acc.balance());
        assert_eq!(dec!(500), acc.overdraft_limit());
    }

    #[test]
    fn test_checked_balance() {
        let big = dec!(1000000000000000000000000000);

        for (balance, change, want) in vec![
            (dec!(10), dec!(0.5), Ok(dec!(10.5))),
            (dec!(10.5), dec!(-0.5), Ok(dec!(10))),
            (big, dec!(1), Ok(dec!(1000000000000000000000000001))),
            (big, dec!(0.01), Err(BankError::Overflow)),
            (big, dec!(-0.01), Err(BankError::Overflow)),
            (rust_decimal::Decimal::MAX, dec!(1), Err(BankError::Overflow)),
        ] {
            assert_eq!(want, Account::checked_balance(balance, change));
        }
    }

    #[test]
    fn test_new_invalid() {
        for (account_type, opening_balance, overdraft_limit, want) in vec![
            (
                AccountType::Invalid,
                dec!(0),
                dec!(0),
                BankError::InvalidAccountType,
            ),
            (
                AccountType::Checking,
                dec!(0),
                dec!(-1),
                BankError::InvalidAmount(AmountUse::OverdraftLimit),
            ),
            (
                AccountType::Checking,
                dec!(-501),
                dec!(500),
                BankError::InvalidAmount(AmountUse::OpeningBalance),
            ),
            (
                AccountType::Savings,
                dec!(-0.01),
                dec!(0),
                BankError::InvalidAmount(AmountUse::OpeningBalance),
            ),
        ] {
            let got = Account::new("1", "A", account_type, opening_balance, overdraft_limit);
            assert_eq!(Some(want), got.err());
        }
    }
}
