use crate::bank::{
    error::{AmountUse, BankError},
    transaction::{Kind, Transaction},
    Amount,
};

use super::account::{Account, AccountType, Posting};
use rust_decimal_macros::dec;

impl Account {
    /// Take `amount` off the balance and log a withdrawal.
    ///
    /// Checking accounts may go negative down to their overdraft limit.
    /// Savings accounts never go below zero.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Transaction, BankError> {
        let posting = self.plan_withdrawal(amount)?;
        Ok(self.apply(posting))
    }

    pub(in crate::bank) fn plan_withdrawal(&self, amount: Amount) -> Result<Posting, BankError> {
        self.ensure_open()?;

        if amount <= dec!(0) {
            return Err(BankError::InvalidAmount(AmountUse::Withdrawal));
        }

        let balance = Account::checked_balance(self.balance, -amount)?;

        match self.account_type {
            AccountType::Checking if balance < -self.overdraft_limit => {
                return Err(BankError::OverdraftExceeded)
            }
            AccountType::Checking => {}
            AccountType::Savings | AccountType::Invalid if self.balance < amount => {
                return Err(BankError::InsufficientBalance)
            }
            AccountType::Savings | AccountType::Invalid => {}
        }

        Ok(Posting {
            kind: Kind::Withdrawal,
            amount,
            balance,
        })
    }
}
