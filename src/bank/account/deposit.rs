use crate::bank::{
    error::{AmountUse, BankError},
    transaction::{Kind, Transaction},
    Amount,
};

use super::account::{Account, Posting};
use rust_decimal_macros::dec;

impl Account {
    /// Add `amount` to the balance and log a deposit.
    pub fn deposit(&mut self, amount: Amount) -> Result<Transaction, BankError> {
        let posting = self.plan_deposit(amount)?;
        Ok(self.apply(posting))
    }

    pub(in crate::bank) fn plan_deposit(&self, amount: Amount) -> Result<Posting, BankError> {
        self.plan_deposit_onto(self.balance, amount)
    }

    /// Plan a deposit on top of `balance` rather than the current balance.
    /// Used when another posting on this account is applied first.
    pub(in crate::bank) fn plan_deposit_onto(
        &self,
        balance: Amount,
        amount: Amount,
    ) -> Result<Posting, BankError> {
        self.ensure_open()?;

        if amount <= dec!(0) {
            return Err(BankError::InvalidAmount(AmountUse::Deposit));
        }

        let balance = Account::checked_balance(balance, amount)?;

        Ok(Posting {
            kind: Kind::Deposit,
            amount,
            balance,
        })
    }
}
