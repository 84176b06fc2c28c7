use super::Ledger;
use crate::bank::{error::BankError, transaction::Transaction, Amount};

/// Both sides of a completed transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub debit: Transaction,
    pub credit: Transaction,
}

impl Ledger {
    /// Move `amount` from one account to another.
    ///
    /// Either both legs happen or neither does. Both are planned first, and
    /// only once both are known to be valid are they applied.
    ///
    /// A rejected withdrawal from `from` is returned as is. A rejected deposit
    /// into `to`, including `to` not existing, is wrapped in
    /// [`BankError::TransferFailed`].
    pub fn transfer_funds(
        &mut self,
        from: &str,
        to: &str,
        amount: Amount,
    ) -> Result<Transfer, BankError> {
        let source = self.account(from)?;
        let debit = source.plan_withdrawal(amount)?;

        let credit = if from == to {
            // The deposit lands on top of the withdrawal.
            source.plan_deposit_onto(debit.balance, amount)
        } else {
            self.account(to)
                .and_then(|destination| destination.plan_deposit(amount))
        };
        let credit = credit.map_err(|err| BankError::TransferFailed(Box::new(err)))?;

        // Both legs are valid: nothing below can fail.
        let debit = self.account_mut(from)?.apply(debit);
        let credit = self.account_mut(to)?.apply(credit);

        tracing::info!(from = %from, to = %to, amount = %amount, "funds transferred");

        Ok(Transfer { debit, credit })
    }
}
