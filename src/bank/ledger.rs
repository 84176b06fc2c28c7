//! The bank itself: every account, keyed by account number.
//!
//! The ledger only routes. It finds the account an operation is about and
//! hands the operation over; validation and bookkeeping belong to [`Account`].
//! The one operation spanning two accounts, the transfer, lives in
//! [`transfer`].

pub mod transfer;

use super::{
    account::{Account, AccountType},
    error::BankError,
    transaction::Transaction,
    AccountNumber, Amount,
};

use std::collections::{hash_map::Entry, HashMap};

#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountNumber, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new account. Account numbers are unique: opening one that is
    /// already taken fails and leaves the existing account untouched.
    pub fn create_account(
        &mut self,
        number: impl Into<AccountNumber>,
        holder: impl Into<String>,
        account_type: AccountType,
        opening_balance: Amount,
        overdraft_limit: Amount,
    ) -> Result<&Account, BankError> {
        match self.accounts.entry(number.into()) {
            Entry::Occupied(entry) => Err(BankError::DuplicateAccount(entry.key().clone())),
            Entry::Vacant(entry) => {
                let account = Account::new(
                    entry.key().clone(),
                    holder,
                    account_type,
                    opening_balance,
                    overdraft_limit,
                )?;
                tracing::info!(
                    account = %account.number(),
                    account_type = %account.account_type(),
                    balance = %account.balance(),
                    "account created"
                );

                Ok(entry.insert(account))
            }
        }
    }

    pub fn account(&self, number: &str) -> Result<&Account, BankError> {
        self.accounts.get(number).ok_or(BankError::AccountNotFound)
    }

    fn account_mut(&mut self, number: &str) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(number)
            .ok_or(BankError::AccountNotFound)
    }

    /// The type of the account, or [`AccountType::Invalid`] when there is no
    /// such account.
    pub fn account_type(&self, number: &str) -> AccountType {
        self.account(number)
            .map(Account::account_type)
            .unwrap_or(AccountType::Invalid)
    }

    pub fn deposit(&mut self, number: &str, amount: Amount) -> Result<Transaction, BankError> {
        self.account_mut(number)?.deposit(amount)
    }

    pub fn withdraw(&mut self, number: &str, amount: Amount) -> Result<Transaction, BankError> {
        self.account_mut(number)?.withdraw(amount)
    }

    pub fn check_balance(&self, number: &str) -> Result<Amount, BankError> {
        Ok(self.account(number)?.balance())
    }

    pub fn transaction_history(&self, number: &str) -> Result<&[Transaction], BankError> {
        Ok(self.account(number)?.transaction_history())
    }

    pub fn display_transaction_history(&self, number: &str) -> Result<String, BankError> {
        Ok(self.account(number)?.display_transaction_history())
    }

    pub fn display_account_info(&self, number: &str) -> Result<String, BankError> {
        Ok(self.account(number)?.display_account_info())
    }

    /// Close the account and remove it from the ledger. Its number resolves
    /// to [`BankError::AccountNotFound`] from then on.
    ///
    /// The closed account is handed back, with a zero balance and an empty
    /// history.
    pub fn close_account(&mut self, number: &str) -> Result<Account, BankError> {
        let mut account = self
            .accounts
            .remove(number)
            .ok_or(BankError::AccountNotFound)?;
        account.close();

        tracing::info!(account = %number, "account closed");

        Ok(account)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All the accounts, sorted by account number.
    pub fn into_accounts(self) -> Vec<Account> {
        let mut accounts: Vec<Account> = self.accounts.into_values().collect();
        accounts.sort_by(|a, b| a.number().cmp(b.number()));

        accounts
    }
}
