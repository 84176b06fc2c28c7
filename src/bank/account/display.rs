use crate::bank::Dollars;

use super::account::{Account, AccountType};
use std::fmt;

impl Account {
    /// A human-readable summary of the account.
    pub fn display_account_info(&self) -> String {
        AccountInfo(self).to_string()
    }

    /// A header line, then one line per transaction, oldest first.
    pub fn display_transaction_history(&self) -> String {
        TransactionHistory(self).to_string()
    }
}

struct AccountInfo<'a>(&'a Account);

impl fmt::Display for AccountInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = self.0;
        writeln!(f, "Account Number: {}", account.number)?;
        writeln!(f, "Account Holder Name: {}", account.holder)?;
        writeln!(f, "Account Type: {}", account.account_type)?;
        writeln!(f, "Balance: {}", Dollars(account.balance))?;
        writeln!(
            f,
            "Account Status: {}",
            if account.open { "Open" } else { "Closed" }
        )?;
        if account.account_type == AccountType::Checking {
            writeln!(f, "Overdraft Limit: {}", Dollars(account.overdraft_limit))?;
        }

        Ok(())
    }
}

struct TransactionHistory<'a>(&'a Account);

impl fmt::Display for TransactionHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transaction History for Account {}:", self.0.number)?;
        for transaction in &self.0.history {
            writeln!(f, "{}", transaction)?;
        }

        Ok(())
    }
}
