use crate::bank::{
    account::{Account, AccountType},
    Amount,
};

use serde::Serialize;
use std::sync::mpsc::Receiver;

#[derive(Serialize)]
struct AccountRecord<'a> {
    account: &'a str,
    holder: &'a str,

    #[serde(rename = "type")]
    account_type: AccountType,
    balance: Amount,

    #[serde(rename = "overdraft")]
    overdraft_limit: Amount,

    // Only the number of transactions. The history itself is in the logs.
    transactions: usize,
}

impl<'a> AccountRecord<'a> {
    fn new(acc: &'a Account) -> Self {
        Self {
            account: acc.number(),
            holder: acc.holder(),
            account_type: acc.account_type(),
            balance: acc.balance(),
            overdraft_limit: acc.overdraft_limit(),
            transactions: acc.transaction_history().len(),
        }
    }
}

// Writes the received accounts to the given stream.
pub fn write(
    output_stream: impl std::io::Write,
    accounts: Receiver<Account>,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for account in accounts {
        writer.serialize(AccountRecord::new(&account))?;
    }
    writer.flush()?;

    Ok(())
}
