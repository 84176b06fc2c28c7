use crate::bank::{account::AccountType, AccountNumber, Amount};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, PartialEq)]
pub enum Error {
    Csv(String),    // CSV is malformed
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<OperationRecord as TryInto<Operation>>::Error> for Error {
    fn from(err: <OperationRecord as TryInto<Operation>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

/// One step of a script replayed against the bank.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Open {
        account: AccountNumber,
        holder: String,
        account_type: AccountType,
        opening_balance: Amount,
        overdraft_limit: Amount,
    },
    Deposit {
        account: AccountNumber,
        amount: Amount,
    },
    Withdraw {
        account: AccountNumber,
        amount: Amount,
    },
    Transfer {
        from: AccountNumber,
        to: AccountNumber,
        amount: Amount,
    },
    Balance {
        account: AccountNumber,
    },
    History {
        account: AccountNumber,
    },
    Info {
        account: AccountNumber,
    },
    Close {
        account: AccountNumber,
    },
}

// Bad rows are reported and skipped, the rest of the script still runs.
// A script is usually written by hand, so one typo shouldn't throw away the
// whole session.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Operation>, Receiver<Error>) {
    let (operation_tx, operation_rx): (Sender<Operation>, Receiver<Operation>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so we can start processing the operations immediately.
    std::thread::spawn(move || {
        for record in reader.deserialize::<OperationRecord>() {
            match convert(record) {
                Ok(operation) => operation_tx.send(operation).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
                Err(err) => error_tx.send(err).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
            };
        }
    });

    (operation_rx, error_rx)
}

// Convert from a csv deserialise result into an operation result.
fn convert(record: Result<OperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

// OperationRecord is the flat CSV row. It can't be deserialised straight into
// Operation (see https://github.com/BurntSushi/rust-csv/issues/211), and
// keeping them apart means the bank makes no assumption on the script format.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    op: OperationRecordType,
    account: Option<AccountNumber>,
    counterparty: Option<AccountNumber>,
    holder: Option<String>,
    #[serde(rename = "type")]
    account_type: Option<AccountType>,
    amount: Option<Decimal>,
    overdraft: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRecordType {
    Open,
    Deposit,
    Withdraw,
    Transfer,
    Balance,
    History,
    Info,
    Close,
}

impl OperationRecordType {
    fn missing_account(&self) -> &'static str {
        match self {
            Self::Open => "missing account for open",
            Self::Deposit => "missing account for deposit",
            Self::Withdraw => "missing account for withdraw",
            Self::Transfer => "missing account for transfer",
            Self::Balance => "missing account for balance",
            Self::History => "missing account for history",
            Self::Info => "missing account for info",
            Self::Close => "missing account for close",
        }
    }
}

impl TryFrom<OperationRecord> for Operation {
    type Error = &'static str;
    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let account = record.account.ok_or_else(|| record.op.missing_account())?;
        let operation = match record.op {
            OperationRecordType::Open => Operation::Open {
                account,
                holder: record.holder.ok_or("missing holder for open")?,
                account_type: record.account_type.ok_or("missing type for open")?,
                opening_balance: record.amount.ok_or("missing amount for open")?,
                overdraft_limit: record.overdraft.unwrap_or(dec!(0)),
            },
            OperationRecordType::Deposit => Operation::Deposit {
                account,
                amount: record.amount.ok_or("missing amount for deposit")?,
            },
            OperationRecordType::Withdraw => Operation::Withdraw {
                account,
                amount: record.amount.ok_or("missing amount for withdraw")?,
            },
            OperationRecordType::Transfer => Operation::Transfer {
                from: account,
                to: record
                    .counterparty
                    .ok_or("missing counterparty for transfer")?,
                amount: record.amount.ok_or("missing amount for transfer")?,
            },
            OperationRecordType::Balance => Operation::Balance { account },
            OperationRecordType::History => Operation::History { account },
            OperationRecordType::Info => Operation::Info { account },
            OperationRecordType::Close => Operation::Close { account },
        };

        Ok(operation)
    }
}

#[test]
// Parsing well-formed data should stream every operation.
fn test_parse_ok() {
    let data = r#"op,account,counterparty,holder,type,amount,overdraft
open,100000,,John Doe,savings,1000,
open,200000,,Jane Smith,checking,0,500
deposit,100000,,,,500,
withdraw,200000,,,,300,
transfer,100000,200000,,,200,
balance,100000,,,,,
history,100000,,,,,
info,200000,,,,,
close,100000,,,,,"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(9, operations.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"op,     account, counterparty, holder, type, amount, overdraft
open,   100000,  ,  John Doe ,  checking , 10 , 50
  deposit , 100000 ,,,, 1.5 ,"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    let got: Vec<Operation> = operations.iter().collect();
    assert_eq!(0, errors.iter().count());
    assert_eq!(
        vec![
            Operation::Open {
                account: "100000".to_string(),
                holder: "John Doe".to_string(),
                account_type: AccountType::Checking,
                opening_balance: dec!(10),
                overdraft_limit: dec!(50),
            },
            Operation::Deposit {
                account: "100000".to_string(),
                amount: dec!(1.5),
            },
        ],
        got
    );
}

#[test]
// Parsing incorrectly formatted data should report an error and skip the row.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"op,account,counterparty,holder,type,amount,overdraft
rob,100000,,,,1,"#,
            "unknown variant `rob`",
        ),
        (
            r#"op,account,counterparty,holder,type,amount,overdraft
open,100000,,John Doe,invalid,1,"#,
            "unknown variant `invalid`",
        ),
        (
            r#"op,account,counterparty,holder,type,amount,overdraft
deposit,100000,,,,1"#,
            "found record with 6 fields, but the previous record has 7 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(0, operations.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(1, errs.len());

        match &errs[0] {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            _ => panic!("unexpected error"),
        }
    }
}

#[test]
// Rows missing a column their operation needs should fail to convert.
fn test_parse_invalid_data() {
    for (data, want_err) in vec![
        (
            "open,,,John Doe,savings,5,",
            Error::Format("missing account for open".to_string()),
        ),
        (
            "deposit,,,,,5,",
            Error::Format("missing account for deposit".to_string()),
        ),
        (
            "transfer,,200000,,,5,",
            Error::Format("missing account for transfer".to_string()),
        ),
        (
            "close,,,,,,",
            Error::Format("missing account for close".to_string()),
        ),
        (
            "deposit,100000,,,,,",
            Error::Format("missing amount for deposit".to_string()),
        ),
        (
            "withdraw,100000,,,,,",
            Error::Format("missing amount for withdraw".to_string()),
        ),
        (
            "transfer,100000,,,,5,",
            Error::Format("missing counterparty for transfer".to_string()),
        ),
        (
            "open,100000,,,savings,5,",
            Error::Format("missing holder for open".to_string()),
        ),
        (
            "open,100000,,John Doe,,5,",
            Error::Format("missing type for open".to_string()),
        ),
    ] {
        let data = format!("op,account,counterparty,holder,type,amount,overdraft\n{}", data);
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(0, operations.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(vec![want_err], errs);
    }
}

#[test]
// An error on one row doesn't stop the rows after it.
fn test_parse_continues_after_error() {
    let data = r#"op,account,counterparty,holder,type,amount,overdraft
deposit,100000,,,,,
deposit,100000,,,,5,"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(1, operations.iter().count());
    assert_eq!(1, errors.iter().count());
}
