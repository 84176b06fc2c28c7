use super::{Amount, Dollars};
use chrono::{DateTime, Utc};
use std::fmt;

// Same layout as C's ctime(), minus the trailing newline.
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Deposit,    // Added a credit to the balance.
    Withdrawal, // Added a debit to the balance.
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Deposit => "deposit",
            Kind::Withdrawal => "withdrawal",
        })
    }
}

/// A completed deposit or withdrawal.
///
/// Only the owning account creates transactions, once the mutation has been
/// applied. Fields are private so a recorded transaction can't be altered.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    timestamp: DateTime<Utc>,
    kind: Kind,
    amount: Amount,
}

impl Transaction {
    pub(super) fn new(kind: Kind, amount: Amount) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            amount,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            Dollars(self.amount)
        )
    }
}
