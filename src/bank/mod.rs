pub mod account;
pub mod error;
pub mod ledger;
pub mod outcome;
pub mod transaction;

use rust_decimal::RoundingStrategy;
use std::fmt;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `HashMap<AccountNumber, Account>` is self-explanatory.
// Account numbers are opaque strings such as "100000"; they are never parsed.
pub type AccountNumber = String;

// A decimal library instead of the built-in f64 type, to be safer when
// dealing with money.
pub type Amount = rust_decimal::Decimal;

/// Number of fractional digits shown whenever an amount is displayed.
pub const DISPLAY_PRECISION: u32 = 6;

/// Displays an amount as `$<value>` with exactly [`DISPLAY_PRECISION`]
/// fractional digits, rounding half away from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dollars(pub Amount);

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The precision flag alone truncates extra digits.
        let rounded = self
            .0
            .round_dp_with_strategy(DISPLAY_PRECISION, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${:.prec$}", rounded, prec = DISPLAY_PRECISION as usize)
    }
}

#[test]
fn test_dollars() {
    use rust_decimal_macros::dec;

    for (amount, want) in vec![
        (dec!(1000), "$1000.000000"),
        (dec!(-300), "$-300.000000"),
        (dec!(12.5), "$12.500000"),
        (dec!(0.1234567), "$0.123457"),
        (dec!(0.1234564), "$0.123456"),
        (dec!(0.0000005), "$0.000001"),
        (dec!(-2.0000005), "$-2.000001"),
        (dec!(9.9999999), "$10.000000"),
    ] {
        assert_eq!(want, Dollars(amount).to_string());
    }
}
