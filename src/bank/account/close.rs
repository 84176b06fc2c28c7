use super::account::Account;
use rust_decimal_macros::dec;

impl Account {
    /// Close the account for good.
    ///
    /// The balance is zeroed and the transaction history is discarded.
    /// There is no way back: every later deposit or withdrawal is rejected.
    pub fn close(&mut self) {
        self.open = false;
        self.balance = dec!(0);
        self.history.clear();
    }
}
