use std::fmt;

use crate::common::money::Money;

/// The wording of history entries.
///
/// Both sides of a transfer render through here, so the sender and
/// recipient entries cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity<'a> {
    Deposit { amount: Money },
    Withdrawal { amount: Money },
    TransferOut { to: &'a str, amount: Money },
    TransferIn { from: &'a str, amount: Money },
}

impl fmt::Display for Activity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::Deposit { amount } => write!(f, "Deposit {amount}"),
            Activity::Withdrawal { amount } => write!(f, "Withdraw {amount}"),
            Activity::TransferOut { to, amount } => write!(f, "Transfer to {to} {amount}"),
            Activity::TransferIn { from, amount } => write!(f, "Received from {from} {amount}"),
        }
    }
}
