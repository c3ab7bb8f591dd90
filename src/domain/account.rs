use std::collections::BTreeMap;

use crate::common::money::Money;

/// A pending "you received funds" record, consumed at the next login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    pub from: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Account {
    /// Credential set at creation, compared verbatim on login.
    pub pin: String,
    /// Unique 10-digit number; `None` for records persisted before numbers existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    /// Never negative; withdrawals and transfers are rejected, not clamped.
    pub balance: Money,
    /// Amounts this account owes others. Populated externally, preserved here.
    #[serde(default)]
    pub owed_to: BTreeMap<String, Money>,
    /// Amounts others owe this account. Same preservation contract.
    #[serde(default)]
    pub owed_from: BTreeMap<String, Money>,
    /// Drained in full exactly once per login.
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Append-only audit trail of completed transactions.
    #[serde(default)]
    pub history: Vec<String>,
}

impl Account {
    pub fn new(pin: String, account_number: String) -> Self {
        Self {
            pin,
            account_number: Some(account_number),
            balance: Money::zero(),
            owed_to: BTreeMap::new(),
            owed_from: BTreeMap::new(),
            notifications: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn can_cover(&self, amount: Money) -> bool {
        self.balance >= amount
    }
}
