use std::collections::{BTreeMap, HashSet};

use rand::Rng;

use crate::common::error::AppError;
use crate::domain::account::Account;

const ACCOUNT_NUMBER_DIGITS: usize = 10;

/// The complete mapping of account name to account record.
///
/// Serializes transparently as one JSON object keyed by account name, which
/// is exactly the persisted file format.
#[derive(Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    accounts: BTreeMap<String, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    pub fn accounts(&self) -> &BTreeMap<String, Account> {
        &self.accounts
    }

    pub fn contains(&self, name: &str) -> bool {
        self.accounts.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.accounts.get_mut(name)
    }

    /// Creates a record with zero balance, empty maps and sequences, and a
    /// freshly generated unique account number.
    ///
    /// Callers check existence first; a duplicate name here is a broken
    /// precondition, not a race (single-threaded process model).
    pub fn create_account(&mut self, name: &str, pin: String) -> Result<&mut Account, AppError> {
        if self.contains(name) {
            return Err(AppError::DuplicateAccount(name.to_string()));
        }
        let number = self.generate_account_number();
        let account = self
            .accounts
            .entry(name.to_string())
            .or_insert(Account::new(pin, number));
        Ok(account)
    }

    /// Draws random 10-digit numbers until one misses every existing record.
    ///
    /// The candidate space is 10^10 against at most a handful of accounts,
    /// so a second draw is already rare.
    pub fn generate_account_number(&self) -> String {
        let taken: HashSet<&str> = self
            .accounts
            .values()
            .filter_map(|acc| acc.account_number.as_deref())
            .collect();

        let mut rng = rand::thread_rng();
        loop {
            let candidate = format!(
                "{:0width$}",
                rng.gen_range(0..10_u64.pow(ACCOUNT_NUMBER_DIGITS as u32)),
                width = ACCOUNT_NUMBER_DIGITS
            );
            if !taken.contains(candidate.as_str()) {
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;

    #[test]
    fn create_account_inserts_zeroed_record_with_number() {
        let mut ledger = Ledger::new();

        let acc = ledger.create_account("alice", "1234".into()).unwrap();
        assert_eq!(acc.balance, Money::zero());
        let number = acc.account_number.clone().expect("number generated");
        assert_eq!(number.len(), 10);
        assert!(number.chars().all(|c| c.is_ascii_digit()));

        assert!(ledger.contains("alice"));
        assert!(!ledger.contains("Alice"), "names are case-sensitive");
    }

    #[test]
    fn create_account_rejects_duplicate_names() {
        let mut ledger = Ledger::new();
        ledger.create_account("alice", "1234".into()).unwrap();

        let err = ledger.create_account("alice", "5678".into());
        assert!(matches!(err, Err(AppError::DuplicateAccount(name)) if name == "alice"));
        assert_eq!(ledger.get("alice").unwrap().pin, "1234");
    }

    #[test]
    fn generated_numbers_are_pairwise_distinct() {
        let mut ledger = Ledger::new();
        for i in 0..50 {
            ledger
                .create_account(&format!("user{i}"), "0000".into())
                .unwrap();
        }

        let numbers: HashSet<String> = ledger
            .accounts()
            .values()
            .map(|acc| acc.account_number.clone().unwrap())
            .collect();
        assert_eq!(numbers.len(), 50);
    }

    #[test]
    fn generate_skips_numbers_already_taken() {
        let mut ledger = Ledger::new();
        ledger.create_account("alice", "1234".into()).unwrap();
        let existing = ledger
            .get("alice")
            .unwrap()
            .account_number
            .clone()
            .unwrap();

        for _ in 0..100 {
            assert_ne!(ledger.generate_account_number(), existing);
        }
    }

    #[test]
    fn ledger_serializes_as_plain_name_keyed_object() {
        let mut ledger = Ledger::new();
        ledger.create_account("alice", "1234".into()).unwrap();

        let value = serde_json::to_value(&ledger).unwrap();
        assert!(value.is_object());
        assert!(value.get("alice").is_some());
        assert_eq!(value["alice"]["pin"], "1234");
    }
}
