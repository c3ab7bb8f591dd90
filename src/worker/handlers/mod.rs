pub mod balance;
pub mod deposit;
pub mod history;
pub mod login;
pub mod logout;
pub mod transfer;
pub mod withdraw;

/// Whether a handler changed any record. The engine persists the ledger
/// after every `Mutated` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Mutated,
    Clean,
}
