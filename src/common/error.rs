#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid amount, use a positive whole number")]
    InvalidAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("transfer failed")]
    InvalidTransfer,
    #[error("too many attempts, login failed")]
    Authentication,
    #[error("account {0} already exists")]
    DuplicateAccount(String),
    #[error("no active session, log in first")]
    SessionRequired,
    #[error("already signed in, log out first")]
    SessionActive,
    #[error("input closed")]
    InputClosed,
    #[error("ledger file is corrupt: {0}")]
    CorruptState(String),
    #[error("failed to persist ledger: {0}")]
    Persistence(String),
    #[error("process error: {0}")]
    Process(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
