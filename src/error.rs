use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TellerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Account not found: {0}")]
    AccountNotFound(u32),
    #[error("Amount must be greater than zero")]
    InvalidAmount,
    #[error("Insufficient funds for operation")]
    InsufficientFunds,
    #[error("Source and destination are the same account")]
    SameAccount,
    #[error("Duplicate account id in roster: {0}")]
    DuplicateAccount(u32),
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),
}
