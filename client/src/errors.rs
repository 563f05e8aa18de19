use std::fmt;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::{program_error::ProgramError, pubkey::ParsePubkeyError};
use solana_client::client_error::ClientError;
use solana_sdk::signer::SignerError;

#[derive(Debug)]
pub enum EscrowClientError {
    Rpc(ClientError),
    Program(ProgramError),
    Signer(SignerError),
    Pubkey(ParsePubkeyError),
    InvalidKeypair(String),
    InvalidAmount(String),
    AccountNotFound(Pubkey),
    IncorrectAccountOwner {
        account: Pubkey,
        expected: Pubkey,
        actual: Pubkey,
    },
    // take trade wraps every escrow lookup failure in this
    EscrowNotFound(Pubkey),
    NotInitialized(Pubkey),
}

impl fmt::Display for EscrowClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpc(e) => write!(f, "RPC error: {e}"),
            Self::Program(e) => write!(f, "program error: {e}"),
            Self::Signer(e) => write!(f, "signer error: {e}"),
            Self::Pubkey(e) => write!(f, "invalid pubkey: {e}"),
            Self::InvalidKeypair(e) => write!(f, "invalid keypair: {e}"),
            Self::InvalidAmount(e) => write!(f, "invalid amount: {e}"),
            Self::AccountNotFound(key) => write!(f, "account not found: {key}"),
            Self::IncorrectAccountOwner {
                account,
                expected,
                actual,
            } => write!(
                f,
                "account {account} is owned by {actual}, expected {expected}"
            ),
            Self::EscrowNotFound(key) => {
                write!(f, "could not find escrow at given address: {key}")
            }
            Self::NotInitialized(key) => write!(f, "account not initialized: {key}"),
        }
    }
}

impl std::error::Error for EscrowClientError {}

impl From<ClientError> for EscrowClientError {
    fn from(e: ClientError) -> Self {
        Self::Rpc(e)
    }
}

impl From<ProgramError> for EscrowClientError {
    fn from(e: ProgramError) -> Self {
        Self::Program(e)
    }
}

impl From<SignerError> for EscrowClientError {
    fn from(e: SignerError) -> Self {
        Self::Signer(e)
    }
}

impl From<ParsePubkeyError> for EscrowClientError {
    fn from(e: ParsePubkeyError) -> Self {
        Self::Pubkey(e)
    }
}
