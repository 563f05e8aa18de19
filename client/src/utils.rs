use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::program_pack::{IsInitialized, Pack};
use solana_sdk::{account::Account, signature::Keypair};

use crate::{errors::EscrowClientError, traits::EscrowRpc};

/// Decodes `#,#,...,#` key bytes. Surrounding brackets, as in a Solana CLI
/// keypair file, are accepted.
pub fn parse_keypair_bytes(input: &str) -> Result<Keypair, EscrowClientError> {
    let trimmed = input
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']');
    let bytes = trimmed
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<u8>()
                .map_err(|e| EscrowClientError::InvalidKeypair(format!("{s:?}: {e}")))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    Keypair::from_bytes(&bytes).map_err(|e| EscrowClientError::InvalidKeypair(e.to_string()))
}

pub fn parse_pubkey(input: &str) -> Result<Pubkey, EscrowClientError> {
    Ok(Pubkey::from_str(input.trim())?)
}

pub fn parse_amount(input: &str) -> Result<u64, EscrowClientError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|e| EscrowClientError::InvalidAmount(format!("{input:?}: {e}")))
}

pub fn fetch_account(rpc: &impl EscrowRpc, pubkey: &Pubkey) -> Result<Account, EscrowClientError> {
    rpc.get_account(pubkey)?
        .ok_or(EscrowClientError::AccountNotFound(*pubkey))
}

/// Fetches `pubkey` and unpacks it as `T` without looking at its initialized flag.
pub fn fetch_unchecked<T: Pack + IsInitialized>(
    rpc: &impl EscrowRpc,
    pubkey: &Pubkey,
) -> Result<T, EscrowClientError> {
    let account = fetch_account(rpc, pubkey)?;
    Ok(T::unpack_unchecked(&account.data)?)
}

/// Fetches `pubkey` and unpacks it as `T`, failing if it is absent or uninitialized.
pub fn fetch_initialized<T: Pack + IsInitialized>(
    rpc: &impl EscrowRpc,
    pubkey: &Pubkey,
) -> Result<T, EscrowClientError> {
    let state: T = fetch_unchecked(rpc, pubkey)?;
    if !state.is_initialized() {
        return Err(EscrowClientError::NotInitialized(*pubkey));
    }
    Ok(state)
}

/// Fetches an initialized SPL token account owned by the token program.
pub fn fetch_token_account(
    rpc: &impl EscrowRpc,
    pubkey: &Pubkey,
) -> Result<spl_token::state::Account, EscrowClientError> {
    let account = fetch_account(rpc, pubkey)?;
    assert_owned_by(pubkey, &account, &spl_token::id())?;
    let token_account = spl_token::state::Account::unpack_unchecked(&account.data)?;
    if !token_account.is_initialized() {
        return Err(EscrowClientError::NotInitialized(*pubkey));
    }
    Ok(token_account)
}

pub fn assert_owned_by(
    pubkey: &Pubkey,
    account: &Account,
    owner: &Pubkey,
) -> Result<(), EscrowClientError> {
    if account.owner != *owner {
        return Err(EscrowClientError::IncorrectAccountOwner {
            account: *pubkey,
            expected: *owner,
            actual: account.owner,
        });
    }
    Ok(())
}
