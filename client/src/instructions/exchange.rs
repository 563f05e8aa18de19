use anchor_lang::prelude::{msg, Pubkey};
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use serde::Serialize;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use crate::config::ClientConfig;
use crate::errors::EscrowClientError;
use crate::payload::{EscrowInstruction, InstructionEncoding};
use crate::state::{find_escrow_authority, EscrowState};
use crate::traits::EscrowRpc;
use crate::utils::fetch_initialized;

pub struct Exchange {
    pub taker: Keypair,
    pub escrow_account: Pubkey,
    /// Receives the tokens held in the escrow's temp token account.
    pub taker_x_token_account: Pubkey,
    /// Pays the initializer's expected amount.
    pub taker_y_token_account: Pubkey,
    pub taker_expected_x_token_amount: u64,
    pub program_id: Pubkey,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TakeTradeOutcome {
    pub signature: String,
    pub escrow_account_pubkey: String,
    pub escrow_authority_pubkey: String,
    pub sent_amount: u64,
    pub received_amount: u64,
}

/// The escrow program's own `Exchange` instruction.
#[allow(clippy::too_many_arguments)]
pub fn exchange_instruction(
    program_id: &Pubkey,
    taker: &Pubkey,
    taker_x_token_account: &Pubkey,
    taker_y_token_account: &Pubkey,
    escrow_account: &Pubkey,
    escrow_authority: &Pubkey,
    escrow_state: &EscrowState,
    taker_expected_x_token_amount: u64,
    encoding: InstructionEncoding,
) -> Result<Instruction, EscrowClientError> {
    let data = EscrowInstruction::Exchange {
        amount: taker_expected_x_token_amount,
    }
    .encode(encoding)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*taker, true),
            AccountMeta::new(*taker_y_token_account, false),
            AccountMeta::new(*taker_x_token_account, false),
            AccountMeta::new(escrow_state.temp_token_account_pubkey, false),
            AccountMeta::new(escrow_state.initializer_pubkey, false),
            AccountMeta::new(escrow_state.initializer_token_to_receive_account_pubkey, false),
            AccountMeta::new(*escrow_account, false),
            AccountMeta::new_readonly(spl_token::id(), false),
            AccountMeta::new_readonly(*escrow_authority, false),
        ],
        data,
    })
}

pub fn handler(
    rpc: &impl EscrowRpc,
    config: &ClientConfig,
    accounts: &Exchange,
) -> Result<TakeTradeOutcome, EscrowClientError> {
    msg!("start exchange");

    let escrow_state: EscrowState = fetch_initialized(rpc, &accounts.escrow_account)
        .map_err(|e| match e {
            EscrowClientError::Rpc(_) | EscrowClientError::AccountNotFound(_) => {
                EscrowClientError::EscrowNotFound(accounts.escrow_account)
            }
            e => e,
        })?;
    let (escrow_authority, _bump) = find_escrow_authority(&accounts.program_id);

    let taker = accounts.taker.pubkey();
    let exchange_ix = exchange_instruction(
        &accounts.program_id,
        &taker,
        &accounts.taker_x_token_account,
        &accounts.taker_y_token_account,
        &accounts.escrow_account,
        &escrow_authority,
        &escrow_state,
        accounts.taker_expected_x_token_amount,
        config.encoding,
    )?;

    let mut transaction = Transaction::new_with_payer(&[exchange_ix], Some(&taker));
    transaction.try_sign(&[&accounts.taker], rpc.latest_blockhash()?)?;
    let signature = rpc.send_transaction(&transaction)?;

    msg!(
        "Successfully transferred {} from {} to {}",
        escrow_state.expected_amount,
        accounts.taker_y_token_account,
        escrow_state.initializer_token_to_receive_account_pubkey
    );
    msg!(
        "Successfully received {} in {} from {}",
        accounts.taker_expected_x_token_amount,
        accounts.taker_x_token_account,
        escrow_state.temp_token_account_pubkey
    );
    msg!("end exchange");

    Ok(TakeTradeOutcome {
        signature: signature.to_string(),
        escrow_account_pubkey: accounts.escrow_account.to_string(),
        escrow_authority_pubkey: escrow_authority.to_string(),
        sent_amount: escrow_state.expected_amount,
        received_amount: accounts.taker_expected_x_token_amount,
    })
}
