use std::thread;

use anchor_lang::prelude::{msg, Pubkey};
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program_pack::Pack,
    system_instruction, sysvar,
};
use serde::Serialize;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use crate::config::ClientConfig;
use crate::errors::EscrowClientError;
use crate::payload::{EscrowInstruction, InstructionEncoding};
use crate::state::{EscrowState, EscrowSummary};
use crate::traits::EscrowRpc;
use crate::utils::{fetch_token_account, fetch_unchecked};

pub struct Initialize {
    pub initializer: Keypair,
    /// Token account the offered tokens are taken from.
    pub initializer_x_token_account: Pubkey,
    pub amount: u64,
    /// Token account that will receive the counter-asset.
    pub initializer_receiving_token_account: Pubkey,
    pub expected_amount: u64,
    pub program_id: Pubkey,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitEscrowOutcome {
    pub signature: String,
    pub escrow_account_pubkey: String,
    #[serde(flatten)]
    pub escrow: EscrowSummary,
}

/// The escrow program's own `InitEscrow` instruction.
pub fn init_escrow_instruction(
    program_id: &Pubkey,
    initializer: &Pubkey,
    temp_token_account: &Pubkey,
    initializer_receiving_token_account: &Pubkey,
    escrow_account: &Pubkey,
    expected_amount: u64,
    encoding: InstructionEncoding,
) -> Result<Instruction, EscrowClientError> {
    let data = EscrowInstruction::InitEscrow {
        amount: expected_amount,
    }
    .encode(encoding)?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*initializer, true),
            AccountMeta::new(*temp_token_account, false),
            AccountMeta::new_readonly(*initializer_receiving_token_account, false),
            AccountMeta::new(*escrow_account, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    })
}

pub fn handler(
    rpc: &impl EscrowRpc,
    config: &ClientConfig,
    accounts: &Initialize,
) -> Result<InitEscrowOutcome, EscrowClientError> {
    msg!("start initialize");

    let initializer = accounts.initializer.pubkey();
    let x_token_mint = fetch_token_account(rpc, &accounts.initializer_x_token_account)?.mint;

    let temp_token_account = Keypair::new();
    let escrow_account = Keypair::new();

    let create_temp_token_account_ix = system_instruction::create_account(
        &initializer,
        &temp_token_account.pubkey(),
        rpc.minimum_balance_for_rent_exemption(spl_token::state::Account::LEN)?,
        spl_token::state::Account::LEN as u64,
        &spl_token::id(),
    );
    let init_temp_account_ix = spl_token::instruction::initialize_account(
        &spl_token::id(),
        &temp_token_account.pubkey(),
        &x_token_mint,
        &initializer,
    )?;
    let transfer_x_tokens_to_temp_account_ix = spl_token::instruction::transfer(
        &spl_token::id(),
        &accounts.initializer_x_token_account,
        &temp_token_account.pubkey(),
        &initializer,
        &[],
        accounts.amount,
    )?;
    let create_escrow_account_ix = system_instruction::create_account(
        &initializer,
        &escrow_account.pubkey(),
        rpc.minimum_balance_for_rent_exemption(EscrowState::LEN)?,
        EscrowState::LEN as u64,
        &accounts.program_id,
    );
    let init_escrow_ix = init_escrow_instruction(
        &accounts.program_id,
        &initializer,
        &temp_token_account.pubkey(),
        &accounts.initializer_receiving_token_account,
        &escrow_account.pubkey(),
        accounts.expected_amount,
        config.encoding,
    )?;

    let mut transaction = Transaction::new_with_payer(
        &[
            create_temp_token_account_ix,
            init_temp_account_ix,
            transfer_x_tokens_to_temp_account_ix,
            create_escrow_account_ix,
            init_escrow_ix,
        ],
        Some(&initializer),
    );
    transaction.try_sign(
        &[&accounts.initializer, &temp_token_account, &escrow_account],
        rpc.latest_blockhash()?,
    )?;
    let signature = rpc.send_transaction(&transaction)?;

    // not a confirmation, only a wait for the read replica
    thread::sleep(config.settle_delay);

    // the initialized flag is reported, not enforced
    let escrow_state: EscrowState = fetch_unchecked(rpc, &escrow_account.pubkey())?;

    msg!(
        "Successfully transferred {} from {} to {}",
        accounts.amount,
        accounts.initializer_x_token_account,
        escrow_state.temp_token_account_pubkey
    );
    msg!(
        "Expecting to receive {} in account {}",
        escrow_state.expected_amount,
        escrow_state.initializer_token_to_receive_account_pubkey
    );
    msg!("end initialize");

    Ok(InitEscrowOutcome {
        signature: signature.to_string(),
        escrow_account_pubkey: escrow_account.pubkey().to_string(),
        escrow: EscrowSummary::from(&escrow_state),
    })
}
