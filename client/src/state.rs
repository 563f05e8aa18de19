use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::{
    program_error::ProgramError,
    program_pack::{IsInitialized, Pack, Sealed},
};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use serde::Serialize;

pub const ESCROW_PDA_SEED: &[u8] = b"escrow";

/// Escrow account data as written by the program's `InitEscrow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscrowState {
    pub is_initialized: bool,
    pub initializer_pubkey: Pubkey,
    pub temp_token_account_pubkey: Pubkey,
    pub initializer_token_to_receive_account_pubkey: Pubkey,
    pub expected_amount: u64,
}

impl Sealed for EscrowState {}

impl IsInitialized for EscrowState {
    fn is_initialized(&self) -> bool {
        self.is_initialized
    }
}

impl Pack for EscrowState {
    const LEN: usize = 1 // is_initialized
        + 32 // initializer_pubkey
        + 32 // temp_token_account_pubkey
        + 32 // initializer_token_to_receive_account_pubkey
        + 8; // expected_amount

    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        let src = array_ref![src, 0, EscrowState::LEN];
        let (
            is_initialized,
            initializer_pubkey,
            temp_token_account_pubkey,
            initializer_token_to_receive_account_pubkey,
            expected_amount,
        ) = array_refs![src, 1, 32, 32, 32, 8];
        let is_initialized = match is_initialized {
            [0] => false,
            [1] => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(EscrowState {
            is_initialized,
            initializer_pubkey: Pubkey::new_from_array(*initializer_pubkey),
            temp_token_account_pubkey: Pubkey::new_from_array(*temp_token_account_pubkey),
            initializer_token_to_receive_account_pubkey: Pubkey::new_from_array(
                *initializer_token_to_receive_account_pubkey,
            ),
            expected_amount: u64::from_le_bytes(*expected_amount),
        })
    }

    fn pack_into_slice(&self, dst: &mut [u8]) {
        let dst = array_mut_ref![dst, 0, EscrowState::LEN];
        let (
            is_initialized_dst,
            initializer_pubkey_dst,
            temp_token_account_pubkey_dst,
            initializer_token_to_receive_account_pubkey_dst,
            expected_amount_dst,
        ) = mut_array_refs![dst, 1, 32, 32, 32, 8];

        is_initialized_dst[0] = self.is_initialized as u8;
        initializer_pubkey_dst.copy_from_slice(self.initializer_pubkey.as_ref());
        temp_token_account_pubkey_dst.copy_from_slice(self.temp_token_account_pubkey.as_ref());
        initializer_token_to_receive_account_pubkey_dst
            .copy_from_slice(self.initializer_token_to_receive_account_pubkey.as_ref());
        *expected_amount_dst = self.expected_amount.to_le_bytes();
    }
}

/// Authority the program signs with when it moves tokens out of the temp account.
pub fn find_escrow_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_PDA_SEED], program_id)
}

/// Escrow state with keys rendered as base58 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowSummary {
    pub is_initialized: bool,
    pub initializer_account_pubkey: String,
    #[serde(rename = "XTokenTempAccountPubkey")]
    pub x_token_temp_account_pubkey: String,
    pub initializer_y_token_account: String,
    pub expected_amount: u64,
}

impl From<&EscrowState> for EscrowSummary {
    fn from(state: &EscrowState) -> Self {
        Self {
            is_initialized: state.is_initialized,
            initializer_account_pubkey: state.initializer_pubkey.to_string(),
            x_token_temp_account_pubkey: state.temp_token_account_pubkey.to_string(),
            initializer_y_token_account: state
                .initializer_token_to_receive_account_pubkey
                .to_string(),
            expected_amount: state.expected_amount,
        }
    }
}
