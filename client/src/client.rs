use solana_client::rpc_client::RpcClient;

use crate::config::{ClientConfig, LOCALNET_URL};
use crate::errors::EscrowClientError;
use crate::instructions::{self, Exchange, InitEscrowOutcome, Initialize, TakeTradeOutcome};
use crate::state::{EscrowState, EscrowSummary};
use crate::traits::EscrowRpc;
use crate::utils::{fetch_initialized, parse_keypair_bytes, parse_pubkey};

/// Entry point taking the string-encoded arguments the operations are called with.
///
/// Each call is fire-and-confirm: a failed submission is returned as is and
/// nothing is retried or rolled back.
pub struct EscrowClient<R = RpcClient> {
    rpc: R,
    config: ClientConfig,
}

impl EscrowClient<RpcClient> {
    pub fn localnet() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(LOCALNET_URL.to_string(), config.commitment);
        Self { rpc, config }
    }
}

impl<R: EscrowRpc> EscrowClient<R> {
    pub fn new(rpc: R, config: ClientConfig) -> Self {
        Self { rpc, config }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn init_escrow(
        &self,
        private_key_bytes: &str,
        initializer_x_token_account: &str,
        amount: u64,
        initializer_receiving_token_account: &str,
        expected_amount: u64,
        program_id: &str,
    ) -> Result<InitEscrowOutcome, EscrowClientError> {
        let accounts = Initialize {
            initializer: parse_keypair_bytes(private_key_bytes)?,
            initializer_x_token_account: parse_pubkey(initializer_x_token_account)?,
            amount,
            initializer_receiving_token_account: parse_pubkey(
                initializer_receiving_token_account,
            )?,
            expected_amount,
            program_id: parse_pubkey(program_id)?,
        };
        instructions::initialize::handler(&self.rpc, &self.config, &accounts)
    }

    pub fn take_trade(
        &self,
        private_key_bytes: &str,
        escrow_account: &str,
        taker_x_token_account: &str,
        taker_y_token_account: &str,
        taker_expected_x_token_amount: u64,
        program_id: &str,
    ) -> Result<TakeTradeOutcome, EscrowClientError> {
        let accounts = Exchange {
            taker: parse_keypair_bytes(private_key_bytes)?,
            escrow_account: parse_pubkey(escrow_account)?,
            taker_x_token_account: parse_pubkey(taker_x_token_account)?,
            taker_y_token_account: parse_pubkey(taker_y_token_account)?,
            taker_expected_x_token_amount,
            program_id: parse_pubkey(program_id)?,
        };
        instructions::exchange::handler(&self.rpc, &self.config, &accounts)
    }

    pub fn show_escrow(&self, escrow_account: &str) -> Result<EscrowSummary, EscrowClientError> {
        let escrow_state: EscrowState =
            fetch_initialized(&self.rpc, &parse_pubkey(escrow_account)?)?;
        Ok(EscrowSummary::from(&escrow_state))
    }
}
