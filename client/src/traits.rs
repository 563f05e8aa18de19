use anchor_lang::prelude::Pubkey;
use solana_client::{rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{account::Account, hash::Hash, signature::Signature, transaction::Transaction};

use crate::errors::EscrowClientError;

/// The network calls the escrow operations make, in the order they make them.
pub trait EscrowRpc {
    /// `Ok(None)` when the account does not exist.
    fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, EscrowClientError>;
    fn minimum_balance_for_rent_exemption(&self, data_len: usize)
        -> Result<u64, EscrowClientError>;
    fn latest_blockhash(&self) -> Result<Hash, EscrowClientError>;
    /// Submits with preflight; does not wait for confirmation.
    fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, EscrowClientError>;
}

impl EscrowRpc for RpcClient {
    fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, EscrowClientError> {
        Ok(self
            .get_account_with_commitment(pubkey, self.commitment())?
            .value)
    }

    fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, EscrowClientError> {
        Ok(self.get_minimum_balance_for_rent_exemption(data_len)?)
    }

    fn latest_blockhash(&self) -> Result<Hash, EscrowClientError> {
        Ok(self.get_latest_blockhash()?)
    }

    fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, EscrowClientError> {
        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(self.commitment().commitment),
            ..RpcSendTransactionConfig::default()
        };
        Ok(self.send_transaction_with_config(transaction, config)?)
    }
}
