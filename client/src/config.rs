use std::time::Duration;

use solana_sdk::commitment_config::CommitmentConfig;

use crate::payload::InstructionEncoding;

pub const LOCALNET_URL: &str = "http://localhost:8899";

/// Wait between submitting `InitEscrow` and re-reading the escrow account.
pub const STATE_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Tuning for a client. The endpoint is always [`LOCALNET_URL`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub commitment: CommitmentConfig,
    pub settle_delay: Duration,
    pub encoding: InstructionEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            commitment: CommitmentConfig::confirmed(),
            settle_delay: STATE_SETTLE_DELAY,
            encoding: InstructionEncoding::Borsh,
        }
    }
}

impl ClientConfig {
    pub fn with_encoding(mut self, encoding: InstructionEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }
}
