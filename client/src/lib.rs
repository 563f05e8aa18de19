//! Client for the token escrow program.
//!
//! Builds and submits the program's `InitEscrow` and `Exchange` transactions
//! and decodes the escrow account it writes. The program itself is deployed
//! separately; everything here talks to it through its instruction interface.

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod instructions;
pub mod payload;
pub mod state;
pub mod traits;
pub mod utils;


pub use client::EscrowClient;
pub use config::{ClientConfig, LOCALNET_URL};
pub use errors::EscrowClientError;
pub use instructions::{InitEscrowOutcome, TakeTradeOutcome};
pub use payload::{EscrowInstruction, InstructionEncoding, InstructionPayload};
pub use state::{find_escrow_authority, EscrowState, EscrowSummary, ESCROW_PDA_SEED};
pub use traits::EscrowRpc;
