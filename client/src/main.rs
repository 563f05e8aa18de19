//! Command line front end for the escrow client.
//!
//! Usage:
//!   escrow-client init <key-bytes> <x-token-account> <amount> <receiving-token-account> <expected-amount> <program-id> [--packed]
//!   escrow-client take <key-bytes> <escrow-account> <taker-x-token-account> <taker-y-token-account> <expected-amount> <program-id> [--packed]
//!   escrow-client show <escrow-account>
//!
//! `<key-bytes>` is the signer's secret key as `#,#,...,#`. Talks to a local
//! validator at http://localhost:8899. The outcome is printed to stdout as
//! JSON; progress lines go to stderr.

use std::io;

use escrow_client::{cli, EscrowClient};
use solana_client::rpc_client::RpcClient;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    cli::log_to_stderr();
    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::run(args, EscrowClient::<RpcClient>::with_config, &mut io::stdout().lock())
}
