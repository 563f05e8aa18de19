//! Argument handling behind the `escrow-client` binary.
//!
//! Stdout carries only the JSON outcome of a command. `msg!` lines are
//! routed elsewhere through [`LogStubs`].

use std::error::Error;
use std::io::{self, Write};
use std::sync::Mutex;

use anchor_lang::solana_program::program_stubs::{set_syscall_stubs, SyscallStubs};
use serde::Serialize;

use crate::client::EscrowClient;
use crate::config::ClientConfig;
use crate::payload::InstructionEncoding;
use crate::traits::EscrowRpc;
use crate::utils::parse_amount;

pub const USAGE: &str = "Usage:
  escrow-client init <key-bytes> <x-token-account> <amount> <receiving-token-account> <expected-amount> <program-id> [--packed]
  escrow-client take <key-bytes> <escrow-account> <taker-x-token-account> <taker-y-token-account> <expected-amount> <program-id> [--packed]
  escrow-client show <escrow-account>";

/// Syscall stubs that write `msg!` output to `sink`.
pub struct LogStubs {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl LogStubs {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl SyscallStubs for LogStubs {
    fn sol_log(&self, message: &str) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = writeln!(sink, "{}", message);
        }
    }
}

pub fn log_to_stderr() {
    set_syscall_stubs(Box::new(LogStubs::new(Box::new(io::stderr()))));
}

/// Runs one command. `args` excludes the program name; `connect` builds the
/// client once the encoding flag is known.
pub fn run<R, F>(
    mut args: Vec<String>,
    connect: F,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>>
where
    R: EscrowRpc,
    F: FnOnce(ClientConfig) -> EscrowClient<R>,
{
    let encoding = match args.iter().position(|a| a == "--packed") {
        Some(index) => {
            args.remove(index);
            InstructionEncoding::Packed
        }
        None => InstructionEncoding::Borsh,
    };

    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    if !matches!(args.first(), Some(&"init" | &"take" | &"show")) {
        return Err(USAGE.into());
    }
    let client = connect(ClientConfig::default().with_encoding(encoding));

    match args.as_slice() {
        ["init", key, x_token_account, amount, receiving_token_account, expected_amount, program_id] => {
            let outcome = client.init_escrow(
                key,
                x_token_account,
                parse_amount(amount)?,
                receiving_token_account,
                parse_amount(expected_amount)?,
                program_id,
            )?;
            write_json(out, &outcome)
        }
        ["take", key, escrow_account, taker_x_token_account, taker_y_token_account, expected_amount, program_id] => {
            let outcome = client.take_trade(
                key,
                escrow_account,
                taker_x_token_account,
                taker_y_token_account,
                parse_amount(expected_amount)?,
                program_id,
            )?;
            write_json(out, &outcome)
        }
        ["show", escrow_account] => write_json(out, &client.show_escrow(escrow_account)?),
        _ => Err(USAGE.into()),
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), Box<dyn Error>> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
