// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Simulates the designs of the FPGA development board.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use fpga_dev_board::actions::{self, RunOptions};
use fpga_dev_board::error::SimError;
use kernel::hil::time::{Freq1MHz, Frequency};
use kernel::hil::uart;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference clock frequency in Hz. Defaults to 1MHz for the single
    /// block runs and to the board oscillator otherwise.
    #[arg(long, global = true)]
    clock_hz: Option<u32>,

    /// Serial line baud rate.
    #[arg(long, global = true, default_value_t = uart::DEFAULT_BAUD_RATE)]
    baud: u32,

    /// Write a VCD waveform of the run to this file.
    #[arg(long, global = true)]
    vcd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transmit one byte and decode the line.
    SimulateTx {
        #[arg(long, default_value_t = 0b0000_1111)]
        byte: u8,
    },
    /// Pulse the receive line low for 40µs and report what is received.
    SimulateRx,
    /// Send a byte to the echo design and time the echo.
    SimulateEcho {
        #[arg(long, default_value_t = b'X')]
        byte: u8,
    },
    /// Decode the output of the Hello World design.
    Hello {
        #[arg(long, default_value_t = 2)]
        messages: usize,
    },
}

fn options(cli: &Cli, default_hz: u32) -> RunOptions {
    RunOptions {
        reference_hz: cli.clock_hz.unwrap_or(default_hz),
        params: uart::Parameters::new(cli.baud),
        vcd: cli.vcd.clone(),
    }
}

fn printable(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}

fn run(cli: &Cli) -> Result<(), SimError> {
    match cli.command {
        Command::SimulateTx { byte } => {
            let options = options(cli, Freq1MHz::frequency());
            let report = actions::simulate_tx(&options, byte)?;
            println!("{}", "simulate-tx".bold());
            println!("  decoded   {:#04x}", report.decoded[0]);
            println!(
                "  busy      {} ticks ({}µs, {} bit periods)",
                report.busy_ticks,
                report.busy_us,
                report.busy_ticks / report.bit_ticks
            );
        }
        Command::SimulateRx => {
            let options = options(cli, Freq1MHz::frequency());
            let events = actions::simulate_rx(&options)?;
            println!("{}", "simulate-rx".bold());
            if events.is_empty() {
                println!("  {}", "nothing received".yellow());
            }
            for event in events {
                println!("  {:#04x} at {}µs", event.byte, event.at_us);
            }
        }
        Command::SimulateEcho { byte } => {
            let options = options(cli, fpga_dev_board::reference_hz());
            let report = actions::simulate_echo(&options, byte)?;
            println!("{}", "simulate-echo".bold());
            println!(
                "  sent {:#04x}, echoed {:#04x} {}",
                report.sent,
                report.echoed,
                "ok".green()
            );
            println!(
                "  round trip {} ticks ({}.{:03}ms)",
                report.round_trip_ticks,
                report.round_trip_us / 1_000,
                report.round_trip_us % 1_000
            );
        }
        Command::Hello { messages } => {
            let options = options(cli, fpga_dev_board::reference_hz());
            let report = actions::simulate_hello(&options, messages)?;
            println!("{}", "hello".bold());
            println!("  \"{}\"", printable(&report.text));
            for pair in report.message_ticks.windows(2) {
                println!("  message period {} ticks", pair[1] - pair[0]);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
