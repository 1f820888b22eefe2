// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use std::fs;

use capsules_core::hello_world::MESSAGE;
use fpga_dev_board::actions::{self, RunOptions};
use fpga_dev_board::error::SimError;
use kernel::hil::uart::Parameters;
use kernel::ErrorCode;

fn at_1mhz() -> RunOptions {
    RunOptions {
        reference_hz: 1_000_000,
        params: Parameters::default(),
        vcd: None,
    }
}

#[test]
fn tx_run_decodes_and_counts_busy() {
    let report = actions::simulate_tx(&at_1mhz(), 0b0000_1111).unwrap();
    assert_eq!(report.decoded, [0b0000_1111]);
    // 1MHz / 115200 rounds down to a period of 8: nine ticks per bit.
    assert_eq!(report.bit_ticks, 9);
    assert_eq!(report.busy_ticks, 10 * 9);
    assert_eq!(report.busy_us, 90);
}

#[test]
fn rx_run_reads_a_long_low_pulse() {
    let events = actions::simulate_rx(&at_1mhz()).unwrap();
    // The pulse covers the start bit and the first three data bits.
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].byte, 0xf8);
    assert!(events[0].at_us > 50 && events[0].at_us < 150);
}

#[test]
fn hello_repeats_once_per_pause() {
    let options = RunOptions {
        reference_hz: 2_100_000,
        params: Parameters::new(100_000),
        vcd: None,
    };
    let report = actions::simulate_hello(&options, 2).unwrap();
    assert_eq!(&report.text[..MESSAGE.len()], MESSAGE);
    assert_eq!(&report.text[MESSAGE.len()..], MESSAGE);

    let period = report.message_ticks[1] - report.message_ticks[0];
    assert!(period > 2_100_000);
    assert!(period < 2_100_000 + 14 * 10 * 22);
}

#[test]
fn baud_above_reference_is_rejected() {
    let options = RunOptions {
        reference_hz: 100_000,
        params: Parameters::new(115_200),
        vcd: None,
    };
    assert!(matches!(
        actions::simulate_tx(&options, 0x55),
        Err(SimError::Parameters(ErrorCode::INVAL))
    ));
}

#[test]
fn tx_run_writes_waveform() {
    let path = std::env::temp_dir().join(format!("fpga-dev-board-tx-{}.vcd", std::process::id()));
    let options = RunOptions {
        vcd: Some(path.clone()),
        ..at_1mhz()
    };
    actions::simulate_tx(&options, 0x42).unwrap();

    let vcd = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert!(vcd.contains("$timescale 1ps $end"));
    assert!(vcd.contains("$scope module baud $end"));
    assert!(vcd.contains(" busy $end"));
    assert!(vcd.contains("#6000000\n"));
}
