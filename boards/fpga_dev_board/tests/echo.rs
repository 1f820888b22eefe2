// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! End-to-end runs of the echo design against the host model.
//!
//! A 2.1MHz reference clock at 100000 baud gives 22 edges per bit and an
//! exact half-bit divider, which keeps a full second of hold time short to
//! simulate.

use capsules_core::uart_echo::State;
use components::uart_echo::UartEchoComponent;
use fpga_dev_board::actions::{self, RunOptions};
use fpga_dev_board::bench::Bench;
use fpga_dev_board::echo_bench;
use fpga_dev_board::host::SerialHost;
use kernel::component::Component;
use kernel::hil::uart::Parameters;
use kernel::sim::Simulator;

const REFERENCE_HZ: u32 = 2_100_000;
const BAUD: u32 = 100_000;
const BIT_TICKS: u64 = 22;

fn options() -> RunOptions {
    RunOptions {
        reference_hz: REFERENCE_HZ,
        params: Parameters::new(BAUD),
        vcd: None,
    }
}

#[test]
fn echoes_x_after_one_second() {
    let report = actions::simulate_echo(&options(), 0x58).unwrap();
    assert_eq!(report.echoed, 0x58);

    // One second of hold plus the reception of the frame.
    let hold = report.round_trip_ticks - REFERENCE_HZ as u64;
    assert!(hold < 12 * BIT_TICKS, "round trip {}", report.round_trip_ticks);
    assert!(report.round_trip_us >= 1_000_000);
}

#[test]
fn only_newest_pending_byte_is_echoed() {
    let mut bench = echo_bench(REFERENCE_HZ, Parameters::new(BAUD)).unwrap();
    bench.host_mut().write(b'a');
    bench.host_mut().write(b'b');
    let mut sim = Simulator::new(bench, REFERENCE_HZ);

    sim.run_for(REFERENCE_HZ as u64 + 100 * BIT_TICKS, |_| ());

    let bench = sim.finish().unwrap();
    let echoed: Vec<u8> = bench.host().received().iter().map(|r| r.byte).collect();
    assert_eq!(echoed, b"b");
    assert_eq!(bench.dut().state(), State::Idle);
}

#[test]
fn indicators_light_during_traffic() {
    let mut bench = echo_bench(REFERENCE_HZ, Parameters::new(BAUD)).unwrap();
    bench.host_mut().write(0x00);
    let mut sim = Simulator::new(bench, REFERENCE_HZ);

    let out = sim.run_for(5 * BIT_TICKS, |_| ());
    assert!(out.dut.rx_led);
    assert!(!out.dut.tx_led);

    // The echo starts a second later and the receive indicator has decayed.
    let echo_start = sim
        .run_until(2 * REFERENCE_HZ as u64, |_| (), |out| !out.dut.tx)
        .unwrap();
    assert!(echo_start > REFERENCE_HZ as u64);
    let out = sim.run_for(2, |_| ());
    assert!(out.dut.tx_led);
    assert!(!out.dut.rx_led);
}

#[test]
fn echoes_at_board_oscillator_rate() {
    // 29.498MHz at 115200 baud, with a 1ms hold so the run stays short.
    let reference_hz = fpga_dev_board::reference_hz();
    let params = Parameters::default();
    let dut = UartEchoComponent::new(reference_hz, params)
        .with_hold_hz(1_000)
        .finalize()
        .unwrap();
    let mut bench = Bench::new(dut, SerialHost::for_reference(reference_hz, params).unwrap());
    bench.host_mut().write(0xe5);

    let mut sim = Simulator::new(bench, reference_hz);
    let ticks = sim.ticks_from_ms(2);
    sim.run_for(ticks, |_| ());

    let received: Vec<u8> = sim.design().host().received().iter().map(|r| r.byte).collect();
    assert_eq!(received, [0xe5]);
    assert!(sim.output().dut.tx);
}
