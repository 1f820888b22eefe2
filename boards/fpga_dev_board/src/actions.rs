// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Simulation runs offered by the board binary.
//!
//! Each run builds its design from the given reference frequency and line
//! parameters, optionally records a VCD waveform, and returns what it
//! observed.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use capsules_core::hello_world::MESSAGE;
use capsules_core::uart_tx::TxInput;
use components::uart::{UartRxComponent, UartTxComponent};
use kernel::component::Component;
use kernel::hil::clocked::{Clocked, Probe};
use kernel::hil::time;
use kernel::hil::uart;
use kernel::sim::Simulator;

use crate::error::SimError;
use crate::host::SerialHost;

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub reference_hz: u32,
    pub params: uart::Parameters,
    pub vcd: Option<PathBuf>,
}

impl RunOptions {
    fn simulator<D: Clocked + Probe>(&self, design: D) -> Result<Simulator<D>, SimError> {
        let sim = Simulator::new(design, self.reference_hz);
        Ok(match &self.vcd {
            Some(path) => sim.with_trace(Box::new(BufWriter::new(File::create(path)?))),
            None => sim,
        })
    }

    fn us(&self, ticks: u64) -> u64 {
        time::us_from_ticks(self.reference_hz, ticks)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TxReport {
    pub decoded: Vec<u8>,
    pub bit_ticks: u64,
    pub busy_ticks: u64,
    pub busy_us: u64,
}

/// Writes `byte` after 5µs, holding the write request for 2µs, and watches
/// the line for 1ms.
pub fn simulate_tx(options: &RunOptions, byte: u8) -> Result<TxReport, SimError> {
    let tx = UartTxComponent::new(options.reference_hz, options.params).finalize()?;
    let bit_ticks = tx.bit_ticks() as u64;
    let mut host = SerialHost::for_reference(options.reference_hz, options.params)?;
    let mut sim = options.simulator(tx)?;

    let write_start = sim.ticks_from_us(5);
    let write_end = write_start + sim.ticks_from_us(2).max(1);
    let end = write_end + sim.ticks_from_ms(1);

    let mut busy_ticks = 0;
    while sim.now() < end {
        let input = if (write_start..write_end).contains(&sim.now()) {
            TxInput::write(byte)
        } else {
            TxInput::idle()
        };
        let out = sim.step(input);
        if out.busy {
            busy_ticks += 1;
        }
        host.tick(out.line);
    }
    sim.finish()?;

    let decoded: Vec<u8> = host.received().iter().map(|r| r.byte).collect();
    if decoded != [byte] {
        return Err(SimError::Mismatch {
            sent: byte,
            decoded,
        });
    }
    Ok(TxReport {
        decoded,
        bit_ticks,
        busy_ticks,
        busy_us: options.us(busy_ticks),
    })
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RxEvent {
    pub byte: u8,
    pub at_us: u64,
}

/// Pulls the receive line low from 10µs to 50µs and collects every byte the
/// receiver publishes within 40ms.
pub fn simulate_rx(options: &RunOptions) -> Result<Vec<RxEvent>, SimError> {
    let rx = UartRxComponent::new(options.reference_hz, options.params).finalize()?;
    let mut sim = options.simulator(rx)?;

    let low_start = sim.ticks_from_us(10);
    let low_end = sim.ticks_from_us(50);
    let end = sim.ticks_from_ms(40);

    let mut events = Vec::new();
    while sim.now() < end {
        let line = !(low_start..low_end).contains(&sim.now());
        let out = sim.step(line);
        if out.data_ready {
            events.push(RxEvent {
                byte: out.data,
                at_us: sim.elapsed_us(),
            });
        }
    }
    sim.finish()?;
    Ok(events)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EchoReport {
    pub sent: u8,
    pub echoed: u8,
    /// From the start bit sent by the host to the start bit of the echo.
    pub round_trip_ticks: u64,
    pub round_trip_us: u64,
}

/// Sends `byte` to the echo design and waits up to three seconds for it to
/// come back.
pub fn simulate_echo(options: &RunOptions, byte: u8) -> Result<EchoReport, SimError> {
    let mut bench = crate::echo_bench(options.reference_hz, options.params)?;
    bench.host_mut().write(byte);
    let mut sim = options.simulator(bench)?;

    let limit = time::ticks_from_seconds(options.reference_hz, 3);
    while sim.design().host().received().is_empty() {
        if sim.now() >= limit {
            return Err(SimError::Timeout {
                what: "echo",
                ticks: limit,
            });
        }
        sim.step(());
    }

    let bench = sim.finish()?;
    let sent = bench.host().sent()[0];
    let echoed = bench.host().received()[0];
    if echoed.byte != sent.byte {
        return Err(SimError::Mismatch {
            sent: sent.byte,
            decoded: vec![echoed.byte],
        });
    }
    let round_trip_ticks = echoed.start_tick - sent.start_tick;
    Ok(EchoReport {
        sent: sent.byte,
        echoed: echoed.byte,
        round_trip_ticks,
        round_trip_us: options.us(round_trip_ticks),
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct HelloReport {
    pub text: Vec<u8>,
    /// Host tick of the first start bit of every message.
    pub message_ticks: Vec<u64>,
}

/// Runs the beacon until the host has decoded `messages` full messages.
pub fn simulate_hello(options: &RunOptions, messages: usize) -> Result<HelloReport, SimError> {
    let bench = crate::hello_bench(options.reference_hz, options.params)?;
    let mut sim = options.simulator(bench)?;

    let wanted = messages * MESSAGE.len();
    let limit = time::ticks_from_seconds(options.reference_hz, messages as u64 + 1);
    while sim.design().host().received().len() < wanted {
        if sim.now() >= limit {
            return Err(SimError::Timeout {
                what: "complete message",
                ticks: limit,
            });
        }
        sim.step(());
    }

    let bench = sim.finish()?;
    let received = bench.host().received();
    Ok(HelloReport {
        text: received.iter().map(|r| r.byte).collect(),
        message_ticks: received
            .iter()
            .step_by(MESSAGE.len())
            .map(|r| r.start_tick)
            .collect(),
    })
}
