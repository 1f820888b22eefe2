// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Test bench wiring a board design to a [`SerialHost`].

use capsules_core::hello_world::{HelloOutput, HelloWorld};
use capsules_core::uart_echo::{EchoOutput, UartEcho};
use kernel::hil::clocked::{probe_scope, Clocked, Probe, ProbeSink};

use crate::host::SerialHost;

/// A design with a serial port on its pins.
pub trait SerialDevice: Clocked + Probe {
    /// Level of the design's transmit pin.
    fn tx_line(output: &Self::Output) -> bool;

    /// Input that drives the design's receive pin to `line`.
    fn rx_input(line: bool) -> Self::Input;
}

impl SerialDevice for UartEcho {
    fn tx_line(output: &EchoOutput) -> bool {
        output.tx
    }

    fn rx_input(line: bool) -> bool {
        line
    }
}

impl SerialDevice for HelloWorld {
    fn tx_line(output: &HelloOutput) -> bool {
        output.tx
    }

    // No receive pin.
    fn rx_input(_line: bool) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchOutput<O> {
    pub dut: O,
    /// Level the host drives onto the design's receive pin.
    pub host_tx: bool,
}

pub struct Bench<D: SerialDevice> {
    dut: D,
    host: SerialHost,
}

impl<D: SerialDevice> Bench<D> {
    pub fn new(dut: D, host: SerialHost) -> Bench<D> {
        Bench { dut, host }
    }

    pub fn dut(&self) -> &D {
        &self.dut
    }

    pub fn host(&self) -> &SerialHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SerialHost {
        &mut self.host
    }
}

impl<D: SerialDevice> Clocked for Bench<D> {
    type Input = ();
    type Output = BenchOutput<D::Output>;

    fn output(&self) -> BenchOutput<D::Output> {
        BenchOutput {
            dut: self.dut.output(),
            host_tx: self.host.output(),
        }
    }

    fn tick(&mut self, _input: ()) {
        let host_tx = self.host.output();
        let board_tx = D::tx_line(&self.dut.output());
        self.dut.tick(D::rx_input(host_tx));
        self.host.tick(board_tx);
    }
}

impl<D: SerialDevice> Probe for Bench<D> {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        probe_scope(sink, "dut", &self.dut);
        probe_scope(sink, "host", &self.host);
    }
}
