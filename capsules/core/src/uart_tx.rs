// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! UART transmitter.
//!
//! Serializes one byte per write request as an 8-N-1 frame: a start bit, the
//! eight data bits least significant first and a stop bit, each lasting one
//! period of the bit-rate tick generator. `busy` is high for exactly the ten
//! bit periods of the frame.
//!
//! There is no buffering: a write request while `busy` is high is ignored, so
//! callers poll `busy` before issuing the next one.

use kernel::config::CONFIG;
use kernel::debug;
use kernel::hil::clocked::{probe_scope, width_for, Clocked, Probe, ProbeSink};
use kernel::hil::uart;

use crate::tick_generator::TickGenerator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum State {
    Idle,
    Sending,
    Finishing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TxInput {
    /// Write request, sampled while idle.
    pub write: bool,
    pub data: u8,
}

impl TxInput {
    pub const fn idle() -> TxInput {
        TxInput {
            write: false,
            data: 0,
        }
    }

    pub const fn write(data: u8) -> TxInput {
        TxInput { write: true, data }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TxOutput {
    pub busy: bool,
    /// Serial line, idles high.
    pub line: bool,
}

pub struct UartTx {
    state: State,
    shift_register: u8,
    bit_count: u8,
    busy: bool,
    line: bool,
    baud: TickGenerator,
    baud_enable: bool,
}

impl UartTx {
    /// `baud` strobes once per bit period.
    pub fn new(baud: TickGenerator) -> UartTx {
        UartTx {
            state: State::Idle,
            shift_register: 0,
            bit_count: 0,
            busy: false,
            line: uart::IDLE,
            baud,
            baud_enable: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Reference edges per bit.
    pub fn bit_ticks(&self) -> u32 {
        self.baud.period() + 1
    }

    fn transition(&mut self, next: State) {
        if CONFIG.trace_transitions {
            debug!("uart_tx: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

impl Clocked for UartTx {
    type Input = TxInput;
    type Output = TxOutput;

    fn output(&self) -> TxOutput {
        TxOutput {
            busy: self.busy,
            line: self.line,
        }
    }

    fn tick(&mut self, input: TxInput) {
        let bit_tick = self.baud.output();

        match self.state {
            State::Idle => {
                if input.write && !self.busy {
                    if CONFIG.trace_bytes {
                        debug!("uart_tx: sending {:#04x}", input.data);
                    }
                    self.shift_register = input.data;
                    self.busy = true;
                    self.line = uart::START_BIT;
                    self.baud_enable = true;
                    self.transition(State::Sending);
                }
            }
            State::Sending => {
                if bit_tick {
                    if (self.bit_count as usize) < uart::DATA_BITS {
                        self.line = self.shift_register & 1 == 1;
                        self.shift_register >>= 1;
                        self.bit_count += 1;
                    } else {
                        self.line = uart::STOP_BIT;
                        self.transition(State::Finishing);
                    }
                }
            }
            State::Finishing => {
                if bit_tick {
                    self.busy = false;
                    self.bit_count = 0;
                    self.baud_enable = false;
                    self.transition(State::Idle);
                }
            }
        }

        self.baud.tick(self.baud_enable);
    }
}

impl Probe for UartTx {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("state", 2, self.state as u32);
        sink.signal("busy", 1, self.busy as u32);
        sink.signal("tx", 1, self.line as u32);
        sink.signal("shift_register", 8, self.shift_register as u32);
        sink.signal("bit_count", width_for(uart::DATA_BITS as u32), self.bit_count as u32);
        probe_scope(sink, "baud", &self.baud);
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::{State, TxInput, UartTx};
    use crate::tick_generator::TickGenerator;
    use kernel::hil::clocked::Clocked;
    use kernel::hil::uart;

    const PERIOD: u32 = 3;
    const BIT_TICKS: usize = PERIOD as usize + 1;

    /// Line level and busy flag after each edge.
    fn drive(tx: &mut UartTx, inputs: &[TxInput]) -> Vec<(bool, bool)> {
        inputs
            .iter()
            .map(|&input| {
                tx.tick(input);
                let out = tx.output();
                (out.line, out.busy)
            })
            .collect()
    }

    fn expected_line(byte: u8) -> Vec<bool> {
        uart::frame_levels(byte)
            .iter()
            .flat_map(|&level| core::iter::repeat(level).take(BIT_TICKS))
            .collect()
    }

    fn stimulus(writes: &[(usize, u8)], len: usize) -> Vec<TxInput> {
        let mut inputs = std::vec![TxInput::idle(); len];
        for &(edge, data) in writes {
            inputs[edge] = TxInput::write(data);
        }
        inputs
    }

    #[test]
    fn idle_line_is_high() {
        let mut tx = UartTx::new(TickGenerator::new(PERIOD));
        let samples = drive(&mut tx, &stimulus(&[], 20));
        assert!(samples.iter().all(|&(line, busy)| line && !busy));
        assert_eq!(tx.state(), State::Idle);
    }

    #[test]
    fn frames_e5_in_ten_bit_periods() {
        let mut tx = UartTx::new(TickGenerator::new(PERIOD));
        let samples = drive(&mut tx, &stimulus(&[(2, 0xe5)], 60));

        // Before the write edge.
        assert_eq!(samples[..2], [(true, false), (true, false)]);

        let frame = &samples[2..2 + 10 * BIT_TICKS];
        let line: Vec<bool> = frame.iter().map(|&(line, _)| line).collect();
        assert_eq!(line, expected_line(0xe5));
        assert!(frame.iter().all(|&(_, busy)| busy));

        let after = &samples[2 + 10 * BIT_TICKS..];
        assert!(after.iter().all(|&(line, busy)| line && !busy));
        assert_eq!(tx.bit_ticks(), BIT_TICKS as u32);
    }

    #[test]
    fn busy_counts_exactly_ten_bit_periods() {
        for period in [0, 1, 7, 256] {
            let mut tx = UartTx::new(TickGenerator::new(period));
            let len = 12 * (period as usize + 1) + 4;
            let busy = drive(&mut tx, &stimulus(&[(1, 0x5a)], len))
                .iter()
                .filter(|&&(_, busy)| busy)
                .count();
            assert_eq!(busy, 10 * (period as usize + 1));
        }
    }

    #[test]
    fn write_while_busy_is_ignored() {
        let mut tx = UartTx::new(TickGenerator::new(PERIOD));
        let samples = drive(&mut tx, &stimulus(&[(0, 0x0f), (5, 0xff), (20, 0x00)], 80));
        let line: Vec<bool> = samples[..10 * BIT_TICKS].iter().map(|&(l, _)| l).collect();
        assert_eq!(line, expected_line(0x0f));
        assert!(samples[10 * BIT_TICKS..].iter().all(|&(line, busy)| line && !busy));
    }

    #[test]
    fn next_frame_may_start_once_busy_falls() {
        let mut tx = UartTx::new(TickGenerator::new(PERIOD));
        let frame = 10 * BIT_TICKS;
        let samples = drive(&mut tx, &stimulus(&[(0, 0x81), (frame + 1, 0x7e)], 2 * frame + 4));
        let line: Vec<bool> = samples.iter().map(|&(l, _)| l).collect();

        assert_eq!(line[..frame], expected_line(0x81)[..]);
        assert_eq!(samples[frame], (true, false));
        assert_eq!(line[frame + 1..2 * frame + 1], expected_line(0x7e)[..]);
        assert!(samples[frame + 1..2 * frame + 1].iter().all(|&(_, busy)| busy));
    }
}
