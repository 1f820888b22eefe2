// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! UART receiver.
//!
//! The raw line goes through a [`SyncRegister`] first; the state machine only
//! looks at the synchronized level. A low level while idle starts a frame and
//! enables a divider running at twice the bit rate. Its first strobe lands in
//! the middle of the start bit, and from then on every second strobe is the
//! middle of the next bit. Eight data bits are shifted in least significant
//! first, and the byte is published with a one-edge `data_ready` pulse at the
//! middle of the stop bit.
//!
//! The stop bit is not checked. A malformed frame is delivered as if it were
//! well formed.

use kernel::config::CONFIG;
use kernel::debug;
use kernel::hil::clocked::{probe_scope, width_for, Clocked, Probe, ProbeSink};
use kernel::hil::uart;

use crate::synchronizer::SyncRegister;
use crate::tick_generator::TickGenerator;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum State {
    Idle,
    HalfBaudWait,
    Sampling,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RxOutput {
    /// Last received byte, valid from the `data_ready` pulse on.
    pub data: u8,
    pub data_ready: bool,
}

pub struct UartRx {
    state: State,
    sync: SyncRegister,
    shift_register: u8,
    bit_count: u8,
    /// Half-bit strobes seen since the last sample point.
    baud_subcounter: u8,
    received: u8,
    data_ready: bool,
    half_baud: TickGenerator,
    half_baud_enable: bool,
}

impl UartRx {
    /// `half_baud` strobes twice per bit period.
    pub fn new(half_baud: TickGenerator) -> UartRx {
        UartRx {
            state: State::Idle,
            sync: SyncRegister::new(),
            shift_register: 0,
            bit_count: 0,
            baud_subcounter: 0,
            received: 0,
            data_ready: false,
            half_baud,
            half_baud_enable: false,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Whether a full bit period elapsed since the last sample point.
    fn full_bit(&mut self) -> bool {
        self.baud_subcounter += 1;
        if self.baud_subcounter == 2 {
            self.baud_subcounter = 0;
            true
        } else {
            false
        }
    }

    fn transition(&mut self, next: State) {
        if CONFIG.trace_transitions {
            debug!("uart_rx: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

impl Clocked for UartRx {
    /// Raw receive line.
    type Input = bool;
    type Output = RxOutput;

    fn output(&self) -> RxOutput {
        RxOutput {
            data: self.received,
            data_ready: self.data_ready,
        }
    }

    fn tick(&mut self, line: bool) {
        let level = self.sync.level();
        let half_bit_tick = self.half_baud.output();

        match self.state {
            State::Idle => {
                self.data_ready = false;
                if level == uart::START_BIT {
                    self.half_baud_enable = true;
                    self.transition(State::HalfBaudWait);
                }
            }
            State::HalfBaudWait => {
                if half_bit_tick {
                    self.baud_subcounter = 0;
                    self.transition(State::Sampling);
                }
            }
            State::Sampling => {
                if half_bit_tick && self.full_bit() {
                    self.shift_register = (self.shift_register >> 1) | ((level as u8) << 7);
                    self.bit_count += 1;
                    if self.bit_count as usize == uart::DATA_BITS {
                        self.transition(State::Done);
                    }
                }
            }
            State::Done => {
                if half_bit_tick && self.full_bit() {
                    self.received = self.shift_register;
                    self.data_ready = true;
                    self.bit_count = 0;
                    self.half_baud_enable = false;
                    if CONFIG.trace_bytes {
                        debug!("uart_rx: received {:#04x}", self.received);
                    }
                    self.transition(State::Idle);
                }
            }
        }

        self.sync.tick(line);
        self.half_baud.tick(self.half_baud_enable);
    }
}

impl Probe for UartRx {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("state", 2, self.state as u32);
        sink.signal("shift_register", 8, self.shift_register as u32);
        sink.signal("bit_count", width_for(uart::DATA_BITS as u32), self.bit_count as u32);
        sink.signal("baud_subcounter", 1, self.baud_subcounter as u32);
        sink.signal("data", 8, self.received as u32);
        sink.signal("data_ready", 1, self.data_ready as u32);
        probe_scope(sink, "sync", &self.sync);
        probe_scope(sink, "half_baud", &self.half_baud);
    }
}
