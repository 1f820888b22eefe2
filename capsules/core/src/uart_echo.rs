// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! UART echo link controller.
//!
//! Receives a byte, holds it for one period of the hold timer (one second on
//! the board) and transmits it back. Two activity indicators show traffic on
//! each line.
//!
//! ```text
//!        rx line ──> UartRx ──data_ready──> [ buffer ] ──write──> UartTx ──> tx line
//!           │                                    │                  │
//!           └──> rx ActivityLed         hold TickGenerator          └──> tx ActivityLed
//! ```
//!
//! Only one byte is ever pending. A byte that arrives while another one is
//! pending replaces it in the buffer and the hold timer keeps running, so only
//! the newest byte is echoed. Nothing reports the loss.

use kernel::config::CONFIG;
use kernel::debug;
use kernel::hil::clocked::{probe_scope, Clocked, Probe, ProbeSink};

use crate::activity_led::ActivityLed;
use crate::tick_generator::TickGenerator;
use crate::uart_rx::UartRx;
use crate::uart_tx::{TxInput, UartTx};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum State {
    Idle,
    Waiting,
    StartSend,
    Sending,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EchoOutput {
    pub tx: bool,
    pub tx_led: bool,
    pub rx_led: bool,
}

pub struct UartEcho {
    state: State,
    buffer: u8,
    tx_request: TxInput,
    hold_enable: bool,
    tx: UartTx,
    rx: UartRx,
    hold: TickGenerator,
    tx_led: ActivityLed,
    rx_led: ActivityLed,
}

impl UartEcho {
    pub fn new(
        tx: UartTx,
        rx: UartRx,
        hold: TickGenerator,
        tx_led: ActivityLed,
        rx_led: ActivityLed,
    ) -> UartEcho {
        UartEcho {
            state: State::Idle,
            buffer: 0,
            tx_request: TxInput::idle(),
            hold_enable: false,
            tx,
            rx,
            hold,
            tx_led,
            rx_led,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// The byte waiting to be echoed, or the last one echoed.
    pub fn buffer(&self) -> u8 {
        self.buffer
    }

    /// Edges from the receiver's `data_ready` pulse to the first edge of the
    /// echoed start bit.
    pub fn echo_latency(&self) -> u64 {
        self.hold.period() as u64 + 2
    }

    fn transition(&mut self, next: State) {
        if CONFIG.trace_transitions {
            debug!("uart_echo: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

impl Clocked for UartEcho {
    /// Raw receive line.
    type Input = bool;
    type Output = EchoOutput;

    fn output(&self) -> EchoOutput {
        EchoOutput {
            tx: self.tx.output().line,
            tx_led: self.tx_led.output(),
            rx_led: self.rx_led.output(),
        }
    }

    fn tick(&mut self, rx_line: bool) {
        let received = self.rx.output();
        let tx = self.tx.output();
        let hold_expired = self.hold.output();
        let state = self.state;

        match state {
            State::Idle => {
                if received.data_ready {
                    self.buffer = received.data;
                    self.hold_enable = true;
                    self.transition(State::Waiting);
                }
            }
            State::Waiting => {
                if hold_expired {
                    self.hold_enable = false;
                    self.tx_request = TxInput::write(self.buffer);
                    if CONFIG.trace_bytes {
                        debug!("uart_echo: echoing {:#04x}", self.buffer);
                    }
                    self.transition(State::StartSend);
                }
            }
            State::StartSend => {
                self.tx_request.write = false;
                self.transition(State::Sending);
            }
            State::Sending => {
                if !tx.busy {
                    self.transition(State::Idle);
                }
            }
        }

        if received.data_ready && state != State::Idle {
            if CONFIG.trace_bytes {
                debug!(
                    "uart_echo: {:#04x} overwrites {:#04x}",
                    received.data, self.buffer
                );
            }
            self.buffer = received.data;
        }

        self.rx.tick(rx_line);
        self.tx.tick(self.tx_request);
        self.hold.tick(self.hold_enable);
        self.tx_led.tick(!tx.line);
        self.rx_led.tick(!rx_line);
    }
}

impl Probe for UartEcho {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("state", 2, self.state as u32);
        sink.signal("buffer", 8, self.buffer as u32);
        sink.signal("tx_wr", 1, self.tx_request.write as u32);
        probe_scope(sink, "uart_tx", &self.tx);
        probe_scope(sink, "uart_rx", &self.rx);
        probe_scope(sink, "hold", &self.hold);
        probe_scope(sink, "tx_led", &self.tx_led);
        probe_scope(sink, "rx_led", &self.rx_led);
    }
}
