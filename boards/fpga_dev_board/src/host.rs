// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Model of the host serial port on the other end of the cable.
//!
//! `SerialHost` drives the board's receive line with queued bytes and decodes
//! whatever the board transmits. It ticks on the same reference clock as the
//! design so a whole echo exchange can run in one simulation. Decoding
//! synchronizes the line like the receiver does, finds start bits on falling
//! edges and samples each data bit in the middle of its period.

use std::collections::VecDeque;

use capsules_core::synchronizer::SyncRegister;
use kernel::hil::clocked::{probe_scope, Clocked, Probe, ProbeSink};
use kernel::hil::uart;
use kernel::ErrorCode;

/// A byte decoded from the board's transmit line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Received {
    pub byte: u8,
    /// Host tick on which the start bit reached the host.
    pub start_tick: u64,
}

/// A byte sent to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sent {
    pub byte: u8,
    /// Host tick after which the line carried the start bit.
    pub start_tick: u64,
}

struct Frame {
    levels: [bool; uart::FRAME_BITS],
    bit: usize,
    count: u64,
}

struct Capture {
    start_tick: u64,
    next_sample: u64,
    bit: usize,
    shift: u8,
}

pub struct SerialHost {
    bit_ticks: u64,
    now: u64,
    queue: VecDeque<u8>,
    sending: Option<Frame>,
    line: bool,
    sent: Vec<Sent>,
    monitor: SyncRegister,
    capture: Option<Capture>,
    received: Vec<Received>,
}

impl SerialHost {
    /// A host whose bits last `bit_ticks` reference edges.
    pub fn new(bit_ticks: u64) -> SerialHost {
        SerialHost {
            bit_ticks,
            now: 0,
            queue: VecDeque::new(),
            sending: None,
            line: uart::IDLE,
            sent: Vec::new(),
            monitor: SyncRegister::new(),
            capture: None,
            received: Vec::new(),
        }
    }

    /// A host running at the same bit rate as the board's transmitter.
    pub fn for_reference(reference_hz: u32, params: uart::Parameters) -> Result<SerialHost, ErrorCode> {
        let period = params.bit_period(reference_hz)?;
        Ok(SerialHost::new(period as u64 + 1))
    }

    pub fn bit_ticks(&self) -> u64 {
        self.bit_ticks
    }

    /// Queues `byte` for transmission after anything already queued.
    pub fn write(&mut self, byte: u8) {
        self.queue.push_back(byte);
    }

    /// Nothing left to send.
    pub fn is_idle(&self) -> bool {
        self.sending.is_none() && self.queue.is_empty()
    }

    pub fn sent(&self) -> &[Sent] {
        &self.sent
    }

    pub fn received(&self) -> &[Received] {
        &self.received
    }

    pub fn take_received(&mut self) -> Vec<Received> {
        core::mem::take(&mut self.received)
    }

    fn advance_sender(&mut self) {
        let finished = match self.sending.as_mut() {
            Some(frame) => {
                frame.count += 1;
                if frame.count == self.bit_ticks {
                    frame.count = 0;
                    frame.bit += 1;
                }
                frame.bit == uart::FRAME_BITS
            }
            None => false,
        };
        if finished {
            self.sending = None;
        }

        if self.sending.is_none() {
            if let Some(byte) = self.queue.pop_front() {
                self.sent.push(Sent {
                    byte,
                    start_tick: self.now,
                });
                self.sending = Some(Frame {
                    levels: uart::frame_levels(byte),
                    bit: 0,
                    count: 0,
                });
            }
        }

        self.line = match &self.sending {
            Some(frame) => frame.levels[frame.bit],
            None => uart::IDLE,
        };
    }

    fn advance_monitor(&mut self, board_tx: bool) {
        self.monitor.tick(board_tx);

        match self.capture.as_mut() {
            None => {
                if self.monitor.fell() {
                    // The synchronized level lags the line by one tick.
                    let start_tick = self.now.saturating_sub(1);
                    self.capture = Some(Capture {
                        start_tick,
                        next_sample: self.now + self.bit_ticks + self.bit_ticks / 2,
                        bit: 0,
                        shift: 0,
                    });
                }
            }
            Some(capture) => {
                if self.now == capture.next_sample {
                    capture.shift |= (self.monitor.level() as u8) << capture.bit;
                    capture.bit += 1;
                    capture.next_sample += self.bit_ticks;
                    if capture.bit == uart::DATA_BITS {
                        self.received.push(Received {
                            byte: capture.shift,
                            start_tick: capture.start_tick,
                        });
                        self.capture = None;
                    }
                }
            }
        }
    }
}

impl Clocked for SerialHost {
    /// The board's transmit line.
    type Input = bool;
    /// The board's receive line.
    type Output = bool;

    fn output(&self) -> bool {
        self.line
    }

    fn tick(&mut self, board_tx: bool) {
        self.advance_sender();
        self.advance_monitor(board_tx);
        self.now += 1;
    }
}

impl Probe for SerialHost {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("tx", 1, self.line as u32);
        sink.signal("capturing", 1, self.capture.is_some() as u32);
        probe_scope(sink, "monitor", &self.monitor);
    }
}

#[cfg(test)]
mod tests {
    use super::SerialHost;
    use kernel::hil::clocked::Clocked;
    use kernel::hil::uart;

    /// Connects the transmit side of one host to the monitor of another.
    fn across(bytes: &[u8], bit_ticks: u64) -> SerialHost {
        let mut sender = SerialHost::new(bit_ticks);
        let mut listener = SerialHost::new(bit_ticks);
        for &byte in bytes {
            sender.write(byte);
        }
        let ticks = (bytes.len() as u64 + 2) * uart::FRAME_BITS as u64 * bit_ticks;
        for _ in 0..ticks {
            let line = sender.output();
            sender.tick(uart::IDLE);
            listener.tick(line);
        }
        assert!(sender.is_idle());
        listener
    }

    #[test]
    fn decodes_what_it_sends() {
        let listener = across(b"echo", 9);
        let bytes: Vec<u8> = listener.received().iter().map(|r| r.byte).collect();
        assert_eq!(bytes, b"echo");
    }

    #[test]
    fn frames_are_back_to_back() {
        let mut host = SerialHost::new(5);
        host.write(0x00);
        host.write(0xff);
        let mut levels = Vec::new();
        for _ in 0..120 {
            host.tick(uart::IDLE);
            levels.push(host.output());
        }
        let sent = host.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].start_tick - sent[0].start_tick, 50);
        // Start bit and eight zero bits of the first frame.
        assert!(levels[..45].iter().all(|&level| !level));
        assert!(levels[45..50].iter().all(|&level| level));
        assert!(!levels[50]);
    }

    #[test]
    fn start_tick_marks_the_line_edge() {
        let mut listener = SerialHost::new(4);
        let mut line = vec![uart::IDLE; 7];
        for level in uart::frame_levels(0x3c) {
            line.extend([level; 4]);
        }
        line.extend([uart::IDLE; 8]);
        for level in line {
            listener.tick(level);
        }

        let received = listener.take_received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].byte, 0x3c);
        assert_eq!(received[0].start_tick, 7);
        assert!(listener.received().is_empty());
    }
}
