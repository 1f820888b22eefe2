// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Serial beacon that sends "Hello World! " once per pause period.
//!
//! Bytes go out back to back, each written with a one-edge write pulse as soon
//! as the transmitter is free. After the last byte the pause timer is enabled;
//! when it fires the message starts over.

use kernel::hil::clocked::{probe_scope, width_for, Clocked, Probe, ProbeSink};

use crate::activity_led::ActivityLed;
use crate::tick_generator::TickGenerator;
use crate::uart_tx::{TxInput, UartTx};

pub const MESSAGE: &[u8] = b"Hello World! ";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HelloOutput {
    pub tx: bool,
    pub tx_led: bool,
}

pub struct HelloWorld {
    index: usize,
    tx_request: TxInput,
    pause_enable: bool,
    tx: UartTx,
    tx_led: ActivityLed,
    pause: TickGenerator,
}

impl HelloWorld {
    pub fn new(tx: UartTx, tx_led: ActivityLed, pause: TickGenerator) -> HelloWorld {
        HelloWorld {
            index: 0,
            tx_request: TxInput::idle(),
            pause_enable: false,
            tx,
            tx_led,
            pause,
        }
    }

    /// Index of the next byte of [`MESSAGE`] to send.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Clocked for HelloWorld {
    type Input = ();
    type Output = HelloOutput;

    fn output(&self) -> HelloOutput {
        HelloOutput {
            tx: self.tx.output().line,
            tx_led: self.tx_led.output(),
        }
    }

    fn tick(&mut self, _input: ()) {
        let tx = self.tx.output();
        let pause_over = self.pause.output();

        if !tx.busy && !self.tx_request.write && self.index < MESSAGE.len() {
            self.tx_request = TxInput::write(MESSAGE[self.index]);
            self.index += 1;
        } else if tx.busy {
            self.tx_request.write = false;
        } else if pause_over {
            self.pause_enable = false;
            self.index = 0;
        } else {
            self.pause_enable = true;
        }

        self.tx.tick(self.tx_request);
        self.tx_led.tick(!tx.line);
        self.pause.tick(self.pause_enable);
    }
}

impl Probe for HelloWorld {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("index", width_for(MESSAGE.len() as u32), self.index as u32);
        sink.signal("tx_wr", 1, self.tx_request.write as u32);
        probe_scope(sink, "uart_tx", &self.tx);
        probe_scope(sink, "tx_led", &self.tx_led);
        probe_scope(sink, "pause", &self.pause);
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::{HelloWorld, MESSAGE};
    use crate::activity_led::ActivityLed;
    use crate::tick_generator::TickGenerator;
    use crate::uart_tx::UartTx;
    use kernel::hil::clocked::Clocked;
    use kernel::hil::uart;

    const BIT_TICKS: usize = 4;
    const PAUSE_PERIOD: u32 = 199;

    fn beacon() -> HelloWorld {
        HelloWorld::new(
            UartTx::new(TickGenerator::new(BIT_TICKS as u32 - 1)),
            ActivityLed::new(TickGenerator::new(9)),
            TickGenerator::new(PAUSE_PERIOD),
        )
    }

    /// Start edges and bytes of the frames on the line.
    fn decode(line: &[bool]) -> Vec<(usize, u8)> {
        let frame = uart::FRAME_BITS * BIT_TICKS;
        let mut frames = Vec::new();
        let mut edge = 0;
        while edge + frame <= line.len() {
            if line[edge] {
                edge += 1;
                continue;
            }
            let mut byte = 0u8;
            for bit in 0..uart::DATA_BITS {
                byte |= (line[edge + (bit + 1) * BIT_TICKS + BIT_TICKS / 2] as u8) << bit;
            }
            frames.push((edge, byte));
            edge += frame;
        }
        frames
    }

    #[test]
    fn sends_message_then_pauses() {
        let mut hello = beacon();
        let frame = uart::FRAME_BITS * BIT_TICKS;
        let line: Vec<bool> = (0..3 * (MESSAGE.len() * (frame + 1)) + 3 * PAUSE_PERIOD as usize)
            .map(|_| {
                hello.tick(());
                hello.output().tx
            })
            .collect();

        let frames = decode(&line);
        let bytes: Vec<u8> = frames.iter().map(|&(_, b)| b).collect();
        assert!(bytes.len() >= 2 * MESSAGE.len());
        assert_eq!(&bytes[..MESSAGE.len()], MESSAGE);
        assert_eq!(&bytes[MESSAGE.len()..2 * MESSAGE.len()], MESSAGE);

        // Within a message each frame follows the previous one after a
        // single idle edge.
        for pair in frames[..MESSAGE.len()].windows(2) {
            assert_eq!(pair[1].0 - pair[0].0, frame + 1);
        }
        // Between messages the line idles for at least one pause period.
        let gap = frames[MESSAGE.len()].0 - frames[MESSAGE.len() - 1].0 - frame;
        assert!(gap > PAUSE_PERIOD as usize);
    }

    #[test]
    fn first_byte_starts_immediately() {
        let mut hello = beacon();
        hello.tick(());
        assert!(!hello.output().tx);
        assert_eq!(hello.index(), 1);
    }
}
