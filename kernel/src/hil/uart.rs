// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interfaces for UART line framing.
//!
//! The line format is fixed at 8-N-1: one start bit (0), eight data bits sent
//! least significant bit first, no parity and one stop bit (1). The line idles
//! high.

use crate::hil::time;
use crate::ErrorCode;

/// Data bits per frame.
pub const DATA_BITS: usize = 8;

/// Bit periods per frame, start and stop bits included.
pub const FRAME_BITS: usize = 10;

/// Level of an idle line.
pub const IDLE: bool = true;

/// Level of the start bit.
pub const START_BIT: bool = false;

/// Level of the stop bit.
pub const STOP_BIT: bool = true;

/// Baud rate of the reference board configuration.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub baud_rate: u32, // baud rate in bit/s
}

impl Parameters {
    pub const fn new(baud_rate: u32) -> Parameters {
        Parameters { baud_rate }
    }

    /// Divider period of the transmit bit clock for a given reference rate.
    pub fn bit_period(&self, reference_hz: u32) -> Result<u32, ErrorCode> {
        time::divider_period(reference_hz, self.baud_rate)
    }

    /// Divider period of the receiver's 2x baud clock, used to align sampling
    /// to the middle of each bit.
    pub fn half_bit_period(&self, reference_hz: u32) -> Result<u32, ErrorCode> {
        let doubled = self.baud_rate.checked_mul(2).ok_or(ErrorCode::INVAL)?;
        time::divider_period(reference_hz, doubled)
    }
}

impl Default for Parameters {
    fn default() -> Parameters {
        Parameters::new(DEFAULT_BAUD_RATE)
    }
}

/// Line levels of the ten bit periods of the frame carrying `byte`.
pub fn frame_levels(byte: u8) -> [bool; FRAME_BITS] {
    let mut levels = [STOP_BIT; FRAME_BITS];
    levels[0] = START_BIT;
    for bit in 0..DATA_BITS {
        levels[bit + 1] = (byte >> bit) & 1 == 1;
    }
    levels
}
