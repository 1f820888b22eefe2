// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Logical signal to package pin mapping of the xc6slx9-tqg144 board.

use kernel::ErrorCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Clock,
    Tx,
    Rx,
    TxLed,
    RxLed,
}

#[derive(Clone, Copy, Debug)]
pub struct PinMapping {
    pub signal: Signal,
    /// Package pin, `None` when the board has no fixed pin for the signal.
    pub pin: Option<&'static str>,
    pub io_standard: &'static str,
}

pub const DEVICE: &str = "xc6slx9";
pub const PACKAGE: &str = "tqg144";
pub const SPEED: &str = "2";

/// The UART lines are routed through an expansion connector and have no fixed
/// pin on the board itself.
pub const PINS: [PinMapping; 5] = [
    PinMapping {
        signal: Signal::Clock,
        pin: Some("P55"),
        io_standard: "LVCMOS33",
    },
    PinMapping {
        signal: Signal::Tx,
        pin: None,
        io_standard: "LVCMOS33",
    },
    PinMapping {
        signal: Signal::Rx,
        pin: None,
        io_standard: "LVCMOS33",
    },
    PinMapping {
        signal: Signal::TxLed,
        pin: Some("P82"),
        io_standard: "LVCMOS33",
    },
    PinMapping {
        signal: Signal::RxLed,
        pin: Some("P81"),
        io_standard: "LVCMOS33",
    },
];

/// Package pin bound to `signal`.
pub fn pin_for(signal: Signal) -> Result<&'static str, ErrorCode> {
    PINS.iter()
        .find(|mapping| mapping.signal == signal)
        .and_then(|mapping| mapping.pin)
        .ok_or(ErrorCode::NOSUPPORT)
}

#[cfg(test)]
mod tests {
    use super::{pin_for, Signal};
    use kernel::ErrorCode;

    #[test]
    fn leds_and_clock_are_bound() {
        assert_eq!(pin_for(Signal::Clock), Ok("P55"));
        assert_eq!(pin_for(Signal::TxLed), Ok("P82"));
        assert_eq!(pin_for(Signal::RxLed), Ok("P81"));
        assert_eq!(pin_for(Signal::Tx), Err(ErrorCode::NOSUPPORT));
    }
}
