// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Component for the UART echo link controller.
//!
//! Builds the transmitter, the receiver, both activity indicators and the hold
//! timer from one reference frequency.
//!
//! Usage
//! -----
//! ```rust,ignore
//! let echo = UartEchoComponent::new(REFERENCE_HZ, uart::Parameters::default())
//!     .finalize()?;
//! ```

use capsules_core::uart_echo::UartEcho;
use kernel::component::Component;
use kernel::hil::uart;
use kernel::ErrorCode;

use crate::activity_led::{ActivityLedComponent, LED_DECAY_HZ};
use crate::tick_generator::TickGeneratorComponent;
use crate::uart::{UartRxComponent, UartTxComponent};

/// Rate of the hold timer: a received byte is echoed after one second.
pub const HOLD_HZ: u32 = 1;

pub struct UartEchoComponent {
    reference_hz: u32,
    params: uart::Parameters,
    hold_hz: u32,
    led_decay_hz: u32,
}

impl UartEchoComponent {
    pub fn new(reference_hz: u32, params: uart::Parameters) -> UartEchoComponent {
        UartEchoComponent {
            reference_hz,
            params,
            hold_hz: HOLD_HZ,
            led_decay_hz: LED_DECAY_HZ,
        }
    }

    pub fn with_hold_hz(mut self, hold_hz: u32) -> UartEchoComponent {
        self.hold_hz = hold_hz;
        self
    }

    pub fn with_led_decay_hz(mut self, led_decay_hz: u32) -> UartEchoComponent {
        self.led_decay_hz = led_decay_hz;
        self
    }
}

impl Component for UartEchoComponent {
    type Output = UartEcho;

    fn finalize(self) -> Result<UartEcho, ErrorCode> {
        let tx = UartTxComponent::new(self.reference_hz, self.params).finalize()?;
        let rx = UartRxComponent::new(self.reference_hz, self.params).finalize()?;
        let hold = TickGeneratorComponent::new(self.reference_hz, self.hold_hz).finalize()?;
        let tx_led = ActivityLedComponent::new(self.reference_hz, self.led_decay_hz).finalize()?;
        let rx_led = ActivityLedComponent::new(self.reference_hz, self.led_decay_hz).finalize()?;

        Ok(UartEcho::new(tx, rx, hold, tx_led, rx_led))
    }
}
