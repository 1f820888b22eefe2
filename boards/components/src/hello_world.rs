// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Component for the "Hello World! " serial beacon.
//!
//! Usage
//! -----
//! ```rust,ignore
//! let hello = HelloWorldComponent::new(REFERENCE_HZ, uart::Parameters::default())
//!     .finalize()?;
//! ```

use capsules_core::hello_world::HelloWorld;
use kernel::component::Component;
use kernel::hil::uart;
use kernel::ErrorCode;

use crate::activity_led::{ActivityLedComponent, LED_DECAY_HZ};
use crate::tick_generator::TickGeneratorComponent;
use crate::uart::UartTxComponent;

/// The message repeats once per second.
pub const PAUSE_HZ: u32 = 1;

pub struct HelloWorldComponent {
    reference_hz: u32,
    params: uart::Parameters,
    pause_hz: u32,
}

impl HelloWorldComponent {
    pub fn new(reference_hz: u32, params: uart::Parameters) -> HelloWorldComponent {
        HelloWorldComponent {
            reference_hz,
            params,
            pause_hz: PAUSE_HZ,
        }
    }

    pub fn with_pause_hz(mut self, pause_hz: u32) -> HelloWorldComponent {
        self.pause_hz = pause_hz;
        self
    }
}

impl Component for HelloWorldComponent {
    type Output = HelloWorld;

    fn finalize(self) -> Result<HelloWorld, ErrorCode> {
        let tx = UartTxComponent::new(self.reference_hz, self.params).finalize()?;
        let tx_led = ActivityLedComponent::new(self.reference_hz, LED_DECAY_HZ).finalize()?;
        let pause = TickGeneratorComponent::new(self.reference_hz, self.pause_hz).finalize()?;

        Ok(HelloWorld::new(tx, tx_led, pause))
    }
}
