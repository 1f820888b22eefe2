// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Component for an activity indicator.
//!
//! Usage
//! -----
//! ```rust,ignore
//! let led = ActivityLedComponent::new(REFERENCE_HZ, LED_DECAY_HZ).finalize()?;
//! ```

use capsules_core::activity_led::ActivityLed;
use capsules_core::tick_generator::TickGenerator;
use kernel::component::Component;
use kernel::ErrorCode;

/// Decay rate of the board's activity indicators (10ms on-time).
pub const LED_DECAY_HZ: u32 = 100;

pub struct ActivityLedComponent {
    reference_hz: u32,
    decay_hz: u32,
}

impl ActivityLedComponent {
    pub fn new(reference_hz: u32, decay_hz: u32) -> ActivityLedComponent {
        ActivityLedComponent {
            reference_hz,
            decay_hz,
        }
    }
}

impl Component for ActivityLedComponent {
    type Output = ActivityLed;

    fn finalize(self) -> Result<ActivityLed, ErrorCode> {
        let decay = TickGenerator::from_frequencies(self.reference_hz, self.decay_hz)?;
        Ok(ActivityLed::new(decay))
    }
}
