// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Component for a tick generator running at a target rate.
//!
//! Usage
//! -----
//! ```rust,ignore
//! let hold = components::tick_generator::TickGeneratorComponent::new(REFERENCE_HZ, 1)
//!     .finalize()?;
//! ```

use capsules_core::tick_generator::TickGenerator;
use kernel::component::Component;
use kernel::config::CONFIG;
use kernel::debug;
use kernel::ErrorCode;

pub struct TickGeneratorComponent {
    reference_hz: u32,
    target_hz: u32,
}

impl TickGeneratorComponent {
    pub fn new(reference_hz: u32, target_hz: u32) -> TickGeneratorComponent {
        TickGeneratorComponent {
            reference_hz,
            target_hz,
        }
    }
}

impl Component for TickGeneratorComponent {
    type Output = TickGenerator;

    fn finalize(self) -> Result<TickGenerator, ErrorCode> {
        let generator = TickGenerator::from_frequencies(self.reference_hz, self.target_hz)?;
        if CONFIG.trace_transitions {
            debug!(
                "tick generator: {}Hz from {}Hz, period {} ({}ppm)",
                self.target_hz,
                self.reference_hz,
                generator.period(),
                generator.frequency_error_ppm(self.reference_hz, self.target_hz)
            );
        }
        Ok(generator)
    }
}
