// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Activity indicator with a minimum on-time.
//!
//! `active` goes high on the edge the trigger is seen and stays high until the
//! decay divider completes one full period after the trigger was last seen.
//! While the trigger is asserted the divider is held in reset, so even a
//! single-edge trigger keeps the indicator lit for `period + 2` edges.

use kernel::hil::clocked::{probe_scope, Clocked, Probe, ProbeSink};

use crate::tick_generator::TickGenerator;

pub struct ActivityLed {
    active: bool,
    decay: TickGenerator,
    decay_enable: bool,
}

impl ActivityLed {
    pub fn new(decay: TickGenerator) -> ActivityLed {
        ActivityLed {
            active: false,
            decay,
            decay_enable: false,
        }
    }

    /// Minimum number of edges `active` stays high after a trigger.
    pub fn hold_ticks(&self) -> u32 {
        self.decay.period() + 2
    }
}

impl Clocked for ActivityLed {
    /// Trigger.
    type Input = bool;
    /// Indicator level.
    type Output = bool;

    fn output(&self) -> bool {
        self.active
    }

    fn tick(&mut self, trigger: bool) {
        let decayed = self.decay.output();

        if trigger {
            self.active = true;
            self.decay_enable = false;
        } else if self.active {
            if decayed {
                self.active = false;
                self.decay_enable = false;
            } else {
                self.decay_enable = true;
            }
        }

        self.decay.tick(self.decay_enable);
    }
}

impl Probe for ActivityLed {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("active", 1, self.active as u32);
        probe_scope(sink, "decay", &self.decay);
    }
}
