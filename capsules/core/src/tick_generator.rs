// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Enable-gated clock divider.
//!
//! A `TickGenerator` turns the reference clock into a strobe that is high for
//! exactly one reference edge out of every `period + 1` while its enable input
//! is high. While the enable input is low the counter is held at zero and the
//! strobe stays low, so enabling the divider always starts a fresh period.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let mut baud = TickGenerator::from_frequencies(29_498_000, 115_200)?;
//! baud.tick(true);
//! if baud.output() {
//!     // one bit period elapsed
//! }
//! ```

use kernel::hil::clocked::{width_for, Clocked, Probe, ProbeSink};
use kernel::hil::time;
use kernel::ErrorCode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickGenerator {
    period: u32,
    counter: u32,
    enabled: bool,
    strobe: bool,
}

impl TickGenerator {
    pub const fn new(period: u32) -> TickGenerator {
        TickGenerator {
            period,
            counter: 0,
            enabled: false,
            strobe: false,
        }
    }

    /// Divider for a strobe at `target_hz` from a `reference_hz` clock. The
    /// period is rounded down, which makes the realized rate
    /// `reference_hz / (period + 1)`.
    pub fn from_frequencies(reference_hz: u32, target_hz: u32) -> Result<TickGenerator, ErrorCode> {
        time::divider_period(reference_hz, target_hz).map(TickGenerator::new)
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Level of the enable input on the last edge.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Error of the realized strobe rate against `target_hz`, in ppm.
    pub fn frequency_error_ppm(&self, reference_hz: u32, target_hz: u32) -> i64 {
        time::rate_error_ppm(reference_hz, target_hz, self.period)
    }
}

impl Clocked for TickGenerator {
    /// Enable.
    type Input = bool;
    /// Strobe.
    type Output = bool;

    fn output(&self) -> bool {
        self.strobe
    }

    fn tick(&mut self, enable: bool) {
        self.enabled = enable;
        if !enable {
            self.counter = 0;
            self.strobe = false;
        } else if self.counter == self.period {
            self.counter = 0;
            self.strobe = true;
        } else {
            self.counter += 1;
            self.strobe = false;
        }
    }
}

impl Probe for TickGenerator {
    fn probe(&self, sink: &mut dyn ProbeSink) {
        sink.signal("enable", 1, self.enabled as u32);
        sink.signal("counter", width_for(self.period), self.counter);
        sink.signal("strobe", 1, self.strobe as u32);
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::TickGenerator;
    use kernel::hil::clocked::Clocked;
    use kernel::ErrorCode;

    fn strobe_edges(generator: &mut TickGenerator, edges: u32, enable: bool) -> Vec<u32> {
        let mut strobes = Vec::new();
        for edge in 1..=edges {
            generator.tick(enable);
            if generator.output() {
                strobes.push(edge);
            }
        }
        strobes
    }

    quickcheck::quickcheck! {
        fn strobes_once_every_period_plus_one(period: u8) -> bool {
            let period = (period as u32).max(1);
            let mut generator = TickGenerator::new(period);
            let strobes = strobe_edges(&mut generator, 5 * (period + 1), true);
            strobes == (1..=5).map(|k| k * (period + 1)).collect::<Vec<_>>()
        }

        fn never_strobes_while_disabled(period: u8, edges: u16) -> bool {
            let mut generator = TickGenerator::new(period as u32);
            strobe_edges(&mut generator, edges as u32, false).is_empty()
                && generator.counter() == 0
        }
    }

    #[test]
    fn disabling_restarts_the_period() {
        let mut generator = TickGenerator::new(4);
        for _ in 0..3 {
            generator.tick(true);
        }
        assert_eq!(generator.counter(), 3);

        generator.tick(false);
        assert_eq!(generator.counter(), 0);
        assert!(!generator.is_enabled());
        assert!(!generator.output());

        // A full fresh period is needed after re-enabling.
        assert_eq!(strobe_edges(&mut generator, 10, true), [5, 10]);
    }

    #[test]
    fn strobe_lasts_one_edge() {
        let mut generator = TickGenerator::new(1);
        let levels: Vec<bool> = (0..6)
            .map(|_| {
                generator.tick(true);
                generator.output()
            })
            .collect();
        assert_eq!(levels, [false, true, false, true, false, true]);
    }

    #[test]
    fn zero_period_strobes_every_edge() {
        let mut generator = TickGenerator::new(0);
        assert_eq!(strobe_edges(&mut generator, 3, true), [1, 2, 3]);
    }

    #[test]
    fn built_from_frequencies() {
        let generator = TickGenerator::from_frequencies(29_498_000, 1).unwrap();
        assert_eq!(generator.period(), 29_498_000);
        assert_eq!(
            TickGenerator::from_frequencies(1_000, 0),
            Err(ErrorCode::INVAL)
        );
        assert_eq!(
            TickGenerator::from_frequencies(1_000, 2_000),
            Err(ErrorCode::INVAL)
        );
    }

    #[test]
    fn reports_realized_rate_error() {
        let baud = TickGenerator::from_frequencies(29_498_000, 115_200).unwrap();
        assert_eq!(baud.period(), 256);
        assert!(baud.frequency_error_ppm(29_498_000, 115_200) < 0);

        let exact = TickGenerator::new(9);
        assert_eq!(exact.frequency_error_ppm(1_000_000, 100_000), 0);
    }
}
