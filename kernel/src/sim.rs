// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Lockstep simulation of a top-level design.
//!
//! The simulator owns the design, counts reference edges and optionally
//! records a waveform of every probed signal. Stimulus is provided per edge by
//! a closure that receives the index of the edge being evaluated.
//!
//! ```rust,ignore
//! let mut sim = Simulator::new(design, 1_000_000);
//! sim.run_for(sim.ticks_from_us(5), |_| TxInput::idle());
//! let done = sim.run_until(10_000, |_| TxInput::idle(), |out| !out.busy)?;
//! ```

use std::io::{self, Write};

use crate::hil::clocked::{Clocked, Probe};
use crate::hil::time;
use crate::vcd::VcdWriter;
use crate::ErrorCode;

pub struct Simulator<D: Clocked + Probe> {
    design: D,
    reference_hz: u32,
    now: u64,
    trace: Option<VcdWriter<Box<dyn Write>>>,
    trace_error: Option<io::Error>,
}

impl<D: Clocked + Probe> Simulator<D> {
    pub fn new(design: D, reference_hz: u32) -> Simulator<D> {
        Simulator {
            design,
            reference_hz,
            now: 0,
            trace: None,
            trace_error: None,
        }
    }

    /// Records a waveform of the design into `out`, starting with the
    /// current state.
    pub fn with_trace(mut self, out: Box<dyn Write>) -> Simulator<D> {
        self.trace = Some(VcdWriter::new(out, self.reference_hz));
        self.record();
        self
    }

    /// Number of reference edges simulated so far.
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn reference_hz(&self) -> u32 {
        self.reference_hz
    }

    pub fn elapsed_us(&self) -> u64 {
        time::us_from_ticks(self.reference_hz, self.now)
    }

    pub fn ticks_from_us(&self, us: u64) -> u64 {
        time::ticks_from_us(self.reference_hz, us)
    }

    pub fn ticks_from_ms(&self, ms: u64) -> u64 {
        time::ticks_from_ms(self.reference_hz, ms)
    }

    pub fn design(&self) -> &D {
        &self.design
    }

    pub fn design_mut(&mut self) -> &mut D {
        &mut self.design
    }

    pub fn output(&self) -> D::Output {
        self.design.output()
    }

    /// Simulates one reference edge and returns the committed outputs.
    pub fn step(&mut self, input: D::Input) -> D::Output {
        self.design.tick(input);
        self.now += 1;
        self.record();
        self.design.output()
    }

    /// Simulates `ticks` edges and returns the outputs after the last one.
    pub fn run_for(&mut self, ticks: u64, mut input: impl FnMut(u64) -> D::Input) -> D::Output {
        let mut output = self.design.output();
        for _ in 0..ticks {
            let value = input(self.now);
            output = self.step(value);
        }
        output
    }

    /// Simulates until `done` accepts the outputs of an edge, for at most
    /// `limit` edges. Returns the edge count at which `done` held, or
    /// `ErrorCode::FAIL` if it never did.
    pub fn run_until(
        &mut self,
        limit: u64,
        mut input: impl FnMut(u64) -> D::Input,
        mut done: impl FnMut(&D::Output) -> bool,
    ) -> Result<u64, ErrorCode> {
        for _ in 0..limit {
            let value = input(self.now);
            let output = self.step(value);
            if done(&output) {
                return Ok(self.now);
            }
        }
        Err(ErrorCode::FAIL)
    }

    fn record(&mut self) {
        if let Some(vcd) = self.trace.as_mut() {
            if let Err(e) = vcd.sample(self.now, &self.design) {
                crate::debug!("waveform capture stopped at tick {}: {}", self.now, e);
                self.trace = None;
                self.trace_error = Some(e);
            }
        }
    }

    /// Ends the simulation, flushing the waveform, and returns the design.
    pub fn finish(self) -> io::Result<D> {
        if let Some(e) = self.trace_error {
            return Err(e);
        }
        if let Some(vcd) = self.trace {
            vcd.finish()?;
        }
        Ok(self.design)
    }
}
