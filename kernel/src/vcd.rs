// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Value change dump (IEEE 1364) waveform writer.
//!
//! The header is written on the first sample, from the signals a design
//! reports through [`Probe`]. Later samples only emit the signals whose value
//! changed, under a `#<time>` marker in picoseconds.

use std::io::{self, Write};

use crate::hil::clocked::{Probe, ProbeSink};

const PICOSECONDS_PER_SECOND: u64 = 1_000_000_000_000;

struct Var {
    id: String,
    width: u32,
    last: u32,
}

pub struct VcdWriter<W: Write> {
    out: W,
    period_ps: u64,
    vars: Vec<Var>,
    started: bool,
}

/// Identifier codes use the printable ASCII range `!`..`~`.
fn identifier(mut index: usize) -> String {
    const FIRST: u8 = b'!';
    const RANGE: usize = (b'~' - b'!' + 1) as usize;
    let mut id = String::new();
    loop {
        id.push((FIRST + (index % RANGE) as u8) as char);
        index /= RANGE;
        if index == 0 {
            break;
        }
        index -= 1;
    }
    id
}

fn write_value(out: &mut dyn Write, width: u32, value: u32, id: &str) -> io::Result<()> {
    if width == 1 {
        writeln!(out, "{}{}", value & 1, id)
    } else {
        writeln!(out, "b{:b} {}", value, id)
    }
}

/// Collects the variable declarations on the first sample.
struct Declarations<'a> {
    out: &'a mut dyn Write,
    vars: &'a mut Vec<Var>,
    error: Option<io::Error>,
}

impl ProbeSink for Declarations<'_> {
    fn signal(&mut self, name: &'static str, width: u32, value: u32) {
        let id = identifier(self.vars.len());
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "$var wire {} {} {} $end", width, id, name) {
                self.error = Some(e);
            }
        }
        self.vars.push(Var {
            id,
            width,
            last: value,
        });
    }

    fn enter(&mut self, scope: &'static str) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "$scope module {} $end", scope) {
                self.error = Some(e);
            }
        }
    }

    fn exit(&mut self) {
        if self.error.is_none() {
            if let Err(e) = writeln!(self.out, "$upscope $end") {
                self.error = Some(e);
            }
        }
    }
}

/// Records the values of a later sample, keeping only the changes.
struct Changes<'a> {
    vars: &'a mut [Var],
    index: usize,
    changed: Vec<usize>,
}

impl ProbeSink for Changes<'_> {
    fn signal(&mut self, _name: &'static str, _width: u32, value: u32) {
        if let Some(var) = self.vars.get_mut(self.index) {
            if var.last != value {
                var.last = value;
                self.changed.push(self.index);
            }
        }
        self.index += 1;
    }

    fn enter(&mut self, _scope: &'static str) {}

    fn exit(&mut self) {}
}

impl<W: Write> VcdWriter<W> {
    /// Creates a writer for a design clocked at `reference_hz`.
    pub fn new(out: W, reference_hz: u32) -> VcdWriter<W> {
        VcdWriter {
            out,
            period_ps: PICOSECONDS_PER_SECOND / reference_hz.max(1) as u64,
            vars: Vec::new(),
            started: false,
        }
    }

    /// Records the state of `design` after `tick` reference edges.
    pub fn sample(&mut self, tick: u64, design: &dyn Probe) -> io::Result<()> {
        if !self.started {
            return self.start(design);
        }

        let mut changes = Changes {
            vars: &mut self.vars,
            index: 0,
            changed: Vec::new(),
        };
        design.probe(&mut changes);
        let changed = changes.changed;
        if changed.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "#{}", tick * self.period_ps)?;
        for index in changed {
            let var = &self.vars[index];
            write_value(&mut self.out, var.width, var.last, &var.id)?;
        }
        Ok(())
    }

    fn start(&mut self, design: &dyn Probe) -> io::Result<()> {
        writeln!(self.out, "$version gateware-kernel $end")?;
        writeln!(self.out, "$timescale 1ps $end")?;
        writeln!(self.out, "$scope module top $end")?;
        let mut declarations = Declarations {
            out: &mut self.out,
            vars: &mut self.vars,
            error: None,
        };
        design.probe(&mut declarations);
        if let Some(e) = declarations.error {
            return Err(e);
        }
        writeln!(self.out, "$upscope $end")?;
        writeln!(self.out, "$enddefinitions $end")?;
        writeln!(self.out, "#0")?;
        writeln!(self.out, "$dumpvars")?;
        for var in self.vars.iter() {
            write_value(&mut self.out, var.width, var.last, &var.id)?;
        }
        writeln!(self.out, "$end")?;
        self.started = true;
        Ok(())
    }

    /// Flushes the dump and returns the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
