// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Interface for blocks advanced by the shared reference clock.
//!
//! Blocks follow register-transfer semantics:
//!
//! - [`Clocked::output`] returns the registered outputs as committed by the
//!   last call to [`Clocked::tick`]. It never depends on the inputs of the
//!   current edge, so every reader sees the same snapshot within one edge.
//! - [`Clocked::tick`] commits exactly one reference edge. Only the block
//!   itself mutates its state.
//!
//! A parent owns its children by value. On each edge it first computes its
//! own next state from the children's outputs (the previous edge's values),
//! then clocks each child once, feeding it the control values it just decided.
//! Enable lines of tick generators therefore take effect on the edge that
//! drives them, while data passed between sibling blocks is always one edge
//! old.

/// A synchronous block.
pub trait Clocked {
    /// Values sampled on each edge.
    type Input;

    /// Registered outputs.
    type Output;

    /// Returns the outputs committed by the last edge.
    fn output(&self) -> Self::Output;

    /// Advances the block by one reference edge.
    fn tick(&mut self, input: Self::Input);

    /// Pure-transition form of [`Clocked::tick`]: consumes the current state
    /// and returns the next state with its outputs.
    fn step(mut self, input: Self::Input) -> (Self, Self::Output)
    where
        Self: Sized,
    {
        self.tick(input);
        let output = self.output();
        (self, output)
    }
}

/// Receiver of named signal values, used for waveform capture.
///
/// Signals must be reported in the same order on every call so that a sink
/// can identify them by position.
pub trait ProbeSink {
    /// Reports the current value of a signal `width` bits wide.
    fn signal(&mut self, name: &'static str, width: u32, value: u32);

    /// Opens a nested scope for the signals of a child block.
    fn enter(&mut self, scope: &'static str);

    /// Closes the scope opened by the matching [`ProbeSink::enter`].
    fn exit(&mut self);
}

/// A block that can report its internal signals.
pub trait Probe {
    fn probe(&self, sink: &mut dyn ProbeSink);
}

/// Reports the signals of `child` inside a scope called `scope`.
pub fn probe_scope(sink: &mut dyn ProbeSink, scope: &'static str, child: &dyn Probe) {
    sink.enter(scope);
    child.probe(sink);
    sink.exit();
}

/// Number of bits needed to hold any value in `0..=max`.
pub fn width_for(max: u32) -> u32 {
    (u32::BITS - max.leading_zeros()).max(1)
}
