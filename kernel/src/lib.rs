// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Gateware Kernel
//!
//! The kernel crate implements the synchronous execution model shared by every
//! gateware block, chip-independent helpers that capsules and boards use, and
//! the Hardware Interface Layer (HIL) definitions.
//!
//! Every block is a piece of owned state advanced by exactly one call to
//! [`hil::clocked::Clocked::tick`] per reference clock edge. The kernel never
//! schedules blocks on its own: a board composes them and the
//! [`sim::Simulator`] drives the top-level design in lockstep.

#![warn(unreachable_pub)]

pub mod component;
pub mod config;
#[macro_use]
pub mod debug;
pub mod hil;
pub mod sim;
pub mod vcd;

mod errorcode;

pub use crate::errorcode::ErrorCode;
