// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Gateware building blocks.
//!
//! Each capsule is a synchronous block implementing
//! [`kernel::hil::clocked::Clocked`]. Blocks own their children by value and
//! advance them once per reference edge from their own `tick`.

#![forbid(unsafe_code)]
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod activity_led;
pub mod hello_world;
pub mod synchronizer;
pub mod tick_generator;
pub mod uart_echo;
pub mod uart_rx;
pub mod uart_tx;
