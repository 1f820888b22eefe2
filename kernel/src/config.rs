// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Data structure for storing compile-time configuration options in the kernel.
//!
//! The rationale for configuration based on a `const` object is twofold.
//!
//! - Cargo features could be used for boolean-based configuration, but code
//!   gated by a non-enabled feature isn't even type-checked by the compiler,
//!   and features are globally enabled as soon as one dependency relationship
//!   requires them.
//!
//! - A constant value can contain arbitrary types, which allows configuration
//!   based on integers, strings, or more complex values.
//!
//! With a typed `const` configuration all code paths are type-checked, and
//! after type-checking the compiler folds the constants so a disabled trace is
//! free inside the per-tick update functions.

/// Data structure holding compile-time configuration options.
///
/// To change the configuration, enable the corresponding cargo feature of the
/// kernel crate from the board crate.
pub struct Config {
    /// Whether blocks should print a message in the debug output for each
    /// state machine transition.
    ///
    /// This is very verbose: a receiver prints one line per frame phase, so it
    /// is meant for short simulations (the `simulate-*` board commands).
    pub trace_transitions: bool,

    /// Whether blocks should print each byte they latch, publish or echo.
    pub trace_bytes: bool,
}

/// A unique instance of `Config` where compile-time configuration options are
/// defined. This is the only location in the kernel where we permit
/// `#[cfg(x)]` to be used to configure code based on Cargo features.
pub const CONFIG: Config = Config {
    trace_transitions: cfg!(feature = "trace_transitions"),
    trace_bytes: cfg!(feature = "trace_bytes"),
};
