// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

use std::io;

use kernel::ErrorCode;

/// Errors that can occur while setting up or running a simulation.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("Board parameters cannot be realized: {0}.")]
    Parameters(#[from] ErrorCode),
    #[error("Waveform capture failed: {0}.")]
    Io(#[from] io::Error),
    #[error("No {what} within {ticks} ticks.")]
    Timeout { what: &'static str, ticks: u64 },
    #[error("Sent {sent:#04x} but decoded {decoded:02x?}.")]
    Mismatch { sent: u8, decoded: Vec<u8> },
}
