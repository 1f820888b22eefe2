// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Board file for the xc6slx9 FPGA development board.
//!
//! The board runs from a 29.498MHz oscillator. Its main design echoes every
//! byte received on the serial port back after one second, lighting one LED
//! per direction while the line is busy. The alternative `HelloWorld` design
//! prints "Hello World! " once per second.

use capsules_core::hello_world::HelloWorld;
use capsules_core::uart_echo::UartEcho;
use components::hello_world::HelloWorldComponent;
use components::uart_echo::UartEchoComponent;
use kernel::component::Component;
use kernel::hil::time::{Freq29_498MHz, Frequency};
use kernel::hil::uart;
use kernel::ErrorCode;

pub mod actions;
pub mod bench;
pub mod error;
pub mod host;
pub mod pins;

use crate::bench::Bench;
use crate::host::SerialHost;

/// The board's reference oscillator.
pub type ReferenceClock = Freq29_498MHz;

pub fn reference_hz() -> u32 {
    ReferenceClock::frequency()
}

/// The echo loopback design.
pub fn main_design(reference_hz: u32, params: uart::Parameters) -> Result<UartEcho, ErrorCode> {
    UartEchoComponent::new(reference_hz, params).finalize()
}

pub fn hello_design(reference_hz: u32, params: uart::Parameters) -> Result<HelloWorld, ErrorCode> {
    HelloWorldComponent::new(reference_hz, params).finalize()
}

/// The echo design connected to a host at the same baud rate.
pub fn echo_bench(reference_hz: u32, params: uart::Parameters) -> Result<Bench<UartEcho>, ErrorCode> {
    let host = SerialHost::for_reference(reference_hz, params)?;
    Ok(Bench::new(main_design(reference_hz, params)?, host))
}

pub fn hello_bench(
    reference_hz: u32,
    params: uart::Parameters,
) -> Result<Bench<HelloWorld>, ErrorCode> {
    let host = SerialHost::for_reference(reference_hz, params)?;
    Ok(Bench::new(hello_design(reference_hz, params)?, host))
}
