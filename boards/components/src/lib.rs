// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

#![no_std]

pub mod activity_led;
pub mod hello_world;
pub mod tick_generator;
pub mod uart;
pub mod uart_echo;
