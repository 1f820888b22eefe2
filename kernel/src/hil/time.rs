// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Hardware agnostic interfaces for clock rates and tick arithmetic.

use crate::ErrorCode;

/// Trait to represent clock frequency in Hz
///
/// Boards use this as the type of their reference clock so that blocks can
/// portably convert real-time values to reference ticks.
pub trait Frequency {
    /// Returns frequency in Hz.
    fn frequency() -> u32;
}

/// 29.498MHz `Frequency`
#[derive(Debug)]
pub struct Freq29_498MHz;
impl Frequency for Freq29_498MHz {
    fn frequency() -> u32 {
        29_498_000
    }
}

/// 1MHz `Frequency`
#[derive(Debug)]
pub struct Freq1MHz;
impl Frequency for Freq1MHz {
    fn frequency() -> u32 {
        1_000_000
    }
}

/// Counter period that turns `reference_hz` into a strobe at roughly
/// `target_hz`.
///
/// This is the integer floor of `reference_hz / target_hz`. A divider with
/// period `p` fires once every `p + 1` reference edges, so the realized rate
/// is slightly below the target; see [`rate_error_ppm`].
pub fn divider_period(reference_hz: u32, target_hz: u32) -> Result<u32, ErrorCode> {
    if target_hz == 0 || target_hz > reference_hz {
        return Err(ErrorCode::INVAL);
    }
    Ok(reference_hz / target_hz)
}

/// Signed error, in parts per million, between the rate realized by a divider
/// of `period` and `target_hz`.
pub fn rate_error_ppm(reference_hz: u32, target_hz: u32, period: u32) -> i64 {
    let realized = reference_hz as i128 * 1_000_000 / (period as i128 + 1);
    let target = target_hz as i128 * 1_000_000;
    ((realized - target) * 1_000_000 / target) as i64
}

pub fn ticks_from_seconds(reference_hz: u32, seconds: u64) -> u64 {
    reference_hz as u64 * seconds
}

pub fn ticks_from_ms(reference_hz: u32, ms: u64) -> u64 {
    reference_hz as u64 * ms / 1_000
}

pub fn ticks_from_us(reference_hz: u32, us: u64) -> u64 {
    reference_hz as u64 * us / 1_000_000
}

pub fn us_from_ticks(reference_hz: u32, ticks: u64) -> u64 {
    ticks * 1_000_000 / reference_hz as u64
}
