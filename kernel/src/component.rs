// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Components build gateware blocks from board parameters through a simple
//! factory method interface.

/// A component encapsulates block-specific construction (deriving divider
/// periods from a reference frequency, wiring sub-blocks) in a factory method,
/// which reduces repeated code in board files.
///
/// Using a component is as follows:
///
/// ```rust,ignore
/// let echo = UartEchoComponent::new(REFERENCE_HZ, params).finalize()?;
/// ```
///
/// All required configuration is passed via the constructor. Unlike
/// peripherals on a microcontroller, blocks are plain owned values, so
/// `finalize()` returns the block itself and no static memory is involved.
pub trait Component {
    /// The block (or composition of blocks) this component produces.
    type Output;

    /// A factory method that returns an instance of the `Output` type of this
    /// component implementation. Fails with `ErrorCode::INVAL` when the board
    /// parameters cannot be realized (for example a target rate above the
    /// reference clock).
    fn finalize(self) -> Result<Self::Output, crate::ErrorCode>;
}
