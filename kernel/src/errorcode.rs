// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Standard error enum for invoking operations

use core::fmt;

/// Standard errors in the gateware kernel.
///
/// Protocol conditions on the serial line (overrun, overwrite, framing) are
/// never reported through this type: the blocks treat them as silent.
/// `ErrorCode` covers the configuration and simulation-control paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum ErrorCode {
    /// Generic failure condition
    FAIL = 1,
    /// Underlying system is busy; retry
    BUSY = 2,
    /// The state requested is already set
    ALREADY = 3,
    /// An invalid parameter was passed
    INVAL = 7,
    /// Parameter passed was too large
    SIZE = 8,
    /// Operation or command is unsupported
    NOSUPPORT = 11,
}

impl From<ErrorCode> for usize {
    fn from(err: ErrorCode) -> usize {
        err as usize
    }
}

impl TryFrom<usize> for ErrorCode {
    type Error = ();

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ErrorCode::FAIL),
            2 => Ok(ErrorCode::BUSY),
            3 => Ok(ErrorCode::ALREADY),
            7 => Ok(ErrorCode::INVAL),
            8 => Ok(ErrorCode::SIZE),
            11 => Ok(ErrorCode::NOSUPPORT),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ErrorCode::FAIL => "generic failure",
            ErrorCode::BUSY => "busy",
            ErrorCode::ALREADY => "already in requested state",
            ErrorCode::INVAL => "invalid parameter",
            ErrorCode::SIZE => "parameter too large",
            ErrorCode::NOSUPPORT => "unsupported operation",
        };
        write!(f, "{} ({:?})", description, self)
    }
}

impl std::error::Error for ErrorCode {}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn usize_conversion_matches_discriminant() {
        for code in [
            ErrorCode::FAIL,
            ErrorCode::BUSY,
            ErrorCode::ALREADY,
            ErrorCode::INVAL,
            ErrorCode::SIZE,
            ErrorCode::NOSUPPORT,
        ] {
            let raw: usize = code.into();
            assert_eq!(ErrorCode::try_from(raw), Ok(code));
        }
        assert_eq!(ErrorCode::try_from(0), Err(()));
    }
}
