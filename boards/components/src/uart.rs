// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Components for the UART transmitter and receiver.
//!
//! The transmitter divides the reference clock down to the baud rate and the
//! receiver to twice the baud rate.
//!
//! Usage
//! -----
//! ```rust,ignore
//! let params = kernel::hil::uart::Parameters::new(115_200);
//! let tx = UartTxComponent::new(REFERENCE_HZ, params).finalize()?;
//! let rx = UartRxComponent::new(REFERENCE_HZ, params).finalize()?;
//! ```

use capsules_core::tick_generator::TickGenerator;
use capsules_core::uart_rx::UartRx;
use capsules_core::uart_tx::UartTx;
use kernel::component::Component;
use kernel::hil::uart;
use kernel::ErrorCode;

pub struct UartTxComponent {
    reference_hz: u32,
    params: uart::Parameters,
}

impl UartTxComponent {
    pub fn new(reference_hz: u32, params: uart::Parameters) -> UartTxComponent {
        UartTxComponent {
            reference_hz,
            params,
        }
    }
}

impl Component for UartTxComponent {
    type Output = UartTx;

    fn finalize(self) -> Result<UartTx, ErrorCode> {
        let period = self.params.bit_period(self.reference_hz)?;
        Ok(UartTx::new(TickGenerator::new(period)))
    }
}

pub struct UartRxComponent {
    reference_hz: u32,
    params: uart::Parameters,
}

impl UartRxComponent {
    pub fn new(reference_hz: u32, params: uart::Parameters) -> UartRxComponent {
        UartRxComponent {
            reference_hz,
            params,
        }
    }
}

impl Component for UartRxComponent {
    type Output = UartRx;

    fn finalize(self) -> Result<UartRx, ErrorCode> {
        let period = self.params.half_bit_period(self.reference_hz)?;
        Ok(UartRx::new(TickGenerator::new(period)))
    }
}

#[cfg(test)]
mod tests {
    use super::{UartRxComponent, UartTxComponent};
    use kernel::component::Component;
    use kernel::hil::uart::Parameters;
    use kernel::ErrorCode;

    #[test]
    fn baud_above_reference_is_rejected() {
        let params = Parameters::new(2_000_000);
        assert!(matches!(
            UartTxComponent::new(1_000_000, params).finalize(),
            Err(ErrorCode::INVAL)
        ));
        assert!(matches!(
            UartRxComponent::new(1_000_000, params).finalize(),
            Err(ErrorCode::INVAL)
        ));
    }

    #[test]
    fn builds_at_board_rate() {
        let tx = UartTxComponent::new(29_498_000, Parameters::default())
            .finalize()
            .unwrap();
        assert_eq!(tx.bit_ticks(), 257);
        assert!(UartRxComponent::new(29_498_000, Parameters::default())
            .finalize()
            .is_ok());
    }
}
