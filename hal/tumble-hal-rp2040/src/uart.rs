//! Blocking UART transmitter
//!
//! RP2040 has two UART peripherals; the panel uses one, transmit only, for
//! diagnostic text.

use embassy_rp::uart::{self, Blocking};
use tumble_hal::UartTx;

/// Errors reported by the RP2040 UART
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    /// Transmit failed
    Write,
}

impl From<uart::Error> for UartError {
    fn from(_: uart::Error) -> Self {
        UartError::Write
    }
}

/// [`UartTx`] over an embassy-rp blocking transmitter
pub struct BlockingUart<'d> {
    tx: uart::UartTx<'d, Blocking>,
}

impl<'d> BlockingUart<'d> {
    pub fn new(tx: uart::UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for BlockingUart<'_> {
    type Error = UartError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()?;
        Ok(())
    }
}
