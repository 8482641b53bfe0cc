//! RP2350 UART transmit implementation
//!
//! Generic over `embedded_io_async::Write` so it works with both the
//! DMA-driven and buffered embassy-rp UART transmitters.

use crate::platform::{
    error::{PlatformError, UartError},
    traits::UartInterface,
    Result,
};
use embedded_io_async::Write;

/// UART transmitter backed by an embassy-rp UART TX half
///
/// Example type on RP2350:
/// `W = embassy_rp::uart::UartTx<'static, UART0, embassy_rp::uart::Async>`
pub struct RpUartTx<W> {
    tx: W,
}

impl<W> RpUartTx<W> {
    /// Wrap a UART transmit half
    pub fn new(tx: W) -> Self {
        Self { tx }
    }
}

impl<W: Write> UartInterface for RpUartTx<W> {
    async fn write(&mut self, data: &[u8]) -> Result<()> {
        self.tx
            .write_all(data)
            .await
            .map_err(|_| PlatformError::Uart(UartError::WriteFailed))
    }
}
