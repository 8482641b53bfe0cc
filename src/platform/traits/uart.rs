//! UART interface trait
//!
//! The tilt frame link is transmit-only, so the trait covers writes; the
//! receive direction of the peripheral stays with the platform layer.

use crate::platform::Result;

/// UART configuration
///
/// 8 data bits, no parity, 1 stop bit, no flow control.
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baud_rate: 115_200 }
    }
}

/// UART transmit interface trait
#[allow(async_fn_in_trait)]
pub trait UartInterface {
    /// Write all bytes to the UART
    ///
    /// Completes only once every byte has been accepted by the transport.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the write fails.
    async fn write(&mut self, data: &[u8]) -> Result<()>;
}
