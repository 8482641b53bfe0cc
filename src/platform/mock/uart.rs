//! Mock UART implementation for testing

use crate::platform::{
    traits::{UartConfig, UartInterface},
    Result,
};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

/// Mock UART implementation
///
/// Captures transmitted bytes in a shared buffer. Cloning yields a handle to
/// the same buffer, so a test can keep a probe while the transmitter task
/// owns the other clone.
///
/// # Example
///
/// ```ignore
/// let mut uart = MockUart::new(Default::default());
/// let probe = uart.clone();
///
/// uart.write(b"Hello").await.unwrap();
/// assert_eq!(probe.tx_data(), b"Hello");
/// ```
#[derive(Debug, Clone)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Arc<Mutex<Vec<u8>>>,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_data(&self) -> Vec<u8> {
        self.tx_buffer.lock().unwrap().clone()
    }

    /// Clear transmit buffer
    pub fn clear_tx_data(&mut self) {
        self.tx_buffer.lock().unwrap().clear();
    }

    /// Get configured baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    async fn write(&mut self, data: &[u8]) -> Result<()> {
        self.tx_buffer.lock().unwrap().extend_from_slice(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_uart_write() {
        let mut uart = MockUart::new(UartConfig::default());
        uart.write(&[0x01, 0x02]).await.unwrap();
        uart.write(&[0x03]).await.unwrap();

        assert_eq!(uart.tx_data(), vec![0x01, 0x02, 0x03]);
    }

    #[tokio::test]
    async fn test_mock_uart_shared_buffer() {
        let mut uart = MockUart::new(UartConfig::default());
        let probe = uart.clone();

        uart.write(b"ping").await.unwrap();
        assert_eq!(probe.tx_data(), b"ping");
    }

    #[test]
    fn test_mock_uart_baud_rate() {
        let uart = MockUart::new(UartConfig::default());
        assert_eq!(uart.baud_rate(), 115_200);
    }
}
