//! I2C interface trait
//!
//! Defines the I2C bus communication interface that platform implementations
//! must provide.

use crate::platform::Result;

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Bus frequency in Hz (typically 100_000 or 400_000)
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 400_000, // 400 kHz fast mode
        }
    }
}

/// I2C interface trait
///
/// All operations are complete transactions; they return only once the bus
/// transfer has finished or failed.
///
/// # Safety Invariants
///
/// - I2C peripheral must be initialized before use
/// - Only one owner per I2C bus instance
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
#[allow(async_fn_in_trait)]
pub trait I2cInterface {
    /// Write data to an I2C device
    ///
    /// Performs a complete write transaction:
    /// START - ADDR(W) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge,
    /// a bus error occurs, or the transfer times out.
    async fn write(&mut self, addr: u8, data: &[u8]) -> Result<()>;

    /// Read data from an I2C device
    ///
    /// Performs a complete read transaction:
    /// START - ADDR(R) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge,
    /// a bus error occurs, or the transfer times out.
    async fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()>;
}
