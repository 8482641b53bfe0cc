//! RP2350 I2C implementation

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::I2cInterface,
    Result,
};
use embassy_rp::i2c::{Async, Error, I2c, Instance};
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// I2C bus backed by the embassy-rp async I2C peripheral
pub struct RpI2c<'d, T: Instance> {
    inner: I2c<'d, T, Async>,
}

impl<'d, T: Instance> RpI2c<'d, T> {
    /// Wrap an initialized embassy-rp I2C peripheral
    pub fn new(inner: I2c<'d, T, Async>) -> Self {
        Self { inner }
    }
}

fn map_err(e: Error) -> PlatformError {
    match e {
        Error::Abort(_) => PlatformError::I2c(I2cError::Nack),
        _ => PlatformError::I2c(I2cError::BusError),
    }
}

impl<'d, T: Instance> I2cInterface for RpI2c<'d, T> {
    async fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        AsyncI2c::write(&mut self.inner, addr, data)
            .await
            .map_err(map_err)
    }

    async fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        AsyncI2c::read(&mut self.inner, addr, buffer)
            .await
            .map_err(map_err)
    }
}
