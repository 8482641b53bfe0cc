//! MPU-6050 I2C driver implementation
//!
//! Each data block is acquired by writing the register pointer and then
//! burst-reading, relying on the auto-incrementing register file. Values are
//! big-endian signed 16-bit.

use super::registers;
use crate::devices::traits::{ImuError, ImuSensor, RawSample};
use crate::platform::I2cInterface;

/// MPU-6050 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Mpu6050Config {
    /// 7-bit I2C device address
    pub i2c_address: u8,
}

impl Default for Mpu6050Config {
    fn default() -> Self {
        Self {
            i2c_address: registers::DEFAULT_ADDRESS,
        }
    }
}

/// MPU-6050 I2C driver
///
/// Implements `ImuSensor` over any platform I2C bus.
pub struct Mpu6050Driver<I> {
    i2c: I,
    config: Mpu6050Config,
}

impl<I: I2cInterface> Mpu6050Driver<I> {
    /// Create the driver and wake the device out of sleep
    pub async fn new(i2c: I, config: Mpu6050Config) -> Result<Self, ImuError> {
        let mut driver = Self { i2c, config };
        driver.reset().await?;
        crate::log_info!("MPU-6050 awake at address {:#x}", config.i2c_address);
        Ok(driver)
    }

    /// Reset the device: clear the sleep bit in PWR_MGMT_1
    async fn reset(&mut self) -> Result<(), ImuError> {
        self.i2c
            .write(
                self.config.i2c_address,
                &[registers::PWR_MGMT_1, registers::PWR_MGMT_1_WAKE],
            )
            .await?;
        Ok(())
    }

    /// Write a register pointer, then burst-read a data block
    async fn read_block(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), ImuError> {
        self.i2c.write(self.config.i2c_address, &[reg]).await?;
        self.i2c.read(self.config.i2c_address, buf).await?;
        Ok(())
    }
}

fn parse_triple(buf: &[u8; 6]) -> [i16; 3] {
    [
        i16::from_be_bytes([buf[0], buf[1]]),
        i16::from_be_bytes([buf[2], buf[3]]),
        i16::from_be_bytes([buf[4], buf[5]]),
    ]
}

impl<I: I2cInterface> ImuSensor for Mpu6050Driver<I> {
    async fn read_raw(&mut self) -> Result<RawSample, ImuError> {
        let mut buf = [0u8; 6];

        self.read_block(registers::ACCEL_XOUT_H, &mut buf).await?;
        let accel = parse_triple(&buf);

        self.read_block(registers::GYRO_XOUT_H, &mut buf).await?;
        let gyro = parse_triple(&buf);

        let mut temp_buf = [0u8; 2];
        self.read_block(registers::TEMP_OUT_H, &mut temp_buf).await?;
        let temp = i16::from_be_bytes(temp_buf);

        Ok(RawSample { accel, gyro, temp })
    }
}
