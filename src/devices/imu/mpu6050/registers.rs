//! MPU-6050 register map
//!
//! Only the registers this pipeline touches. The register file
//! auto-increments on burst reads, so each block is addressed by its
//! first register.

/// Default 7-bit I2C address (AD0 low)
pub const DEFAULT_ADDRESS: u8 = 0x68;

/// Power management 1
pub const PWR_MGMT_1: u8 = 0x6B;

/// PWR_MGMT_1 value: clear sleep bit, internal oscillator
pub const PWR_MGMT_1_WAKE: u8 = 0x00;

/// First accelerometer data register (ACCEL_XOUT_H), 6-byte block
pub const ACCEL_XOUT_H: u8 = 0x3B;

/// Temperature data register (TEMP_OUT_H), 2-byte block
pub const TEMP_OUT_H: u8 = 0x41;

/// First gyroscope data register (GYRO_XOUT_H), 6-byte block
pub const GYRO_XOUT_H: u8 = 0x43;
