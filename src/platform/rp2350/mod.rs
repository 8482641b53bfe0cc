//! RP2350 (Raspberry Pi Pico 2 W) platform implementation
//!
//! Wraps embassy-rp peripherals behind the platform traits.

pub mod i2c;
pub mod uart;

pub use i2c::RpI2c;
pub use uart::RpUartTx;
