//! Platform interface traits
//!
//! Trait definitions that platform implementations must provide.

pub mod i2c;
pub mod uart;

pub use i2c::{I2cConfig, I2cInterface};
pub use uart::{UartConfig, UartInterface};
