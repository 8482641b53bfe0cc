//! Mock platform implementations for host testing

pub mod i2c;
pub mod uart;

pub use i2c::{I2cTransaction, MockI2c};
pub use uart::MockUart;
