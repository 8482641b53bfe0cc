//! Platform abstraction layer
//!
//! Hardware access goes through the traits in this module so the sensor
//! driver and the transmitter can run against mock implementations on the
//! host and embassy-rp peripherals on the Pico.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "pico2_w")]
pub mod rp2350;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{I2cConfig, I2cInterface, UartConfig, UartInterface};
