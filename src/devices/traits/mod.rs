//! Device-independent sensor traits and data types

pub mod imu;

pub use imu::{ImuError, ImuSensor, RawSample};
