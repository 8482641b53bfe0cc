//! MPU-6050 6-axis IMU driver

mod driver;
pub mod registers;

pub use driver::{Mpu6050Config, Mpu6050Driver};
