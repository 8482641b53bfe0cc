//! Device drivers
//!
//! Drivers are written against the platform traits so they can be exercised
//! with the mock platform on the host.

pub mod imu;
pub mod traits;
