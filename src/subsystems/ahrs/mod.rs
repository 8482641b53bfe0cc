//! AHRS (Attitude and Heading Reference System)
//!
//! Quaternion attitude estimation from gyroscope and accelerometer, plus the
//! sampling task that drives it. Gyroscope-only dead-reckoning is corrected
//! by gravity sensing from the accelerometer; with no magnetometer in the
//! loop, yaw drifts slowly over time — accepted behavior.

pub mod filter;
pub mod task;

pub use filter::{EulerAngles, TiltFilter};
pub use task::{run_sampler_task, EVENT_PUSH_DELAY_MS, SAMPLE_PERIOD_S};
