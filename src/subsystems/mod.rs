//! Autopilot subsystems

pub mod ahrs;
pub mod tilt;
