#![cfg_attr(not(test), no_std)]

//! pico-tilt - Orientation-tracking tilt streamer for Raspberry Pi Pico
//!
//! Samples an MPU-6050 6-axis IMU at a fixed 100 Hz cadence, fuses the raw
//! samples into a roll/pitch/yaw attitude estimate, and streams tilt
//! exceedance events over UART as fixed 4-byte frames.
//!
//! The pipeline is two tasks joined by a bounded channel:
//!
//! ```text
//! MPU-6050 ──> sampler task ──> event queue (32) ──> transmitter task ──> UART
//!              (fuse + detect)                        (encode + write)
//! ```

// The mock platform records into growable buffers
#[cfg(feature = "mock")]
extern crate std;

// Platform abstraction layer (I2C/UART traits, mock and embassy-rp backends)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Core systems (logging, task spawn parameters)
pub mod core;

// Attitude estimation and tilt detection
pub mod subsystems;

// Wire frames, event queue, transmitter task
pub mod communication;
