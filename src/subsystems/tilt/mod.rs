//! Tilt event detection
//!
//! Maps one cycle's Euler angles to zero, one, or two discrete events. The
//! checks are independent per axis and stateless; an angle parked past the
//! threshold re-emits every cycle (no hysteresis).

use crate::subsystems::ahrs::EulerAngles;
use heapless::Vec;

/// Tilt threshold in degrees; exceedance is strict (`> 10`, not `>= 10`)
pub const TILT_THRESHOLD_DEG: f32 = 10.0;

/// Axis a tilt event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
#[repr(u8)]
pub enum TiltAxis {
    /// Heading exceedance
    Yaw = 0,
    /// Roll exceedance
    Roll = 1,
}

/// One tilt exceedance event
///
/// `value` is the angle in degrees truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub struct TiltEvent {
    /// Which axis crossed the threshold
    pub axis: TiltAxis,
    /// Angle in whole degrees
    pub value: i16,
}

/// Detect tilt exceedances for one cycle, yaw checked before roll
pub fn detect(angles: &EulerAngles) -> Vec<TiltEvent, 2> {
    let mut events = Vec::new();

    if angles.yaw > TILT_THRESHOLD_DEG || angles.yaw < -TILT_THRESHOLD_DEG {
        let _ = events.push(TiltEvent {
            axis: TiltAxis::Yaw,
            value: angles.yaw as i16,
        });
    }
    if angles.roll > TILT_THRESHOLD_DEG || angles.roll < -TILT_THRESHOLD_DEG {
        let _ = events.push(TiltEvent {
            axis: TiltAxis::Roll,
            value: angles.roll as i16,
        });
    }

    events
}
