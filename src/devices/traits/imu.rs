//! IMU sensor trait and data types
//!
//! Device-independent interface between the inertial sensor driver and the
//! attitude pipeline. Drivers hand over raw register values; scaling to
//! physical units happens in the sampling loop.

use crate::platform::PlatformError;
use nalgebra::Vector3;

/// Accelerometer sensitivity in LSB per g (±2 g full-scale range)
pub const ACCEL_LSB_PER_G: f32 = 16384.0;

/// Gyroscope sensitivity in LSB per deg/s (±250 deg/s full-scale range)
pub const GYRO_LSB_PER_DPS: f32 = 131.0;

/// Temperature sensitivity in LSB per °C
pub const TEMP_LSB_PER_C: f32 = 340.0;

/// Temperature offset in °C
pub const TEMP_OFFSET_C: f32 = 36.53;

/// IMU error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum ImuError {
    /// Bus transaction with the sensor failed
    Bus(PlatformError),
}

impl From<PlatformError> for ImuError {
    fn from(e: PlatformError) -> Self {
        ImuError::Bus(e)
    }
}

/// One raw sensor sample, produced once per sampling cycle
///
/// All values are signed 16-bit register contents in sensor units,
/// big-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample {
    /// Accelerometer X/Y/Z
    pub accel: [i16; 3],

    /// Gyroscope X/Y/Z
    pub gyro: [i16; 3],

    /// Die temperature
    pub temp: i16,
}

impl RawSample {
    /// Acceleration in g
    pub fn accel_g(&self) -> Vector3<f32> {
        Vector3::new(
            self.accel[0] as f32 / ACCEL_LSB_PER_G,
            self.accel[1] as f32 / ACCEL_LSB_PER_G,
            self.accel[2] as f32 / ACCEL_LSB_PER_G,
        )
    }

    /// Angular rate in degrees per second
    pub fn gyro_dps(&self) -> Vector3<f32> {
        Vector3::new(
            self.gyro[0] as f32 / GYRO_LSB_PER_DPS,
            self.gyro[1] as f32 / GYRO_LSB_PER_DPS,
            self.gyro[2] as f32 / GYRO_LSB_PER_DPS,
        )
    }

    /// Die temperature in °C
    pub fn temp_celsius(&self) -> f32 {
        self.temp as f32 / TEMP_LSB_PER_C + TEMP_OFFSET_C
    }
}

/// Device-independent IMU interface
///
/// The read blocks until a full sample has been acquired from the device.
#[allow(async_fn_in_trait)]
pub trait ImuSensor {
    /// Read one raw accelerometer/gyroscope/temperature sample
    async fn read_raw(&mut self) -> Result<RawSample, ImuError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accel_scaling() {
        let sample = RawSample {
            accel: [16384, -16384, 8192],
            ..Default::default()
        };
        let accel = sample.accel_g();
        assert!((accel.x - 1.0).abs() < 1e-6);
        assert!((accel.y + 1.0).abs() < 1e-6);
        assert!((accel.z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_gyro_scaling() {
        let sample = RawSample {
            gyro: [131, -262, 0],
            ..Default::default()
        };
        let gyro = sample.gyro_dps();
        assert!((gyro.x - 1.0).abs() < 1e-6);
        assert!((gyro.y + 2.0).abs() < 1e-6);
        assert_eq!(gyro.z, 0.0);
    }

    #[test]
    fn test_temp_conversion() {
        // 0 raw reads as the sensor's offset temperature
        let sample = RawSample::default();
        assert!((sample.temp_celsius() - 36.53).abs() < 1e-4);

        let warm = RawSample {
            temp: 340,
            ..Default::default()
        };
        assert!((warm.temp_celsius() - 37.53).abs() < 1e-4);
    }
}
