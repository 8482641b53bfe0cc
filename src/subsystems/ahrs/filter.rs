//! Complementary quaternion attitude filter
//!
//! First-order integration of the angular rate into the orientation
//! quaternion, with the accelerometer used as a noisy gravity reference to
//! bleed off gyroscope drift on roll and pitch. The quaternion is
//! renormalized after every update.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

/// Accelerometer correction gain
///
/// Scales the gravity-alignment error folded into the angular rate before
/// integration. 0.5 trades drift suppression against accelerometer noise.
const ACCEL_GAIN: f32 = 0.5;

/// Orientation as roll/pitch/yaw in degrees
///
/// Roll and yaw are sign-inverted relative to the filter's native ZYX
/// decomposition to match the physical mounting of the sensor board; pitch
/// passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Roll in degrees
    pub roll: f32,
    /// Pitch in degrees
    pub pitch: f32,
    /// Yaw in degrees
    pub yaw: f32,
}

/// Attitude filter state
///
/// Owned exclusively by the sampling task; one `update` per cycle.
pub struct TiltFilter {
    /// Orientation quaternion (body to world), unit magnitude after each update
    q: Quaternion<f32>,
}

impl Default for TiltFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltFilter {
    /// Create a filter at the identity orientation (level, zero yaw)
    pub fn new() -> Self {
        Self {
            q: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }

    /// Advance the estimate by one sample
    ///
    /// # Arguments
    ///
    /// * `gyro_dps` - angular rate in degrees per second, body frame
    /// * `accel_g` - acceleration in g, body frame (includes gravity)
    /// * `dt` - sample period in seconds; the caller supplies the nominal
    ///   constant cadence, not a measured elapsed time
    pub fn update(&mut self, gyro_dps: Vector3<f32>, accel_g: Vector3<f32>, dt: f32) -> EulerAngles {
        let mut omega = gyro_dps.map(f32::to_radians);

        // Gravity correction: rotate world +Z into the body frame and steer
        // the angular rate toward the measured gravity direction. Skipped
        // when the accelerometer reads zero (free fall or missing data).
        let accel_norm = accel_g.norm();
        if accel_norm > f32::EPSILON {
            let measured = accel_g / accel_norm;
            let estimated = self.gravity_body();
            omega += measured.cross(&estimated) * ACCEL_GAIN;
        }

        // First-order quaternion integration: q += 0.5 * q ⊗ (0, ω) * dt
        let q_dot = self.q * Quaternion::from_imag(omega) * 0.5;
        self.q += q_dot * dt;
        self.q.normalize_mut();

        self.euler_angles()
    }

    /// Current orientation quaternion (w, x, y, z)
    pub fn quaternion(&self) -> Quaternion<f32> {
        self.q
    }

    /// Estimated gravity direction in the body frame (world +Z rotated back)
    fn gravity_body(&self) -> Vector3<f32> {
        let w = self.q.w;
        let v = self.q.imag();
        Vector3::new(
            2.0 * (v.x * v.z - w * v.y),
            2.0 * (v.y * v.z + w * v.x),
            w * w - v.x * v.x - v.y * v.y + v.z * v.z,
        )
    }

    /// Mounting-corrected Euler view of the current quaternion
    fn euler_angles(&self) -> EulerAngles {
        let (roll, pitch, yaw) = UnitQuaternion::from_quaternion(self.q).euler_angles();
        EulerAngles {
            roll: -roll.to_degrees(),
            pitch: pitch.to_degrees(),
            yaw: -yaw.to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.01;

    fn level_accel() -> Vector3<f32> {
        Vector3::new(0.0, 0.0, 1.0)
    }

    #[test]
    fn test_identity_stays_level() {
        let mut filter = TiltFilter::new();
        for _ in 0..100 {
            let angles = filter.update(Vector3::zeros(), level_accel(), DT);
            assert!(angles.roll.abs() < 1e-3);
            assert!(angles.pitch.abs() < 1e-3);
            assert!(angles.yaw.abs() < 1e-3);
        }
    }

    #[test]
    fn test_quaternion_stays_normalized() {
        let mut filter = TiltFilter::new();
        let gyro = Vector3::new(120.0, -45.0, 80.0);
        let accel = Vector3::new(0.3, -0.2, 0.9);
        for _ in 0..500 {
            filter.update(gyro, accel, DT);
            let norm = filter.quaternion().norm();
            assert!((norm - 1.0).abs() < 1e-3, "norm drifted: {}", norm);
        }
    }

    #[test]
    fn test_yaw_integrates_gyro_z() {
        let mut filter = TiltFilter::new();
        // 100 deg/s around body Z for one second, accel silent
        let mut angles = EulerAngles {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
        };
        for _ in 0..100 {
            angles = filter.update(Vector3::new(0.0, 0.0, 100.0), Vector3::zeros(), DT);
        }
        // Native yaw ≈ +100°, reported yaw is sign-inverted
        assert!(
            (angles.yaw + 100.0).abs() < 0.5,
            "yaw was {} expected ~-100",
            angles.yaw
        );
    }

    #[test]
    fn test_sign_convention_matches_native_decomposition() {
        let mut filter = TiltFilter::new();
        let mut angles = filter.update(
            Vector3::new(40.0, -25.0, 60.0),
            Vector3::new(0.1, 0.2, 0.95),
            DT,
        );
        for _ in 0..50 {
            angles = filter.update(
                Vector3::new(40.0, -25.0, 60.0),
                Vector3::new(0.1, 0.2, 0.95),
                DT,
            );
        }

        let (roll, pitch, yaw) =
            UnitQuaternion::from_quaternion(filter.quaternion()).euler_angles();
        assert!((angles.roll + roll.to_degrees()).abs() < 1e-3);
        assert!((angles.pitch - pitch.to_degrees()).abs() < 1e-3);
        assert!((angles.yaw + yaw.to_degrees()).abs() < 1e-3);
    }

    #[test]
    fn test_gravity_correction_pulls_level() {
        let mut filter = TiltFilter::new();

        // Tip the estimate 20° in roll by integrating gyro alone
        for _ in 0..200 {
            filter.update(Vector3::new(10.0, 0.0, 0.0), Vector3::zeros(), DT);
        }
        let tilted = filter.euler_angles();
        assert!(tilted.roll.abs() > 15.0);

        // A level accelerometer with a silent gyro must erode the tilt
        let mut angles = tilted;
        for _ in 0..2000 {
            angles = filter.update(Vector3::zeros(), level_accel(), DT);
        }
        assert!(
            angles.roll.abs() < 0.5,
            "roll did not converge: {}",
            angles.roll
        );
        assert!((filter.quaternion().norm() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_accel_skips_correction() {
        let mut filter = TiltFilter::new();
        // Free-fall reading must not produce NaNs or rotation
        let angles = filter.update(Vector3::zeros(), Vector3::zeros(), DT);
        assert_eq!(angles.roll, 0.0);
        assert_eq!(angles.pitch, 0.0);
        assert_eq!(angles.yaw, 0.0);
        assert!((filter.quaternion().norm() - 1.0).abs() < 1e-6);
    }
}
