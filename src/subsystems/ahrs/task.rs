//! Sampling task
//!
//! One steady-state cycle, repeated forever: acquire a raw sample, scale it,
//! advance the attitude filter, detect tilt exceedances, and push each event
//! into the handoff queue followed by a fixed delay.

use super::TiltFilter;
use crate::communication::queue::EventSender;
use crate::core::halt_forever;
use crate::devices::traits::ImuSensor;
use crate::subsystems::tilt::detect;
use embassy_time::Timer;

/// Nominal sample period fed to the filter as `dt`
///
/// The loop is assumed to run at this constant cadence; the elapsed time is
/// not measured. If the real period drifts, the drift correction degrades.
pub const SAMPLE_PERIOD_S: f32 = 0.01;

/// Delay after each pushed event, in milliseconds
///
/// Applied once per event, not once per cycle: a cycle that emits two events
/// stalls twice.
pub const EVENT_PUSH_DELAY_MS: u64 = 10;

/// Run the sampling loop forever
///
/// The task suspends on the sensor read, on `send` when the queue is full
/// (backpressure), and on the post-push delay. A sensor bus failure parks
/// the task permanently.
pub async fn run_sampler_task<I: ImuSensor>(
    mut imu: I,
    mut filter: TiltFilter,
    events: EventSender<'_>,
) -> ! {
    loop {
        let sample = match imu.read_raw().await {
            Ok(sample) => sample,
            Err(e) => {
                crate::log_error!("IMU read failed: {:?}", e);
                halt_forever().await
            }
        };

        let angles = filter.update(sample.gyro_dps(), sample.accel_g(), SAMPLE_PERIOD_S);
        crate::log_debug!(
            "roll {} pitch {} yaw {} temp {}",
            angles.roll,
            angles.pitch,
            angles.yaw,
            sample.temp_celsius()
        );

        for event in detect(&angles) {
            events.send(event).await;
            Timer::after_millis(EVENT_PUSH_DELAY_MS).await;
        }
    }
}
