//! Task spawn parameters and suspension helpers
//!
//! Stack size, priority, and name for each task live here instead of being
//! embedded at the spawn site. Both tasks run at equal priority; ordering
//! between them is enforced only by the event queue.

/// Per-task spawn parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpawnConfig {
    /// Stack size in bytes
    pub stack_size: usize,

    /// Scheduler priority (higher runs first)
    pub priority: u8,

    /// Task name for diagnostics
    pub name: &'static str,
}

/// Sampling task: IMU acquisition, fusion, tilt detection
pub const SAMPLER_TASK: TaskSpawnConfig = TaskSpawnConfig {
    stack_size: 8192,
    priority: 1,
    name: "tilt_sampler",
};

/// Transmitter task: frame encoding and UART output
pub const TRANSMITTER_TASK: TaskSpawnConfig = TaskSpawnConfig {
    stack_size: 8192,
    priority: 1,
    name: "tilt_tx",
};

/// Suspend the calling task forever
///
/// A failed bus leaves its task permanently parked rather than retrying;
/// retries would change the timing observable at the serial output.
pub async fn halt_forever() -> ! {
    loop {
        core::future::pending::<()>().await;
    }
}
