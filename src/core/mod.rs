//! Core systems

pub mod logging;
pub mod tasks;

pub use tasks::{halt_forever, TaskSpawnConfig, SAMPLER_TASK, TRANSMITTER_TASK};
