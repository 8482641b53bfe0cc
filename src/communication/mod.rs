//! Event handoff and serial output

pub mod frame;
pub mod queue;
pub mod task;

pub use frame::{decode, encode, EOP, FRAME_LEN};
pub use queue::{EventQueue, EventReceiver, EventSender, EVENT_QUEUE_DEPTH};
pub use task::run_transmitter_task;
