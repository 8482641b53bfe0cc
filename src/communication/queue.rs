//! Bounded event handoff queue
//!
//! Fixed-capacity FIFO between the sampling task (single producer) and the
//! transmitter task (single consumer). `send` suspends while the queue is
//! full and `receive` suspends while it is empty; nothing is ever dropped
//! or reordered.

use crate::subsystems::tilt::TiltEvent;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

/// Queue capacity in events
pub const EVENT_QUEUE_DEPTH: usize = 32;

/// The handoff queue, constructed once at startup and shared by reference
pub type EventQueue = Channel<CriticalSectionRawMutex, TiltEvent, EVENT_QUEUE_DEPTH>;

/// Producer handle for the sampling task
pub type EventSender<'a> = Sender<'a, CriticalSectionRawMutex, TiltEvent, EVENT_QUEUE_DEPTH>;

/// Consumer handle for the transmitter task
pub type EventReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, TiltEvent, EVENT_QUEUE_DEPTH>;
