//! Transmitter task
//!
//! Pops one event at a time, encodes it, and writes the 4-byte frame to the
//! UART. The write is blocking-complete; there is no retry, acknowledgment,
//! or checksum.

use super::frame;
use super::queue::EventReceiver;
use crate::core::halt_forever;
use crate::platform::UartInterface;

/// Run the transmitter loop forever
///
/// Suspends on `receive` while the queue is empty and on the UART write. A
/// transport failure parks the task permanently.
pub async fn run_transmitter_task<U: UartInterface>(mut uart: U, events: EventReceiver<'_>) -> ! {
    loop {
        let event = events.receive().await;
        let frame = frame::encode(event);
        if let Err(e) = uart.write(&frame).await {
            crate::log_error!("frame write failed: {:?}", e);
            halt_forever().await
        }
    }
}
