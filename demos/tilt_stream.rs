//! Tilt streamer firmware entry point
//!
//! Wires the MPU-6050 on I2C0 (SDA GPIO4, SCL GPIO5) to UART0 TX (GPIO0)
//! and runs the two pipeline tasks on the embassy executor.
//!
//! ```bash
//! cargo build --release --example tilt_stream --features pico2_w \
//!     --target thumbv8m.main-none-eabihf
//! probe-rs run --chip RP2350 target/thumbv8m.main-none-eabihf/release/examples/tilt_stream
//! ```

#![no_std]
#![no_main]

use {defmt_rtt as _, panic_probe as _};

use embassy_executor::Spawner;
use embassy_rp::{bind_interrupts, i2c, peripherals, uart};

use pico_tilt::communication::{
    run_transmitter_task, EventQueue, EventReceiver, EventSender,
};
use pico_tilt::core::{SAMPLER_TASK, TRANSMITTER_TASK};
use pico_tilt::devices::imu::{Mpu6050Config, Mpu6050Driver};
use pico_tilt::log_info;
use pico_tilt::platform::rp2350::{RpI2c, RpUartTx};
use pico_tilt::platform::{I2cConfig, UartConfig};
use pico_tilt::subsystems::ahrs::{run_sampler_task, TiltFilter};

bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<peripherals::I2C0>;
    UART0_IRQ => uart::InterruptHandler<peripherals::UART0>;
});

// The handoff queue: built once, handed to both tasks
static EVENT_QUEUE: EventQueue = EventQueue::new();

type SamplerImu = Mpu6050Driver<RpI2c<'static, peripherals::I2C0>>;
type FrameUart = RpUartTx<uart::UartTx<'static, peripherals::UART0, uart::Async>>;

#[embassy_executor::task]
async fn sampler_task(imu: SamplerImu, events: EventSender<'static>) {
    run_sampler_task(imu, TiltFilter::new(), events).await
}

#[embassy_executor::task]
async fn transmitter_task(uart: FrameUart, events: EventReceiver<'static>) {
    run_transmitter_task(uart, events).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    let serial_cfg = UartConfig::default();
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = serial_cfg.baud_rate;
    let serial = uart::Uart::new(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, _rx) = serial.split();

    let bus_cfg = I2cConfig::default();
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = bus_cfg.frequency;
    let bus = i2c::I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c_config);

    let imu = match Mpu6050Driver::new(RpI2c::new(bus), Mpu6050Config::default()).await {
        Ok(imu) => imu,
        Err(e) => {
            log_info!("IMU bring-up failed: {:?}", e);
            loop {
                core::future::pending::<()>().await;
            }
        }
    };

    for task in [SAMPLER_TASK, TRANSMITTER_TASK] {
        log_info!(
            "spawning {} (stack {} priority {})",
            task.name,
            task.stack_size,
            task.priority
        );
    }

    spawner.must_spawn(sampler_task(imu, EVENT_QUEUE.sender()));
    spawner.must_spawn(transmitter_task(RpUartTx::new(tx), EVENT_QUEUE.receiver()));
}
