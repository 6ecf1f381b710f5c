use cortex_m::interrupt;
use cortex_m::register::primask;
use critical_section::{self, RawRestoreState};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32 as hal;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use splash_core::gate::TriggerGate;
use splash_core::indicator::gate_color;
use splash_core::link::ConnectionFlag;
use splash_core::store::{EmptyParameterStore, load_or_default};
use splash_core::timing::TimingParameters;

use crate::indicator::IndicatorHandle;
use crate::mailbox::FireMailbox;
use crate::params::TimingStore;
use crate::transport::ControlQueue;

mod camera_task;
mod control_task;
mod flash_task;
mod hw;
mod monitor_task;
mod pixel_task;
mod sensor_task;
mod sequencer_task;

critical_section::set_impl!(InterruptCriticalSection);

struct InterruptCriticalSection;

unsafe impl critical_section::Impl for InterruptCriticalSection {
    unsafe fn acquire() -> RawRestoreState {
        let primask = primask::read();
        interrupt::disable();
        primask.is_active()
    }

    unsafe fn release(restore_state: RawRestoreState) {
        if restore_state {
            unsafe {
                interrupt::enable();
            }
        }
    }
}

pub(super) static TRIGGER_MAILBOX: FireMailbox = FireMailbox::new();
pub(super) static CAMERA_MAILBOX: FireMailbox = FireMailbox::new();
pub(super) static FLASH_MAILBOX: FireMailbox = FireMailbox::new();
pub(super) static GATE: TriggerGate = TriggerGate::new();
pub(super) static CONNECTION: ConnectionFlag = ConnectionFlag::new();
pub(super) static TIMING: TimingStore = TimingStore::new(TimingParameters::DEFAULT);
pub(super) static INDICATOR: IndicatorHandle = IndicatorHandle::new();

/// Registration point for the wireless glue: callbacks post deferred
/// events here and the control task replays them.
pub static CONTROL_REQUESTS: ControlQueue = ControlQueue::new();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) {
    let config = hal::Config::default();
    let hal::Peripherals {
        PA2, PA3, PB0, EXTI0, ..
    } = hal::init(config);

    TIMING.replace(load_or_default(&mut EmptyParameterStore::new()));

    let camera_line = hw::PulseLine::new(Output::new(PA2, Level::Low, Speed::Low));
    let flash_line = hw::PulseLine::new(Output::new(PA3, Level::Low, Speed::Low));
    let sensor = ExtiInput::new(PB0, EXTI0, Pull::Down);

    INDICATOR.show(gate_color(false, true));

    spawner
        .spawn(sensor_task::run(sensor))
        .expect("failed to spawn sensor task");
    spawner
        .spawn(sequencer_task::run())
        .expect("failed to spawn sequencer task");
    spawner
        .spawn(camera_task::run(camera_line))
        .expect("failed to spawn camera task");
    spawner
        .spawn(flash_task::run(flash_line))
        .expect("failed to spawn flash task");
    spawner
        .spawn(pixel_task::run())
        .expect("failed to spawn pixel task");
    spawner
        .spawn(monitor_task::run())
        .expect("failed to spawn link monitor task");
    spawner
        .spawn(control_task::run())
        .expect("failed to spawn control task");

    core::future::pending::<()>().await;
}
