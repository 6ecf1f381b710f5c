use embassy_stm32::exti::ExtiInput;

use super::TRIGGER_MAILBOX;

/// Forwards drop-sensor rising edges to the sequencer.
///
/// The body stays post-only so the next edge is armed again
/// immediately; all gating and pacing happens downstream.
#[embassy_executor::task]
pub async fn run(mut sensor: ExtiInput<'static>) -> ! {
    loop {
        sensor.wait_for_rising_edge().await;
        TRIGGER_MAILBOX.post();
    }
}
