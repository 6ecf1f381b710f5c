use crate::sequencer::Sequencer;

use super::{CAMERA_MAILBOX, CONNECTION, FLASH_MAILBOX, GATE, INDICATOR, TIMING, TRIGGER_MAILBOX};

#[embassy_executor::task]
pub async fn run() -> ! {
    Sequencer::new(
        &TRIGGER_MAILBOX,
        &CAMERA_MAILBOX,
        &FLASH_MAILBOX,
        &GATE,
        &TIMING,
        &CONNECTION,
        &INDICATOR,
    )
    .run()
    .await
}
