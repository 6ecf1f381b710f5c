use crate::actuators::FlashActuator;

use super::{CONNECTION, FLASH_MAILBOX, GATE, INDICATOR, hw};

#[embassy_executor::task]
pub async fn run(line: hw::PulseLine<'static>) -> ! {
    FlashActuator::new(&FLASH_MAILBOX, line, &GATE, &CONNECTION, &INDICATOR)
        .run()
        .await
}
