use crate::actuators::CameraActuator;

use super::{CAMERA_MAILBOX, hw};

#[embassy_executor::task]
pub async fn run(line: hw::PulseLine<'static>) -> ! {
    CameraActuator::new(&CAMERA_MAILBOX, line).run().await
}
