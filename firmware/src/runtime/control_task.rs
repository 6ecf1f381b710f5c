use splash_core::store::EmptyParameterStore;

use crate::transport::{ControlHandler, service};

use super::{CAMERA_MAILBOX, CONNECTION, CONTROL_REQUESTS, FLASH_MAILBOX, TIMING};

/// Replays deferred control events into the handler.
///
/// The persistence collaborator is not wired up on this board yet, so
/// applied parameters stay live until reboot.
#[embassy_executor::task]
pub async fn run() -> ! {
    let mut handler = ControlHandler::new(
        &CAMERA_MAILBOX,
        &FLASH_MAILBOX,
        &TIMING,
        &CONNECTION,
        EmptyParameterStore::new(),
    );
    service(&CONTROL_REQUESTS, &mut handler).await
}
