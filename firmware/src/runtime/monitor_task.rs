use crate::monitor::LinkMonitor;

use super::{CONNECTION, GATE, INDICATOR, TIMING, hw};

#[embassy_executor::task]
pub async fn run() -> ! {
    LinkMonitor::new(hw::IdleLink, &CONNECTION, &GATE, &TIMING, &INDICATOR)
        .run()
        .await
}
