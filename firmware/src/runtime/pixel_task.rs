use crate::indicator::{IndicatorTask, NoopPixel};

use super::INDICATOR;

// NoopPixel stands in for the WS2812 driver until the pixel is routed
// to a timer-capable pin.
#[embassy_executor::task]
pub async fn run() -> ! {
    IndicatorTask::new(&INDICATOR, NoopPixel::new()).run().await
}
