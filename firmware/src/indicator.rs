//! Status pixel plumbing.
//!
//! Several workers update the pixel (sequencer, flash actuator, link
//! monitor). Rather than share the driver behind a lock, each posts the
//! desired color to a capacity-1 signal and a dedicated task drains it
//! into the hardware. Writes are infrequent and visually idempotent, so
//! last-writer-wins is acceptable.

use embassy_sync::signal::Signal;
use splash_core::indicator::StatusColor;

use crate::sync::SharedRawMutex;

/// Handle other components use to request a pixel color.
pub struct IndicatorHandle {
    color: Signal<SharedRawMutex, StatusColor>,
}

impl IndicatorHandle {
    /// Creates a handle with no pending color.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: Signal::new(),
        }
    }

    /// Requests a color, overwriting any undisplayed request.
    pub fn show(&self, color: StatusColor) {
        self.color.signal(color);
    }

    /// Waits for the next requested color.
    pub async fn next(&self) -> StatusColor {
        self.color.wait().await
    }

    /// Takes the pending request without waiting, if any.
    pub fn try_next(&self) -> Option<StatusColor> {
        self.color.try_take()
    }
}

impl Default for IndicatorHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Abstraction over the addressable status pixel.
pub trait PixelDriver {
    /// Displays the given color.
    fn show(&mut self, color: StatusColor);
}

/// Pixel driver that discards every update.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopPixel;

impl NoopPixel {
    /// Creates a new no-op pixel driver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PixelDriver for NoopPixel {
    fn show(&mut self, _: StatusColor) {}
}

/// Worker that drains color requests into the pixel driver.
pub struct IndicatorTask<'a, P: PixelDriver> {
    handle: &'a IndicatorHandle,
    driver: P,
}

impl<'a, P: PixelDriver> IndicatorTask<'a, P> {
    /// Creates the worker around a handle and a driver.
    pub fn new(handle: &'a IndicatorHandle, driver: P) -> Self {
        Self { handle, driver }
    }

    /// Displays pending color requests forever.
    pub async fn run(mut self) -> ! {
        loop {
            let color = self.handle.next().await;
            self.driver.show(color);
        }
    }
}
