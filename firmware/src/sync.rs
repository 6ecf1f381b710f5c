//! Raw mutex selection for shared primitives.
//!
//! On the MCU the mailboxes and the timing store must be safe against
//! interrupt-context posts, so they sit behind a critical section. Host
//! builds run the test suites on a single thread and use the no-op
//! mutex instead.

#[cfg(not(target_os = "none"))]
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
#[cfg(target_os = "none")]
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

#[cfg(target_os = "none")]
pub type SharedRawMutex = CriticalSectionRawMutex;
#[cfg(not(target_os = "none"))]
pub type SharedRawMutex = NoopRawMutex;
