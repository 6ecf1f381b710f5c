#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(not(target_os = "none"), allow(dead_code))]

#[cfg(target_os = "none")]
extern crate panic_halt;

// Host builds have no executor to supply a timer queue; the generic
// queue lets `embassy_time::Timer` run under `block_on` in tests.
#[cfg(not(target_os = "none"))]
use embassy_time_queue_utils as _;

mod actuators;
mod indicator;
mod mailbox;
mod monitor;
mod params;
mod sequencer;
mod sync;
mod transport;

#[cfg(target_os = "none")]
mod runtime;

#[cfg(not(target_os = "none"))]
fn main() {}
