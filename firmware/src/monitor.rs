//! Connection lifecycle monitor.
//!
//! The monitor polls the shared connection flag once per iteration and
//! reacts only on edges. A connect edge shows the just-connected color
//! and pushes the live config text so a new peer sees the current
//! parameters without an explicit read. A disconnect edge waits a short
//! grace period for the stack to settle, asks the transport to resume
//! advertising, and drops the indicator back to the standalone color
//! for the current gate state. Steady states between edges do nothing.

use embassy_time::{Duration, Timer};
use splash_core::config::encode;
use splash_core::gate::TriggerGate;
use splash_core::indicator::{StatusColor, gate_color};
use splash_core::link::ConnectionFlag;

use crate::indicator::IndicatorHandle;
use crate::params::TimingStore;
use crate::transport::ControlLink;

/// Interval between connection-state polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Settle delay before re-advertising after a disconnect.
pub const DISCONNECT_GRACE: Duration = Duration::from_millis(500);

#[cfg(target_os = "none")]
fn log_connect_edge() {
    defmt::info!("monitor: peer connected, pushing config");
}

#[cfg(not(target_os = "none"))]
fn log_connect_edge() {
    println!("monitor: peer connected, pushing config");
}

#[cfg(target_os = "none")]
fn log_disconnect_edge() {
    defmt::info!("monitor: peer lost, resuming advertising");
}

#[cfg(not(target_os = "none"))]
fn log_disconnect_edge() {
    println!("monitor: peer lost, resuming advertising");
}

/// Timing knobs for the monitor loop.
#[derive(Copy, Clone, Debug)]
pub struct MonitorTimings {
    pub poll_interval: Duration,
    pub disconnect_grace: Duration,
}

impl Default for MonitorTimings {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            disconnect_grace: DISCONNECT_GRACE,
        }
    }
}

/// Worker that edge-detects the connection flag.
pub struct LinkMonitor<'a, L: ControlLink> {
    link: L,
    connection: &'a ConnectionFlag,
    gate: &'a TriggerGate,
    timing: &'a TimingStore,
    indicator: &'a IndicatorHandle,
    timings: MonitorTimings,
    last_connected: bool,
}

impl<'a, L: ControlLink> LinkMonitor<'a, L> {
    /// Creates a monitor with the standard poll and grace timings.
    pub fn new(
        link: L,
        connection: &'a ConnectionFlag,
        gate: &'a TriggerGate,
        timing: &'a TimingStore,
        indicator: &'a IndicatorHandle,
    ) -> Self {
        Self::with_timings(
            link,
            connection,
            gate,
            timing,
            indicator,
            MonitorTimings::default(),
        )
    }

    /// Creates a monitor with explicit timings.
    pub fn with_timings(
        link: L,
        connection: &'a ConnectionFlag,
        gate: &'a TriggerGate,
        timing: &'a TimingStore,
        indicator: &'a IndicatorHandle,
        timings: MonitorTimings,
    ) -> Self {
        Self {
            link,
            connection,
            gate,
            timing,
            indicator,
            timings,
            last_connected: false,
        }
    }

    /// Polls for edges forever.
    pub async fn run(mut self) -> ! {
        loop {
            self.poll_once().await;
            Timer::after(self.timings.poll_interval).await;
        }
    }

    /// Runs one poll iteration, reacting only when the state changed.
    pub async fn poll_once(&mut self) {
        let connected = self.connection.is_connected();
        if connected == self.last_connected {
            return;
        }
        self.last_connected = connected;

        if connected {
            log_connect_edge();
            self.indicator.show(StatusColor::Blue);
            let text = encode(&self.timing.snapshot());
            self.link.push_config(text.as_str());
        } else {
            log_disconnect_edge();
            Timer::after(self.timings.disconnect_grace).await;
            self.link.resume_advertising();
            self.indicator
                .show(gate_color(false, self.gate.is_armed()));
        }
    }
}
