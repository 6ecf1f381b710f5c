//! Trigger-to-flash sequencing worker.
//!
//! The sequencer consumes sensor wakes, enforces the trigger gate, and
//! orders the camera and flash actuators: camera first, then the
//! computed free-fall delay, then the flash. Within one sequence that
//! ordering is enforced by this task's sequential code alone. The gate
//! is disarmed here but rearmed by the flash actuator once its recovery
//! window elapses, so the gate stays closed for the full sequence span.

use embassy_time::Timer;
use splash_core::gate::TriggerGate;
use splash_core::indicator::gate_color;
use splash_core::link::ConnectionFlag;
use splash_core::timing::flash_delay_ms;

use crate::indicator::IndicatorHandle;
use crate::mailbox::FireMailbox;
use crate::params::TimingStore;

#[cfg(target_os = "none")]
fn log_trigger_dropped() {
    defmt::debug!("sequencer: trigger while disarmed, dropped");
}

#[cfg(not(target_os = "none"))]
fn log_trigger_dropped() {
    println!("sequencer: trigger while disarmed, dropped");
}

#[cfg(target_os = "none")]
fn log_sequence_started(delay_ms: u32) {
    defmt::info!("sequencer: firing, flash in {} ms", delay_ms);
}

#[cfg(not(target_os = "none"))]
fn log_sequence_started(delay_ms: u32) {
    println!("sequencer: firing, flash in {delay_ms} ms");
}

/// Worker that turns sensor wakes into ordered camera/flash signals.
pub struct Sequencer<'a> {
    trigger: &'a FireMailbox,
    camera: &'a FireMailbox,
    flash: &'a FireMailbox,
    gate: &'a TriggerGate,
    timing: &'a TimingStore,
    connection: &'a ConnectionFlag,
    indicator: &'a IndicatorHandle,
}

impl<'a> Sequencer<'a> {
    /// Wires the sequencer to its mailboxes and shared state.
    pub fn new(
        trigger: &'a FireMailbox,
        camera: &'a FireMailbox,
        flash: &'a FireMailbox,
        gate: &'a TriggerGate,
        timing: &'a TimingStore,
        connection: &'a ConnectionFlag,
        indicator: &'a IndicatorHandle,
    ) -> Self {
        Self {
            trigger,
            camera,
            flash,
            gate,
            timing,
            connection,
            indicator,
        }
    }

    /// Services trigger wakes forever.
    pub async fn run(mut self) -> ! {
        loop {
            self.service_trigger().await;
        }
    }

    /// Waits for one trigger wake and runs the sequence it starts.
    ///
    /// A wake arriving while the gate is disarmed is dropped, not
    /// queued. Once the gate is won the sequence runs to completion;
    /// there is no abort path.
    pub async fn service_trigger(&mut self) {
        self.trigger.wait().await;

        if !self.gate.try_disarm() {
            log_trigger_dropped();
            return;
        }

        self.indicator
            .show(gate_color(self.connection.is_connected(), false));
        self.camera.post();

        // A config write landing after this snapshot does not affect
        // the sequence in flight.
        let delay_ms = flash_delay_ms(&self.timing.snapshot());
        log_sequence_started(delay_ms);
        Timer::after_millis(u64::from(delay_ms)).await;

        self.flash.post();
    }
}

#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use embassy_futures::block_on;
    use embassy_time::Duration;
    use splash_core::indicator::StatusColor;
    use splash_core::timing::TimingParameters;

    use super::*;
    use crate::actuators::test_support::{LineEvent, RecordingLine};
    use crate::actuators::{CameraActuator, FlashActuator};

    struct Fixture {
        trigger: FireMailbox,
        camera: FireMailbox,
        flash: FireMailbox,
        gate: TriggerGate,
        timing: TimingStore,
        connection: ConnectionFlag,
        indicator: IndicatorHandle,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                trigger: FireMailbox::new(),
                camera: FireMailbox::new(),
                flash: FireMailbox::new(),
                gate: TriggerGate::new(),
                // A short drop with a large negative offset keeps the
                // computed delay at zero so tests finish immediately.
                timing: TimingStore::new(TimingParameters::new(0.10, -5_000)),
                connection: ConnectionFlag::new(),
                indicator: IndicatorHandle::new(),
            }
        }

        fn sequencer(&self) -> Sequencer<'_> {
            Sequencer::new(
                &self.trigger,
                &self.camera,
                &self.flash,
                &self.gate,
                &self.timing,
                &self.connection,
                &self.indicator,
            )
        }
    }

    #[test]
    fn trigger_signals_camera_then_flash_and_disarms() {
        let fixture = Fixture::new();
        fixture.trigger.post();

        block_on(fixture.sequencer().service_trigger());

        assert!(fixture.camera.is_pending());
        assert!(fixture.flash.is_pending());
        assert!(!fixture.gate.is_armed());
        assert_eq!(fixture.indicator.try_next(), Some(StatusColor::Red));
    }

    #[test]
    fn firing_color_reflects_connection_state() {
        let fixture = Fixture::new();
        fixture.connection.set_connected(true);
        fixture.trigger.post();

        block_on(fixture.sequencer().service_trigger());
        assert_eq!(fixture.indicator.try_next(), Some(StatusColor::Purple));
    }

    #[test]
    fn trigger_while_disarmed_is_dropped() {
        let fixture = Fixture::new();
        assert!(fixture.gate.try_disarm());
        fixture.trigger.post();

        block_on(fixture.sequencer().service_trigger());

        assert!(!fixture.camera.is_pending());
        assert!(!fixture.flash.is_pending());
        assert!(!fixture.gate.is_armed());
    }

    // End-to-end: sensor edge -> camera -> delay -> flash -> recovery ->
    // rearm, with a second edge during the window dropped.
    #[test]
    fn full_sequence_rearms_only_after_recovery() {
        let fixture = Fixture::new();
        let log = RefCell::new(Vec::new());

        fixture.trigger.post();
        block_on(fixture.sequencer().service_trigger());

        let mut camera = CameraActuator::with_pulse(
            &fixture.camera,
            RecordingLine {
                label: "camera",
                log: &log,
            },
            Duration::from_millis(1),
        );
        let mut flash = FlashActuator::with_timings(
            &fixture.flash,
            RecordingLine {
                label: "flash",
                log: &log,
            },
            &fixture.gate,
            &fixture.connection,
            &fixture.indicator,
            Duration::from_millis(1),
            Duration::from_millis(1),
        );

        block_on(fixture.camera.wait());
        block_on(camera.fire_once());

        // A second sensor edge lands while the gate is down: dropped.
        fixture.trigger.post();
        block_on(fixture.sequencer().service_trigger());
        assert!(!fixture.camera.is_pending());

        block_on(fixture.flash.wait());
        assert!(!fixture.gate.is_armed());
        block_on(flash.fire_once());
        assert!(fixture.gate.is_armed());

        assert_eq!(
            log.into_inner(),
            vec![
                ("camera", LineEvent::High),
                ("camera", LineEvent::Low),
                ("flash", LineEvent::High),
                ("flash", LineEvent::Low),
            ]
        );

        // With the gate restored the next edge starts a new sequence.
        fixture.trigger.post();
        block_on(fixture.sequencer().service_trigger());
        assert!(fixture.camera.is_pending());
    }
}
