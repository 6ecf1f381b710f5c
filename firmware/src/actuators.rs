//! Camera and flash pulse workers.
//!
//! Each actuator owns one output line and one mailbox, and realizes its
//! pulse widths as blocking sleeps inside its own worker task so the
//! command/config path and edge detection stay responsive during a
//! pulse. Neither actuator carries an internal lock: a second fire
//! signal arriving mid-pulse is coalesced by the mailbox, so pulses may
//! be missed but never overlap.

use embassy_time::{Duration, Timer};
use splash_core::gate::TriggerGate;
use splash_core::indicator::gate_color;
use splash_core::link::ConnectionFlag;
use splash_core::timing::{CAMERA_PULSE, FLASH_PULSE, FLASH_RECOVERY};

use crate::indicator::IndicatorHandle;
use crate::mailbox::FireMailbox;

/// Abstraction over a digital trigger output.
pub trait TriggerLine {
    /// Drives the line high.
    fn set_high(&mut self);

    /// Drives the line low.
    fn set_low(&mut self);
}

fn as_embassy(duration: core::time::Duration) -> Duration {
    let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);
    Duration::from_micros(micros)
}

#[cfg(target_os = "none")]
fn log_camera_fired() {
    defmt::info!("camera: shutter pulse");
}

#[cfg(not(target_os = "none"))]
fn log_camera_fired() {
    println!("camera: shutter pulse");
}

#[cfg(target_os = "none")]
fn log_flash_fired() {
    defmt::info!("flash: trigger pulse");
}

#[cfg(not(target_os = "none"))]
fn log_flash_fired() {
    println!("flash: trigger pulse");
}

#[cfg(target_os = "none")]
fn log_gate_rearmed() {
    defmt::info!("flash: recovery elapsed, gate rearmed");
}

#[cfg(not(target_os = "none"))]
fn log_gate_rearmed() {
    println!("flash: recovery elapsed, gate rearmed");
}

/// Worker pulsing the camera shutter line.
pub struct CameraActuator<'a, L: TriggerLine> {
    mailbox: &'a FireMailbox,
    line: L,
    pulse: Duration,
}

impl<'a, L: TriggerLine> CameraActuator<'a, L> {
    /// Creates a camera actuator with the standard shutter pulse width.
    pub fn new(mailbox: &'a FireMailbox, line: L) -> Self {
        Self::with_pulse(mailbox, line, as_embassy(CAMERA_PULSE))
    }

    /// Creates a camera actuator with an explicit pulse width.
    pub fn with_pulse(mailbox: &'a FireMailbox, line: L, pulse: Duration) -> Self {
        Self {
            mailbox,
            line,
            pulse,
        }
    }

    /// Services fire signals forever.
    pub async fn run(mut self) -> ! {
        loop {
            self.mailbox.wait().await;
            self.fire_once().await;
        }
    }

    /// Drives one shutter pulse.
    pub async fn fire_once(&mut self) {
        log_camera_fired();
        self.line.set_high();
        Timer::after(self.pulse).await;
        self.line.set_low();
    }
}

/// Worker pulsing the flash line and closing out each sequence.
///
/// After the pulse the worker sleeps the recovery window, rearms the
/// trigger gate it shares with the sequencer, and restores the armed
/// indicator color. The recovery window is what rate-limits successive
/// sequences.
pub struct FlashActuator<'a, L: TriggerLine> {
    mailbox: &'a FireMailbox,
    line: L,
    gate: &'a TriggerGate,
    connection: &'a ConnectionFlag,
    indicator: &'a IndicatorHandle,
    pulse: Duration,
    recovery: Duration,
}

impl<'a, L: TriggerLine> FlashActuator<'a, L> {
    /// Creates a flash actuator with the standard pulse and recovery
    /// timings.
    pub fn new(
        mailbox: &'a FireMailbox,
        line: L,
        gate: &'a TriggerGate,
        connection: &'a ConnectionFlag,
        indicator: &'a IndicatorHandle,
    ) -> Self {
        Self::with_timings(
            mailbox,
            line,
            gate,
            connection,
            indicator,
            as_embassy(FLASH_PULSE),
            as_embassy(FLASH_RECOVERY),
        )
    }

    /// Creates a flash actuator with explicit timings.
    pub fn with_timings(
        mailbox: &'a FireMailbox,
        line: L,
        gate: &'a TriggerGate,
        connection: &'a ConnectionFlag,
        indicator: &'a IndicatorHandle,
        pulse: Duration,
        recovery: Duration,
    ) -> Self {
        Self {
            mailbox,
            line,
            gate,
            connection,
            indicator,
            pulse,
            recovery,
        }
    }

    /// Services fire signals forever.
    pub async fn run(mut self) -> ! {
        loop {
            self.mailbox.wait().await;
            self.fire_once().await;
        }
    }

    /// Drives one flash pulse, waits out the recovery window, and
    /// rearms the gate.
    pub async fn fire_once(&mut self) {
        log_flash_fired();
        self.line.set_high();
        Timer::after(self.pulse).await;
        self.line.set_low();

        Timer::after(self.recovery).await;
        self.gate.rearm();
        log_gate_rearmed();
        self.indicator
            .show(gate_color(self.connection.is_connected(), true));
    }
}


#[cfg(test)]
mod tests {
    use core::cell::RefCell;

    use embassy_futures::block_on;
    use embassy_time::Duration;
    use splash_core::indicator::StatusColor;

    use super::test_support::{LineEvent, RecordingLine};
    use super::*;

    #[test]
    fn camera_pulse_drives_high_then_low() {
        let log = RefCell::new(Vec::new());
        let mailbox = FireMailbox::new();
        let line = RecordingLine {
            label: "camera",
            log: &log,
        };
        let mut camera = CameraActuator::with_pulse(&mailbox, line, Duration::from_millis(1));

        block_on(camera.fire_once());

        assert_eq!(
            log.into_inner(),
            vec![("camera", LineEvent::High), ("camera", LineEvent::Low)]
        );
    }

    #[test]
    fn flash_pulse_rearms_gate_after_recovery() {
        let log = RefCell::new(Vec::new());
        let mailbox = FireMailbox::new();
        let gate = TriggerGate::new();
        let connection = ConnectionFlag::new();
        let indicator = IndicatorHandle::new();
        assert!(gate.try_disarm());

        let line = RecordingLine {
            label: "flash",
            log: &log,
        };
        let mut flash = FlashActuator::with_timings(
            &mailbox,
            line,
            &gate,
            &connection,
            &indicator,
            Duration::from_millis(1),
            Duration::from_millis(1),
        );

        block_on(flash.fire_once());

        assert!(gate.is_armed());
        assert_eq!(
            log.into_inner(),
            vec![("flash", LineEvent::High), ("flash", LineEvent::Low)]
        );
        // Standalone + armed maps back to green.
        assert_eq!(indicator.try_next(), Some(StatusColor::Green));
    }

    #[test]
    fn flash_reports_connected_armed_color_when_peer_present() {
        let log = RefCell::new(Vec::new());
        let mailbox = FireMailbox::new();
        let gate = TriggerGate::new();
        let connection = ConnectionFlag::new();
        let indicator = IndicatorHandle::new();
        connection.set_connected(true);

        let line = RecordingLine {
            label: "flash",
            log: &log,
        };
        let mut flash = FlashActuator::with_timings(
            &mailbox,
            line,
            &gate,
            &connection,
            &indicator,
            Duration::from_millis(1),
            Duration::from_millis(1),
        );

        block_on(flash.fire_once());
        assert_eq!(indicator.try_next(), Some(StatusColor::Yellow));
    }
}
