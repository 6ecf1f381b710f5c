use embassy_stm32::gpio::Output;

use crate::actuators::TriggerLine;

/// Push-pull output driving an optocoupled trigger input.
pub struct PulseLine<'d> {
    output: Output<'d>,
}

impl<'d> PulseLine<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl TriggerLine for PulseLine<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }
}

/// Link stub standing in until the radio module glue is wired up.
///
/// The glue that owns the radio module implements
/// [`crate::transport::ControlLink`] against its own transport; with no
/// module present there is nothing to re-advertise and nowhere to push
/// config text.
pub struct IdleLink;

impl crate::transport::ControlLink for IdleLink {
    fn resume_advertising(&mut self) {}

    fn push_config(&mut self, _: &str) {}
}
