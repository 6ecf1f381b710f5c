//! Control-channel adapter for the wireless collaborator.
//!
//! The wireless stack itself lives outside this crate; it exposes one
//! GATT service and calls back into a single registered
//! [`ControlEvents`] implementation. [`ControlHandler`] is that
//! implementation: it turns characteristic writes into mailbox posts
//! and parameter updates, and records connect/disconnect edges for the
//! link monitor. Every protocol-boundary failure is absorbed and logged
//! here; nothing propagates into the trigger pipeline.

use embassy_sync::channel::Channel;
use heapless::Vec;
use splash_core::command::ManualCommand;
use splash_core::config::{self, ConfigParseError};
use splash_core::link::ConnectionFlag;
use splash_core::store::ParameterStore;

use crate::mailbox::FireMailbox;
use crate::params::TimingStore;
use crate::sync::SharedRawMutex;

/// Advertised device name.
pub const DEVICE_NAME: &str = "SPLASH";

/// UUID of the splash trigger GATT service.
pub const SERVICE_UUID: &str = "5d898c34-12aa-4af5-8adc-0b105f04b528";

/// UUID of the write-only manual test-fire characteristic.
pub const COMMAND_UUID: &str = "4efed56f-8df2-4153-abf2-9aa6c2295752";

/// UUID of the read/write/notify setup characteristic.
pub const SETUP_UUID: &str = "da5d71ce-ece4-4321-9798-1fa3a5614860";

/// Callbacks the wireless stack drives into the controller.
///
/// Implemented once by [`ControlHandler`] and registered at
/// integration time. Callback bodies never block: pulse sleeps stay in
/// the worker tasks so these paths remain responsive mid-pulse.
pub trait ControlEvents {
    /// A peer connected.
    fn on_connect(&mut self);

    /// The peer disconnected.
    fn on_disconnect(&mut self);

    /// The command characteristic was written.
    fn on_command_write(&mut self, payload: &[u8]);

    /// The setup characteristic was written.
    fn on_config_write(&mut self, payload: &[u8]);
}

/// Operations the controller requests from the wireless stack.
pub trait ControlLink {
    /// Restarts advertising after a disconnect.
    fn resume_advertising(&mut self);

    /// Sets the setup characteristic to `text` and notifies the peer.
    fn push_config(&mut self, text: &str);
}

/// Payload bytes retained per deferred characteristic write.
///
/// Longer writes are truncated by the glue before posting; a truncated
/// command or config payload then fails decoding and is ignored like
/// any other malformed write.
pub const REQUEST_PAYLOAD_MAX: usize = config::CONFIG_TEXT_MAX;

/// Control event deferred from the wireless glue into the control task.
///
/// The stack's callback contexts are not async, so the glue copies each
/// event into this owned form and posts it through a [`ControlQueue`];
/// the control task replays it into the registered [`ControlEvents`]
/// implementation.
#[derive(Clone, Debug)]
pub enum ControlRequest {
    Connected,
    Disconnected,
    Command(Vec<u8, REQUEST_PAYLOAD_MAX>),
    Config(Vec<u8, REQUEST_PAYLOAD_MAX>),
}

/// Bounded queue carrying deferred control events.
pub type ControlQueue = Channel<SharedRawMutex, ControlRequest, 4>;

/// Replays one deferred request into the handler.
pub fn dispatch<E: ControlEvents>(events: &mut E, request: &ControlRequest) {
    match request {
        ControlRequest::Connected => events.on_connect(),
        ControlRequest::Disconnected => events.on_disconnect(),
        ControlRequest::Command(payload) => events.on_command_write(payload),
        ControlRequest::Config(payload) => events.on_config_write(payload),
    }
}

/// Drains deferred requests into the handler forever.
pub async fn service<E: ControlEvents>(queue: &ControlQueue, events: &mut E) -> ! {
    loop {
        let request = queue.receive().await;
        dispatch(events, &request);
    }
}

const fn parse_error_label(error: ConfigParseError) -> &'static str {
    match error {
        ConfigParseError::MissingSeparator => "missing separator",
        ConfigParseError::InvalidHeight => "invalid height",
        ConfigParseError::InvalidOffset => "invalid offset",
    }
}

#[cfg(target_os = "none")]
fn log_connect(connected: bool) {
    if connected {
        defmt::info!("control: peer connected");
    } else {
        defmt::info!("control: peer disconnected");
    }
}

#[cfg(not(target_os = "none"))]
fn log_connect(connected: bool) {
    if connected {
        println!("control: peer connected");
    } else {
        println!("control: peer disconnected");
    }
}

#[cfg(target_os = "none")]
fn log_command_ignored(len: usize) {
    defmt::debug!("control: ignoring command payload len={}", len);
}

#[cfg(not(target_os = "none"))]
fn log_command_ignored(len: usize) {
    println!("control: ignoring command payload len={len}");
}

#[cfg(target_os = "none")]
fn log_manual_fire(command: ManualCommand) {
    defmt::info!(
        "control: manual fire flash={} camera={}",
        command.flash,
        command.camera
    );
}

#[cfg(not(target_os = "none"))]
fn log_manual_fire(command: ManualCommand) {
    println!(
        "control: manual fire flash={} camera={}",
        command.flash, command.camera
    );
}

#[cfg(target_os = "none")]
fn log_config_rejected(reason: &'static str) {
    defmt::warn!("control: config write rejected ({})", reason);
}

#[cfg(not(target_os = "none"))]
fn log_config_rejected(reason: &'static str) {
    println!("control: config write rejected ({reason})");
}

#[cfg(target_os = "none")]
fn log_config_applied(height_m: f64, offset_ms: i32) {
    defmt::info!(
        "control: config applied height={} m offset={} ms",
        height_m,
        offset_ms
    );
}

#[cfg(not(target_os = "none"))]
fn log_config_applied(height_m: f64, offset_ms: i32) {
    println!("control: config applied height={height_m} m offset={offset_ms} ms");
}

#[cfg(target_os = "none")]
fn log_persist_failed() {
    defmt::warn!("control: persisting parameters failed, values live until reboot");
}

#[cfg(not(target_os = "none"))]
fn log_persist_failed() {
    println!("control: persisting parameters failed, values live until reboot");
}

/// The single registered [`ControlEvents`] adapter.
pub struct ControlHandler<'a, S: ParameterStore> {
    camera: &'a FireMailbox,
    flash: &'a FireMailbox,
    timing: &'a TimingStore,
    connection: &'a ConnectionFlag,
    store: S,
}

impl<'a, S: ParameterStore> ControlHandler<'a, S> {
    /// Wires the adapter to the actuator mailboxes and shared state.
    pub fn new(
        camera: &'a FireMailbox,
        flash: &'a FireMailbox,
        timing: &'a TimingStore,
        connection: &'a ConnectionFlag,
        store: S,
    ) -> Self {
        Self {
            camera,
            flash,
            timing,
            connection,
            store,
        }
    }
}

impl<S: ParameterStore> ControlEvents for ControlHandler<'_, S> {
    fn on_connect(&mut self) {
        self.connection.set_connected(true);
        log_connect(true);
    }

    fn on_disconnect(&mut self) {
        self.connection.set_connected(false);
        log_connect(false);
    }

    /// Manual test fires post straight to the actuator mailboxes
    /// without consulting the trigger gate, so a test fire may
    /// interleave with an in-flight automatic sequence.
    fn on_command_write(&mut self, payload: &[u8]) {
        let Some(command) = ManualCommand::decode(payload) else {
            log_command_ignored(payload.len());
            return;
        };

        log_manual_fire(command);
        if command.flash {
            self.flash.post();
        }
        if command.camera {
            self.camera.post();
        }
    }

    /// Applies a config write: decode, replace the pair atomically,
    /// persist both keys. Rejected payloads change nothing and persist
    /// nothing.
    fn on_config_write(&mut self, payload: &[u8]) {
        let Ok(text) = core::str::from_utf8(payload) else {
            log_config_rejected("not utf-8");
            return;
        };

        match config::decode(text) {
            Ok(params) => {
                self.timing.replace(params);
                if self.store.save(&params).is_err() {
                    log_persist_failed();
                }
                log_config_applied(params.height_m, params.offset_ms);
            }
            Err(error) => log_config_rejected(parse_error_label(error)),
        }
    }
}
