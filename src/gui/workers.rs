// src/gui/workers.rs
//
// One background worker per panel. Every adb/scrcpy invocation blocks, so
// the click handlers hand a closure to a thread and the outcome comes back
// through a channel drained at the top of each frame. A panel with a live
// worker has its action buttons disabled; nothing else is locked.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use eframe::egui;

use crate::adb::{self, DeviceInfo};
use crate::scrcpy::{self, SessionResult};
use crate::version::ToolVersion;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Connect,
    Start,
    Config,
}

/// What a device listing was requested for. The listing itself is one job;
/// the follow-up runs once the user has a serial (directly when exactly one
/// device answered, through the picker dialog otherwise).
#[derive(Clone, Debug)]
pub enum Purpose {
    Session { arg_line: String, hide: bool },
    Shell,
    Disconnect,
    Resolution { size: Option<String> },
}

impl Purpose {
    pub fn panel(&self) -> Panel {
        match self {
            Purpose::Session { .. } | Purpose::Shell => Panel::Start,
            Purpose::Disconnect => Panel::Connect,
            Purpose::Resolution { .. } => Panel::Config,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Purpose::Session { .. } => "Choose Device To Mirror",
            Purpose::Shell => "Choose Device For Shell",
            Purpose::Disconnect => "Choose Device To Disconnect",
            Purpose::Resolution { .. } => "Choose Device For Resolution",
        }
    }
}

pub enum Outcome {
    Connected { tcpip: String, connect: String, ip: String, port: String },
    Paired { out: String },
    Disconnected { out: String, serial: String },
    Devices { purpose: Purpose, serials: Vec<String> },
    Scanned { infos: Vec<DeviceInfo> },
    SessionDone(SessionResult),
    ResolutionSet { out: String },
    ServerRestarted { start: String },
    VersionProbed { path: String, version: ToolVersion },
    Failed { panel: Panel, message: String },
}

impl Outcome {
    pub fn panel(&self) -> Panel {
        use Outcome::*;
        match self {
            Connected { .. } | Paired { .. } | Disconnected { .. } | Scanned { .. } => {
                Panel::Connect
            }
            SessionDone(_) => Panel::Start,
            ResolutionSet { .. } | ServerRestarted { .. } | VersionProbed { .. } => Panel::Config,
            Devices { purpose, .. } => purpose.panel(),
            Failed { panel, .. } => *panel,
        }
    }
}

pub struct Jobs {
    tx: Sender<Outcome>,
    rx: Receiver<Outcome>,
    connect_busy: bool,
    start_busy: bool,
    config_busy: bool,
}

impl Jobs {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx, connect_busy: false, start_busy: false, config_busy: false }
    }

    pub fn busy(&self, panel: Panel) -> bool {
        match panel {
            Panel::Connect => self.connect_busy,
            Panel::Start => self.start_busy,
            Panel::Config => self.config_busy,
        }
    }

    fn set_busy(&mut self, panel: Panel, value: bool) {
        match panel {
            Panel::Connect => self.connect_busy = value,
            Panel::Start => self.start_busy = value,
            Panel::Config => self.config_busy = value,
        }
    }

    /// Next finished outcome, if any. Clears the owning panel's busy flag.
    pub fn poll(&mut self) -> Option<Outcome> {
        let outcome = self.rx.try_recv().ok()?;
        self.set_busy(outcome.panel(), false);
        Some(outcome)
    }

    fn spawn<F>(&mut self, ctx: &egui::Context, panel: Panel, job: F)
    where
        F: FnOnce() -> Outcome + Send + 'static,
    {
        self.set_busy(panel, true);
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let _ = tx.send(job());
            ctx.request_repaint();
        });
    }

    /* ---------- connect panel ---------- */

    pub fn connect(&mut self, ctx: &egui::Context, dir: PathBuf, ip: String, port: String) {
        self.spawn(ctx, Panel::Connect, move || {
            match adb::tcpip_connect(&dir, &ip, &port) {
                Ok(o) => Outcome::Connected { tcpip: o.tcpip, connect: o.connect, ip, port },
                Err(e) => fail(Panel::Connect, e),
            }
        });
    }

    pub fn pair(&mut self, ctx: &egui::Context, dir: PathBuf, ip: String, port: String, code: String) {
        self.spawn(ctx, Panel::Connect, move || match adb::pair(&dir, &ip, &port, &code) {
            Ok(out) => Outcome::Paired { out },
            Err(e) => fail(Panel::Connect, e),
        });
    }

    pub fn disconnect(&mut self, ctx: &egui::Context, dir: PathBuf, serial: String) {
        self.spawn(ctx, Panel::Connect, move || match adb::disconnect(&dir, &serial) {
            Ok(out) => Outcome::Disconnected { out, serial },
            Err(e) => fail(Panel::Connect, e),
        });
    }

    /// Serial listing for a follow-up action. Disconnect only ever acts on
    /// Wi-Fi entries, so its listing is pre-filtered.
    pub fn devices(&mut self, ctx: &egui::Context, dir: PathBuf, purpose: Purpose) {
        let panel = purpose.panel();
        self.spawn(ctx, panel, move || {
            let listed = match purpose {
                Purpose::Disconnect => adb::wifi_devices(&dir),
                _ => adb::devices(&dir),
            };
            match listed {
                Ok(serials) => Outcome::Devices { purpose, serials },
                Err(e) => fail(panel, e),
            }
        });
    }

    pub fn scan(&mut self, ctx: &egui::Context, dir: PathBuf) {
        self.spawn(ctx, Panel::Connect, move || match adb::device_infos(&dir) {
            Ok(infos) => Outcome::Scanned { infos },
            Err(e) => fail(Panel::Connect, e),
        });
    }

    /* ---------- start panel ---------- */

    pub fn session(&mut self, ctx: &egui::Context, dir: PathBuf, serial: Option<String>, arg_line: String) {
        self.spawn(ctx, Panel::Start, move || {
            match scrcpy::launch(&dir, serial.as_deref(), &arg_line) {
                Ok(result) => Outcome::SessionDone(result),
                Err(e) => fail(Panel::Start, e),
            }
        });
    }

    /* ---------- config panel ---------- */

    pub fn set_resolution(&mut self, ctx: &egui::Context, dir: PathBuf, serial: String, size: Option<String>) {
        self.spawn(ctx, Panel::Config, move || {
            match adb::set_resolution(&dir, &serial, size.as_deref()) {
                Ok(out) => Outcome::ResolutionSet { out },
                Err(e) => fail(Panel::Config, e),
            }
        });
    }

    pub fn restart_server(&mut self, ctx: &egui::Context, dir: PathBuf) {
        self.spawn(ctx, Panel::Config, move || match adb::restart_server(&dir) {
            Ok((start, _kill)) => Outcome::ServerRestarted { start },
            Err(e) => fail(Panel::Config, e),
        });
    }

    pub fn probe_version(&mut self, ctx: &egui::Context, path: String) {
        self.spawn(ctx, Panel::Config, move || {
            let dir = scrcpy::working_dir(&path).to_path_buf();
            match scrcpy::probe_version(&dir) {
                Ok(version) => Outcome::VersionProbed { path, version },
                Err(e) => Outcome::Failed { panel: Panel::Config, message: e.to_string() },
            }
        });
    }
}

fn fail(panel: Panel, e: std::io::Error) -> Outcome {
    Outcome::Failed { panel, message: e.to_string() }
}
