// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::adb::DeviceInfo;
use crate::settings::{self, UserData};

use super::{
    actions,
    alerts::AlertQueue,
    tabs,
    workers::{Jobs, Panel},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "ScryConnect",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKind {
    Connect,
    Start,
    Config,
}

impl TabKind {
    pub const ALL: &'static [TabKind] = &[TabKind::Connect, TabKind::Start, TabKind::Config];

    pub fn title(&self) -> &'static str {
        match self {
            TabKind::Connect => "Connect",
            TabKind::Start => "Start",
            TabKind::Config => "Config",
        }
    }

    pub fn panel(&self) -> Panel {
        match self {
            TabKind::Connect => Panel::Connect,
            TabKind::Start => Panel::Start,
            TabKind::Config => Panel::Config,
        }
    }
}

/// Connect-tab scratch state that does not persist.
#[derive(Default)]
pub struct ConnectState {
    pub devices: Vec<DeviceInfo>,
    pub pair_ip: String,
    pub pair_port: String,
    pub pair_code: String,
}

#[derive(Default)]
pub struct StartState {
    /// Template highlighted in the saved-templates combo.
    pub template_index: usize,
}

/// Config-tab text fields (the chosen entries persist in UserData).
#[derive(Default)]
pub struct ConfigState {
    pub version_path: String,
    pub res_width: String,
    pub res_height: String,
    pub record_path: String,
}

pub struct App {
    // single source of truth, written back whenever `dirty` is set
    pub data: UserData,
    pub dirty: bool,

    // status line (workers write here through outcomes)
    pub status: Arc<Mutex<String>>,

    pub alerts: AlertQueue,
    pub jobs: Jobs,

    pub tab: TabKind,
    pub connect: ConnectState,
    pub start: StartState,
    pub config: ConfigState,

    /// Set while the viewport is minimized for a hide-client session.
    pub hidden_for_session: bool,
}

impl App {
    pub fn new() -> Self {
        let data = settings::load();
        logf!(
            "Init: connections={}, templates={}, versions={}, selected scrcpy {}",
            data.connect.saved.len(),
            data.session_templates.len(),
            data.versions.saved.len(),
            data.versions.selected.version,
        );

        let config = ConfigState {
            version_path: data.versions.selected.path.clone(),
            record_path: data.recording.selected.clone().unwrap_or_default(),
            ..ConfigState::default()
        };

        Self {
            data,
            dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            alerts: AlertQueue::default(),
            jobs: Jobs::new(),
            tab: TabKind::Connect,
            connect: ConnectState::default(),
            start: StartState::default(),
            config,
            hidden_for_session: false,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Directory adb/scrcpy commands run in for the selected install.
    pub fn tool_dir(&self) -> std::path::PathBuf {
        crate::scrcpy::working_dir(&self.data.versions.selected.path).to_path_buf()
    }

    pub fn tab_busy(&self) -> bool {
        self.jobs.busy(self.tab.panel())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.data.theme_active == 1 {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        });

        while let Some(outcome) = self.jobs.poll() {
            actions::handle_outcome(self, ctx, outcome);
        }

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;
                for &tab in TabKind::ALL {
                    let selected = tab == self.tab;
                    if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                        logf!("UI: Tab switch {:?} -> {:?}", self.tab, tab);
                        self.tab = tab;
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.tab_busy() {
                    ui.spinner();
                }
                ui.label(self.status.lock().unwrap().as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // dialogs float above; the tab underneath goes inert
            ui.add_enabled_ui(!self.alerts.is_open(), |ui| match self.tab {
                TabKind::Connect => tabs::connect::draw(ui, self, ctx),
                TabKind::Start => tabs::start::draw(ui, self, ctx),
                TabKind::Config => tabs::config::draw(ui, self, ctx),
            });
        });

        if let Some(resolved) = self.alerts.draw(ctx) {
            actions::resolve(self, ctx, resolved);
        }

        if self.dirty {
            if let Err(e) = settings::save(&self.data) {
                loge!("Settings: save failed: {}", e);
            }
            self.dirty = false;
        }
    }
}
