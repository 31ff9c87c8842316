// src/gui/actions.rs
//
// Button "executive" actions and worker-outcome handling. Layout stays in
// tabs/*, the operational logic lives here. Click handlers validate, set
// status and hand blocking work to Jobs; handle_outcome picks the results
// up next frame and routes them through the fault tables.

use eframe::egui::{self, ViewportCommand};

use crate::adb;
use crate::cmdline;
use crate::faults;
use crate::scrcpy;
use crate::settings::{Resolution, ToolInstall, UserData};
use crate::version;

use super::alerts::{Action, InputKind, PickRow, Resolved};
use super::app::App;
use super::workers::{Outcome, Panel, Purpose};

/* ---------- outcome routing ---------- */

pub fn handle_outcome(app: &mut App, ctx: &egui::Context, outcome: Outcome) {
    match outcome {
        Outcome::Connected { tcpip, connect, ip, port } => {
            if let Some(alert) = faults::connection_fault(&tcpip, &connect) {
                loge!("Connect: {} / {}", tcpip, connect);
                app.alerts.info(alert);
                return;
            }
            if faults::connection_succeeded(&connect) {
                // saving the endpoint stays behind the explicit Save button
                let target = format!("{ip}:{port}");
                if !app.data.connect.connected.contains(&target) {
                    app.data.connect.connected.push(target.clone());
                }
                app.dirty = true;
                logf!("Connect: OK {}", target);
                app.status(format!("Connected to {target}"));
            } else {
                app.status(connect);
            }
        }

        Outcome::Paired { out } => {
            if out.contains("successfully paired") {
                logf!("Pair: OK");
                app.alerts.info_text(
                    "Paired",
                    "Pairing succeeded, you can now connect to the device",
                );
                app.status("Paired");
            } else {
                loge!("Pair: {}", out);
                app.alerts.info_text("Pairing Failed", &out);
            }
        }

        Outcome::Disconnected { out, serial } => {
            if let Some(alert) = faults::disconnect_fault(&out) {
                loge!("Disconnect: {}", out);
                app.alerts.info(alert);
            } else {
                app.data.connect.connected.retain(|s| s != &serial);
                app.dirty = true;
                logf!("Disconnect: OK {}", serial);
                app.status(format!("Disconnected {serial}"));
            }
        }

        Outcome::Devices { purpose, serials } => match serials.len() {
            0 => app.alerts.info_text(
                "Nothing Detected",
                "No device was detected, connect a device (Wi-Fi | USB)\nand try again",
            ),
            1 => dispatch(app, ctx, purpose, serials.into_iter().next().unwrap_or_default()),
            _ => {
                let rows = serials
                    .into_iter()
                    .map(|serial| PickRow { label: serial.clone(), serial })
                    .collect();
                app.alerts.picker(rows, purpose);
            }
        },

        Outcome::Scanned { infos } => {
            app.status(format!("Found {} device(s)", infos.len()));
            app.connect.devices = infos;
        }

        Outcome::SessionDone(result) => {
            if app.hidden_for_session {
                ctx.send_viewport_cmd(ViewportCommand::Minimized(false));
                app.hidden_for_session = false;
            }
            if let Some(alert) = faults::session_fault(&result.stderr) {
                loge!("Session: {}", result.stderr);
                app.alerts.info(alert);
                return;
            }
            let custom_dir = app
                .data
                .recording
                .use_custom_dir
                .then(|| app.data.recording.selected.clone())
                .flatten();
            match (result.record_file, custom_dir) {
                (Some(file), Some(dir)) => {
                    match scrcpy::relocate_recording(&file, &app.tool_dir(), &dir) {
                        Ok(()) => app.status(format!("Session ended, recording moved to {dir}")),
                        Err(e) => app.alerts.info_text("Recording Move Failed", &e),
                    }
                }
                _ => app.status("Session ended"),
            }
        }

        Outcome::ResolutionSet { out } => {
            if let Some(alert) = faults::resolution_fault(&out) {
                loge!("Resolution: {}", out);
                app.alerts.info(alert);
            } else {
                app.status("Resolution applied");
            }
        }

        Outcome::ServerRestarted { start } => {
            if faults::server_restarted(&start) {
                app.alerts.info_text("Server Restarted", "The adb server was restarted");
                app.status("Server restarted");
            } else {
                loge!("Server: {}", start);
                app.alerts.info_text("Server Restart Failed", &start);
            }
        }

        Outcome::VersionProbed { path, version } => {
            if !version.is_known() {
                app.alerts.info_text(
                    "Unknown Version",
                    "Could not read a scrcpy version from this directory\n\
                     check the path and try again",
                );
                return;
            }
            app.status(format!("Detected scrcpy {version}"));
            app.alerts.input(
                "Save Version",
                "Name for this scrcpy install",
                &format!("scrcpy {version}"),
                InputKind::VersionName { path, version },
            );
        }

        Outcome::Failed { panel, message } => {
            // a dead session worker must bring the hidden window back too
            if panel == Panel::Start && app.hidden_for_session {
                ctx.send_viewport_cmd(ViewportCommand::Minimized(false));
                app.hidden_for_session = false;
            }
            loge!("Worker: {}", message);
            app.alerts.info_text("Command Failed", &message);
        }
    }
}

/// Run the follow-up a device listing was requested for.
fn dispatch(app: &mut App, ctx: &egui::Context, purpose: Purpose, serial: String) {
    let dir = app.tool_dir();
    match purpose {
        Purpose::Session { arg_line, hide } => {
            if hide {
                ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
                app.hidden_for_session = true;
            }
            app.status(format!("Mirroring {serial}"));
            app.jobs.session(ctx, dir, Some(serial), arg_line);
        }
        Purpose::Shell => {
            if let Err(e) = adb::open_shell(&dir, &serial) {
                loge!("Shell: {}", e);
                app.alerts.info_text("Shell Failed", &e.to_string());
            }
        }
        Purpose::Disconnect => {
            app.status(format!("Disconnecting {serial}"));
            app.jobs.disconnect(ctx, dir, serial);
        }
        Purpose::Resolution { size } => {
            app.status("Applying resolution");
            app.jobs.set_resolution(ctx, dir, serial, size);
        }
    }
}

/* ---------- modal resolutions ---------- */

pub fn resolve(app: &mut App, ctx: &egui::Context, resolved: Resolved) {
    match resolved {
        Resolved::Act(Action::ResetData) => {
            app.data = UserData::default();
            app.config.version_path.clear();
            app.config.record_path.clear();
            app.connect.devices.clear();
            app.dirty = true;
            logf!("Settings: reset to defaults");
            app.status("All data reset");
        }
        Resolved::Act(Action::DeleteConnection(name)) => {
            if app.data.delete_connection(&name) {
                app.data.last_session.connect.ip_index = 0;
                app.dirty = true;
                app.status(format!("Deleted {name}"));
            }
        }
        Resolved::Act(Action::DeleteTemplate(name)) => {
            if app.data.delete_template(&name) {
                app.start.template_index = 0;
                app.dirty = true;
                app.status(format!("Deleted {name}"));
            }
        }
        Resolved::Act(Action::DeleteResolution(name)) => {
            if app.data.delete_resolution(&name) {
                app.data.last_session.config.resolution_index = 0;
                app.dirty = true;
                app.status(format!("Deleted {name}"));
            }
        }
        Resolved::Act(Action::DeleteVersion(name)) => {
            if app.data.delete_version(&name) {
                app.data.last_session.config.version_index = 0;
                app.config.version_path = app.data.versions.selected.path.clone();
                app.dirty = true;
                app.status(format!("Deleted {name}"));
            }
        }
        Resolved::Act(Action::DeleteRecordingPath(name)) => {
            if app.data.delete_recording_path(&name) {
                app.data.last_session.config.path_index = 0;
                app.config.record_path =
                    app.data.recording.selected.clone().unwrap_or_default();
                app.dirty = true;
                app.status(format!("Deleted {name}"));
            }
        }

        Resolved::Submit { kind: InputKind::TemplateName, text } => {
            let template = app.data.last_session.start.clone();
            if app.data.save_template(&text, template) {
                app.dirty = true;
                app.status(format!("Saved template {text}"));
            } else {
                app.alerts.info_text(
                    "Name In Use",
                    "A template with that name already exists, pick another",
                );
            }
        }
        Resolved::Submit { kind: InputKind::VersionName { path, version }, text } => {
            if app.data.save_version(&text, ToolInstall { path: path.clone(), version }) {
                app.config.version_path = path;
                app.dirty = true;
                app.status(format!("Saved {text} ({version})"));
            } else {
                app.alerts.info_text(
                    "Name In Use",
                    "A version with that name already exists, pick another",
                );
            }
        }

        Resolved::Picked { purpose, serial } => dispatch(app, ctx, purpose, serial),
    }
}

/* ---------- connect tab ---------- */

pub fn connect_clicked(app: &mut App, ctx: &egui::Context) {
    let ip = s!(app.data.last_session.connect.ip_text.trim());
    if !cmdline::is_ip(&ip) {
        app.alerts.info_text(
            "Invalid IP",
            "The IP entered is not a valid IPv4/IPv6 address,\ncheck it and try again",
        );
        return;
    }
    let port = match app.data.last_session.connect.port_text.trim() {
        "" => s!("5555"),
        p => s!(p),
    };
    app.status(format!("Connecting to {ip}:{port}"));
    app.jobs.connect(ctx, app.tool_dir(), ip, port);
}

/// Quick connect from the scan list, using the auto port.
pub fn connect_device(app: &mut App, ctx: &egui::Context, ip: String) {
    let port = app.data.connect.port_auto.clone().unwrap_or_else(|| s!("5555"));
    app.status(format!("Connecting to {ip}:{port}"));
    app.jobs.connect(ctx, app.tool_dir(), ip, port);
}

pub fn pair_clicked(app: &mut App, ctx: &egui::Context) {
    let (ip, port, code) = (
        s!(app.connect.pair_ip.trim()),
        s!(app.connect.pair_port.trim()),
        s!(app.connect.pair_code.trim()),
    );
    if ip.is_empty() || port.is_empty() || code.is_empty() {
        app.alerts.info_text(
            "Pairing Incomplete",
            "IP, pairing port and pairing code are all required,\nfill them in and try again",
        );
        return;
    }
    app.status(format!("Pairing with {ip}:{port}"));
    app.jobs.pair(ctx, app.tool_dir(), ip, port, code);
}

pub fn scan_clicked(app: &mut App, ctx: &egui::Context) {
    app.status("Scanning for devices");
    app.jobs.scan(ctx, app.tool_dir());
}

pub fn disconnect_clicked(app: &mut App, ctx: &egui::Context) {
    app.status("Listing Wi-Fi devices");
    app.jobs.devices(ctx, app.tool_dir(), Purpose::Disconnect);
}

pub fn shell_clicked(app: &mut App, ctx: &egui::Context) {
    app.status("Listing devices");
    app.jobs.devices(ctx, app.tool_dir(), Purpose::Shell);
}

pub fn save_connection_clicked(app: &mut App) {
    let (ip, port) = (
        s!(app.data.last_session.connect.ip_text.trim()),
        s!(app.data.last_session.connect.port_text.trim()),
    );
    match app.data.save_connection(&ip, &port) {
        Some(name) => {
            app.dirty = true;
            app.status(format!("Saved {name}"));
        }
        None => app.alerts.info_text(
            "Not Saved",
            "IP and port must both be set, and the pair must not\nalready be saved",
        ),
    }
}

/* ---------- start tab ---------- */

pub fn launch(app: &mut App, ctx: &egui::Context) {
    let v = app.data.selected_version();
    if !v.is_known() || v < version::V2_0 {
        // older installs still launch; the gated flags just drop out
        app.alerts.info_text(
            "Scrcpy Version Alert",
            "The selected scrcpy is below 2.0, some features\nwill not work",
        );
    }
    let arg_line = cmdline::build(&app.data.last_session.start, v);
    let hide = app.data.last_session.start.toggles.hide_client;
    run_session(app, ctx, arg_line, hide);
}

/// The free-form argument line, launched exactly as typed.
pub fn launch_manual(app: &mut App, ctx: &egui::Context) {
    let arg_line = s!(app.data.last_session.start.manual_args.trim());
    run_session(app, ctx, arg_line, false);
}

fn run_session(app: &mut App, ctx: &egui::Context, arg_line: String, hide: bool) {
    if !scrcpy::verify_install(&app.data.versions.selected.path) {
        app.alerts.info_text(
            "Missing Files",
            "scrcpy.exe and adb.exe were not both found in the selected\ndirectory, pick a valid scrcpy folder in Config",
        );
        return;
    }
    if !cmdline::valid_max_size(&arg_line) {
        app.alerts.info_text(
            "Invalid Value",
            "The '-m' or '--max-size' value is below 500, this can\ngenerate errors, fix the value and try again",
        );
        return;
    }
    app.status("Looking for devices");
    app.jobs.devices(ctx, app.tool_dir(), Purpose::Session { arg_line, hide });
}

/* ---------- config tab ---------- */

pub fn probe_version_clicked(app: &mut App, ctx: &egui::Context) {
    let path = s!(app.config.version_path.trim());
    if !scrcpy::verify_install(&path) {
        app.alerts.info_text(
            "Missing Files",
            "scrcpy.exe and adb.exe were not both found in that\ndirectory, check the path and try again",
        );
        return;
    }
    app.status("Probing scrcpy version");
    app.jobs.probe_version(ctx, path);
}

pub fn save_resolution_clicked(app: &mut App) {
    let (Ok(width), Ok(height)) = (
        app.config.res_width.trim().parse::<u32>(),
        app.config.res_height.trim().parse::<u32>(),
    ) else {
        app.alerts.info_text(
            "Invalid Resolution",
            "Width and height must both be whole numbers",
        );
        return;
    };
    let res = Resolution { width, height };
    if !res.is_valid() {
        app.alerts.info_text(
            "Invalid Resolution",
            "Width and height must be positive and under 8 digits",
        );
        return;
    }
    match app.data.save_resolution(res) {
        Some(name) => {
            app.dirty = true;
            app.status(format!("Saved {name}"));
        }
        None => app.alerts.info_text("Already Saved", "That resolution is already in the list"),
    }
}

/// Push a saved resolution (or a reset) to a device through the picker flow.
pub fn apply_resolution(app: &mut App, ctx: &egui::Context, size: Option<String>) {
    app.status("Listing devices");
    app.jobs.devices(ctx, app.tool_dir(), Purpose::Resolution { size });
}

pub fn save_recording_path_clicked(app: &mut App) {
    let path = s!(app.config.record_path.trim());
    if path.is_empty() || !std::path::Path::new(&path).is_dir() {
        app.alerts.info_text(
            "Invalid Directory",
            "That path does not point to an existing directory",
        );
        return;
    }
    let name = std::path::Path::new(&path)
        .file_name()
        .map(|n| s!(n.to_string_lossy()))
        .unwrap_or_else(|| path.clone());
    if app.data.save_recording_path(&name, &path) {
        app.dirty = true;
        app.status(format!("Saved recording folder {name}"));
    } else {
        app.alerts.info_text("Name In Use", "A folder with that name is already saved");
    }
}

pub fn restart_server_clicked(app: &mut App, ctx: &egui::Context) {
    app.status("Restarting adb server");
    app.jobs.restart_server(ctx, app.tool_dir());
}
