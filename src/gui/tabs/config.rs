// src/gui/tabs/config.rs
//
// Tool installs, saved resolutions, recording folder and maintenance.

use eframe::egui::{self, Button, TextEdit};

use crate::gui::{actions, alerts::Action, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let busy = app.tab_busy();

    /* ---------- scrcpy installs ---------- */

    ui.label(format!(
        "Selected install: {} (scrcpy {})",
        if app.data.versions.selected.path.is_empty() {
            "PATH"
        } else {
            app.data.versions.selected.path.as_str()
        },
        app.data.versions.selected.version,
    ));

    ui.horizontal(|ui| {
        ui.label("scrcpy folder");
        ui.add(TextEdit::singleline(&mut app.config.version_path).desired_width(280.0));
        if ui.add_enabled(!busy, Button::new("Detect version")).clicked() {
            actions::probe_version_clicked(app, ctx);
        }
    });

    let version_names: Vec<String> = app.data.versions.saved.keys().cloned().collect();
    if !version_names.is_empty() {
        let idx = &mut app.data.last_session.config.version_index;
        *idx = (*idx).min(version_names.len() - 1);
        let mut select = false;
        let mut delete = false;
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Saved installs")
                .selected_text(version_names[*idx].as_str())
                .show_ui(ui, |ui| {
                    for (i, name) in version_names.iter().enumerate() {
                        ui.selectable_value(idx, i, name.as_str());
                    }
                });
            select = ui.button("Select").clicked();
            delete = ui.button("Delete").clicked();
        });
        let name = version_names[app.data.last_session.config.version_index].clone();
        if select {
            if let Some(install) = app.data.versions.saved.get(&name).cloned() {
                app.config.version_path = install.path.clone();
                app.data.versions.selected = install;
                app.dirty = true;
                app.status(format!("Now using {name}"));
            }
        }
        if delete {
            app.alerts.confirm(
                "Delete Install",
                &format!("Delete the saved install {name}?"),
                Action::DeleteVersion(name),
            );
        }
    }

    ui.separator();

    /* ---------- resolutions ---------- */

    ui.horizontal(|ui| {
        ui.label("Resolution");
        ui.add(TextEdit::singleline(&mut app.config.res_width)
            .hint_text("width")
            .desired_width(60.0));
        ui.label("x");
        ui.add(TextEdit::singleline(&mut app.config.res_height)
            .hint_text("height")
            .desired_width(60.0));
        if ui.button("Save").clicked() {
            actions::save_resolution_clicked(app);
        }
    });

    let res_names: Vec<String> = app.data.resolutions.keys().cloned().collect();
    ui.horizontal(|ui| {
        if !res_names.is_empty() {
            let idx = &mut app.data.last_session.config.resolution_index;
            *idx = (*idx).min(res_names.len() - 1);
            egui::ComboBox::from_label("Saved resolutions")
                .selected_text(res_names[*idx].as_str())
                .show_ui(ui, |ui| {
                    for (i, name) in res_names.iter().enumerate() {
                        ui.selectable_value(idx, i, name.as_str());
                    }
                });
        }
        let picked = res_names
            .get(app.data.last_session.config.resolution_index)
            .cloned();
        if let Some(name) = picked {
            if ui.add_enabled(!busy, Button::new("Apply to device")).clicked() {
                actions::apply_resolution(app, ctx, Some(name.clone()));
            }
            if ui.button("Delete").clicked() {
                app.alerts.confirm(
                    "Delete Resolution",
                    &format!("Delete the saved resolution {name}?"),
                    Action::DeleteResolution(name),
                );
            }
        }
        if ui.add_enabled(!busy, Button::new("Reset device resolution")).clicked() {
            actions::apply_resolution(app, ctx, None);
        }
    });

    ui.separator();

    /* ---------- recording folder ---------- */

    ui.horizontal(|ui| {
        ui.label("Recording folder");
        ui.add(TextEdit::singleline(&mut app.config.record_path).desired_width(280.0));
        if ui.button("Save").clicked() {
            actions::save_recording_path_clicked(app);
        }
    });

    let path_names: Vec<String> = app.data.recording.saved.keys().cloned().collect();
    if !path_names.is_empty() {
        let idx = &mut app.data.last_session.config.path_index;
        *idx = (*idx).min(path_names.len() - 1);
        let mut select = false;
        let mut delete = false;
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Saved folders")
                .selected_text(path_names[*idx].as_str())
                .show_ui(ui, |ui| {
                    for (i, name) in path_names.iter().enumerate() {
                        ui.selectable_value(idx, i, name.as_str());
                    }
                });
            select = ui.button("Select").clicked();
            delete = ui.button("Delete").clicked();
        });
        let name = path_names[app.data.last_session.config.path_index].clone();
        if select {
            if let Some(path) = app.data.recording.saved.get(&name).cloned() {
                app.config.record_path = path.clone();
                app.data.recording.selected = Some(path);
                app.dirty = true;
                app.status(format!("Recordings go to {name}"));
            }
        }
        if delete {
            app.alerts.confirm(
                "Delete Folder",
                &format!("Delete the saved folder {name}?"),
                Action::DeleteRecordingPath(name),
            );
        }
    }

    if ui
        .checkbox(
            &mut app.data.recording.use_custom_dir,
            "Move recordings to the chosen folder",
        )
        .changed()
    {
        app.dirty = true;
    }

    ui.separator();

    /* ---------- maintenance ---------- */

    let mut light = app.data.theme_active == 1;
    if ui.checkbox(&mut light, "Light theme").changed() {
        app.data.theme_active = light as usize;
        app.dirty = true;
    }

    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, Button::new("Restart adb server")).clicked() {
            actions::restart_server_clicked(app, ctx);
        }
        if ui.button("Reset all data").clicked() {
            app.alerts.confirm(
                "Reset All Data",
                "Delete every saved connection, template, resolution and\ninstall, and return the settings to defaults?",
                Action::ResetData,
            );
        }
    });
}
