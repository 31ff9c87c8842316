// src/gui/tabs/connect.rs
//
// Wi-Fi connection management: saved endpoints, manual connect, wireless
// pairing and the device-scan table.

use eframe::egui::{self, TextEdit};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, alerts::Action, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let busy = app.tab_busy();

    /* ---------- saved endpoints ---------- */

    let names: Vec<String> = app.data.connect.saved.keys().cloned().collect();
    if !names.is_empty() {
        let mut idx = app.data.last_session.connect.ip_index.min(names.len() - 1);
        ui.horizontal(|ui| {
            let picked = egui::ComboBox::from_label("Saved connections")
                .selected_text(names[idx].as_str())
                .show_ui(ui, |ui| {
                    let mut changed = false;
                    for (i, name) in names.iter().enumerate() {
                        changed |= ui.selectable_value(&mut idx, i, name.as_str()).changed();
                    }
                    changed
                })
                .inner
                .unwrap_or(false);
            if picked {
                if let Some(endpoint) = app.data.connect.saved.get(&names[idx]).cloned() {
                    app.data.last_session.connect.ip_index = idx;
                    app.data.last_session.connect.ip_text = endpoint.ip;
                    app.data.last_session.connect.port_text = endpoint.port;
                    app.dirty = true;
                }
            }
            if ui.button("Delete").clicked() {
                app.alerts.confirm(
                    "Delete Connection",
                    &format!("Delete the saved connection {}?", names[idx]),
                    Action::DeleteConnection(names[idx].clone()),
                );
            }
        });
    }

    /* ---------- manual connect ---------- */

    let mut edited = false;
    ui.horizontal(|ui| {
        ui.label("IP");
        edited |= ui
            .add(TextEdit::singleline(&mut app.data.last_session.connect.ip_text)
                .desired_width(160.0))
            .changed();
        ui.label("Port");
        edited |= ui
            .add(TextEdit::singleline(&mut app.data.last_session.connect.port_text)
                .desired_width(60.0))
            .changed();
    });
    if edited {
        app.dirty = true;
    }

    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("Connect")).clicked() {
            actions::connect_clicked(app, ctx);
        }
        if ui.button("Save connection").clicked() {
            actions::save_connection_clicked(app);
        }
        if ui.add_enabled(!busy, egui::Button::new("Disconnect a device")).clicked() {
            actions::disconnect_clicked(app, ctx);
        }
    });

    ui.separator();

    /* ---------- wireless pairing ---------- */

    ui.label("Wireless debugging pairing");
    ui.horizontal(|ui| {
        ui.label("IP");
        ui.add(TextEdit::singleline(&mut app.connect.pair_ip).desired_width(160.0));
        ui.label("Port");
        ui.add(TextEdit::singleline(&mut app.connect.pair_port).desired_width(60.0));
        ui.label("Code");
        ui.add(TextEdit::singleline(&mut app.connect.pair_code).desired_width(80.0));
        if ui.add_enabled(!busy, egui::Button::new("Pair")).clicked() {
            actions::pair_clicked(app, ctx);
        }
    });

    ui.separator();

    /* ---------- device scan ---------- */

    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("Scan devices")).clicked() {
            actions::scan_clicked(app, ctx);
        }
        ui.label("Auto port");
        let mut auto = app.data.connect.port_auto.clone().unwrap_or_else(|| s!("5555"));
        if ui.add(TextEdit::singleline(&mut auto).desired_width(60.0)).changed() {
            app.data.connect.port_auto = Some(auto);
            app.dirty = true;
        }
    });

    let rows = app.connect.devices.clone();
    let mut quick_connect = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::initial(180.0))
        .column(Column::initial(140.0))
        .column(Column::initial(140.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Model", "IP", "Serial", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for info in &rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| {
                        ui.label(info.model.as_str());
                    });
                    row.col(|ui| {
                        ui.label(info.ip.as_str());
                    });
                    row.col(|ui| {
                        ui.label(info.serial.as_str());
                    });
                    row.col(|ui| {
                        if ui.add_enabled(!busy, egui::Button::new("Connect")).clicked() {
                            quick_connect = Some(info.ip.clone());
                        }
                    });
                });
            }
        });

    if let Some(ip) = quick_connect {
        actions::connect_device(app, ctx, ip);
    }
}
