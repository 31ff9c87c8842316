// src/gui/alerts.rs
//
// Queued modal dialogs over the immediate-mode UI. Only the front of the
// queue is drawn; everything behind the dialog stays visible but inert
// until the user closes it. Closing a dialog may hand an instruction back
// to the app (see `Resolved`).

use std::collections::VecDeque;

use eframe::egui::{self, Align2};

use crate::faults::Alert;
use crate::gui::workers::Purpose;
use crate::version::ToolVersion;

/// Things a Confirm dialog can be armed with.
#[derive(Clone, Debug)]
pub enum Action {
    ResetData,
    DeleteConnection(String),
    DeleteTemplate(String),
    DeleteResolution(String),
    DeleteVersion(String),
    DeleteRecordingPath(String),
}

/// What an Input dialog's text is for.
#[derive(Clone, Debug)]
pub enum InputKind {
    TemplateName,
    VersionName { path: String, version: ToolVersion },
}

pub struct PickRow {
    pub serial: String,
    pub label: String,
}

enum Modal {
    Info(Alert),
    Confirm { alert: Alert, action: Action },
    Input { title: String, label: String, text: String, kind: InputKind },
    Picker { rows: Vec<PickRow>, purpose: Purpose },
}

/// Instruction handed back when a dialog closes affirmatively.
pub enum Resolved {
    Act(Action),
    Submit { kind: InputKind, text: String },
    Picked { purpose: Purpose, serial: String },
}

#[derive(Default)]
pub struct AlertQueue {
    queue: VecDeque<Modal>,
}

impl AlertQueue {
    pub fn info(&mut self, alert: Alert) {
        logf!("Alert: {}", alert.title);
        self.queue.push_back(Modal::Info(alert));
    }

    pub fn info_text(&mut self, title: &str, body: &str) {
        self.info(Alert::new(title, body));
    }

    pub fn confirm(&mut self, title: &str, body: &str, action: Action) {
        self.queue.push_back(Modal::Confirm { alert: Alert::new(title, body), action });
    }

    pub fn input(&mut self, title: &str, label: &str, prefill: &str, kind: InputKind) {
        self.queue.push_back(Modal::Input {
            title: s!(title),
            label: s!(label),
            text: s!(prefill),
            kind,
        });
    }

    pub fn picker(&mut self, rows: Vec<PickRow>, purpose: Purpose) {
        self.queue.push_back(Modal::Picker { rows, purpose });
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Draw the front dialog. Returns the instruction of a dialog closed
    /// this frame, if any.
    pub fn draw(&mut self, ctx: &egui::Context) -> Option<Resolved> {
        let modal = self.queue.front_mut()?;
        let mut close = false;
        let mut resolved = None;

        match modal {
            Modal::Info(alert) => {
                window(ctx, &alert.title).show(ctx, |ui| {
                    ui.label(alert.body.as_str());
                    ui.separator();
                    if ui.button("Ok").clicked() {
                        close = true;
                    }
                });
            }
            Modal::Confirm { alert, action } => {
                window(ctx, &alert.title).show(ctx, |ui| {
                    ui.label(alert.body.as_str());
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            resolved = Some(Resolved::Act(action.clone()));
                            close = true;
                        }
                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });
            }
            Modal::Input { title, label, text, kind } => {
                window(ctx, title).show(ctx, |ui| {
                    ui.label(label.as_str());
                    ui.text_edit_singleline(text);
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() && !text.trim().is_empty() {
                            resolved = Some(Resolved::Submit {
                                kind: kind.clone(),
                                text: s!(text.trim()),
                            });
                            close = true;
                        }
                        if ui.button("Cancel").clicked() {
                            close = true;
                        }
                    });
                });
            }
            Modal::Picker { rows, purpose } => {
                window(ctx, purpose.title()).show(ctx, |ui| {
                    for row in rows.iter() {
                        if ui.button(row.label.as_str()).clicked() {
                            resolved = Some(Resolved::Picked {
                                purpose: purpose.clone(),
                                serial: row.serial.clone(),
                            });
                            close = true;
                        }
                    }
                    ui.separator();
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            }
        }

        if close {
            self.queue.pop_front();
        }
        resolved
    }
}

fn window<'a>(_ctx: &egui::Context, title: &'a str) -> egui::Window<'a> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}
