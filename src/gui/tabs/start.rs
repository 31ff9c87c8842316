// src/gui/tabs/start.rs
//
// The session editor: sliders, optional values behind enabler checkboxes,
// combo boxes and the flag grid, plus template save/load and the Start
// button. Every edit lands in last_session.start so the tab reopens the
// way it was left.

use eframe::egui::{self, DragValue, Slider, TextEdit};

use crate::cmdline::{
    self, AudioEncoder, AudioSource, InputMode, Orientation, RecordFormat, VideoEncoder,
    VideoSource,
};
use crate::gui::{actions, alerts::Action, alerts::InputKind, app::App};

fn enum_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    all: &'static [T],
    name: impl Fn(&T) -> &'static str,
) -> bool {
    let mut changed = false;
    egui::ComboBox::from_label(label)
        .selected_text(name(value))
        .show_ui(ui, |ui| {
            for &option in all {
                changed |= ui.selectable_value(value, option, name(&option)).changed();
            }
        });
    changed
}

pub fn draw(ui: &mut egui::Ui, app: &mut App, ctx: &egui::Context) {
    let v = app.data.selected_version();
    ui.label(format!("Using scrcpy {v}"));
    ui.separator();

    let mut changed = false;

    egui::ScrollArea::vertical().show(ui, |ui| {
        let t = &mut app.data.last_session.start;

        /* ---------- sliders ---------- */

        changed |= ui.add(Slider::new(&mut t.max_fps, 1..=120).text("Max FPS")).changed();
        changed |= ui.add(Slider::new(&mut t.max_size, 100..=7680).text("Max size")).changed();
        changed |= ui
            .add(Slider::new(&mut t.bit_rate_mbps, 1..=200).text("Video bit-rate (Mbps)"))
            .changed();

        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut t.toggles.video_buffer, "Video buffer (ms)").changed();
            changed |= ui
                .add_enabled(t.toggles.video_buffer, DragValue::new(&mut t.video_buffer_ms))
                .changed();
            changed |= ui.checkbox(&mut t.toggles.audio_buffer, "Audio buffer (ms)").changed();
            changed |= ui
                .add_enabled(t.toggles.audio_buffer, DragValue::new(&mut t.audio_buffer_ms))
                .changed();
            changed |= ui.checkbox(&mut t.toggles.time_limit, "Time limit (s)").changed();
            changed |= ui
                .add_enabled(t.toggles.time_limit, DragValue::new(&mut t.time_limit_s))
                .changed();
        });

        ui.separator();

        /* ---------- recording and line edits ---------- */

        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut t.toggles.record, "Record").changed();
            changed |= ui
                .add_enabled(
                    t.toggles.record,
                    TextEdit::singleline(&mut t.record_name)
                        .hint_text("video")
                        .desired_width(160.0),
                )
                .changed();
            if t.toggles.record {
                changed |= enum_combo(ui, "Format", &mut t.record_format, RecordFormat::ALL, |f| {
                    f.label()
                });
            }
        });

        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut t.toggles.mouse_bind, "Mouse bind").changed();
            changed |= ui
                .add_enabled(
                    t.toggles.mouse_bind,
                    TextEdit::singleline(&mut t.mouse_bind)
                        .hint_text("++++:bhsn")
                        .desired_width(100.0),
                )
                .changed();
            changed |= ui.checkbox(&mut t.toggles.crop, "Crop").changed();
            changed |= ui
                .add_enabled(
                    t.toggles.crop,
                    TextEdit::singleline(&mut t.crop)
                        .hint_text("W:H:X:Y")
                        .desired_width(120.0),
                )
                .changed();
        });

        ui.separator();

        /* ---------- combo boxes ---------- */

        changed |= enum_combo(ui, "Video source", &mut t.video_source, VideoSource::ALL, |s| {
            s.label()
        });
        changed |= enum_combo(ui, "Audio source", &mut t.audio_source, AudioSource::ALL, |s| {
            s.label()
        });
        changed |= enum_combo(ui, "Orientation", &mut t.orientation, Orientation::ALL, |o| {
            o.label()
        });
        changed |= enum_combo(ui, "Video encoder", &mut t.video_encoder, VideoEncoder::ALL, |e| {
            e.label()
        });
        changed |= enum_combo(ui, "Audio encoder", &mut t.audio_encoder, AudioEncoder::ALL, |e| {
            e.label()
        });
        changed |= enum_combo(ui, "Mouse mode", &mut t.mouse_mode, InputMode::ALL, |m| m.label());
        changed |=
            enum_combo(ui, "Keyboard mode", &mut t.keyboard_mode, InputMode::ALL, |m| m.label());

        ui.separator();

        /* ---------- flag grid ---------- */

        ui.columns(3, |cols| {
            let g = &mut t.toggles;
            changed |= cols[0].checkbox(&mut g.no_audio, "No audio").changed();
            changed |= cols[0].checkbox(&mut g.no_video, "No video").changed();
            changed |= cols[0].checkbox(&mut g.no_playback, "No playback").changed();
            changed |= cols[0].checkbox(&mut g.no_control, "No control").changed();
            changed |= cols[0].checkbox(&mut g.show_touches, "Show touches").changed();
            changed |= cols[0].checkbox(&mut g.stay_awake, "Stay awake").changed();
            changed |= cols[0].checkbox(&mut g.turn_screen_off, "Turn screen off").changed();

            changed |= cols[1].checkbox(&mut g.prefer_text, "Prefer text").changed();
            changed |= cols[1].checkbox(&mut g.no_key_repeat, "No key repeat").changed();
            changed |= cols[1].checkbox(&mut g.raw_key_events, "Raw key events").changed();
            changed |= cols[1]
                .checkbox(&mut g.forward_all_clicks, "Forward all clicks")
                .changed();
            changed |= cols[1].checkbox(&mut g.no_mouse_hover, "No mouse hover").changed();
            changed |= cols[1]
                .checkbox(&mut g.shortcut_ctrl, "Shortcuts: Ctrl")
                .changed();
            changed |= cols[1]
                .checkbox(&mut g.shortcut_alt_ctrl, "Shortcuts: Alt+Ctrl")
                .changed();

            changed |= cols[2].checkbox(&mut g.fullscreen, "Fullscreen").changed();
            changed |= cols[2].checkbox(&mut g.always_on_top, "Always on top").changed();
            changed |= cols[2].checkbox(&mut g.borderless, "Borderless").changed();
            changed |= cols[2].checkbox(&mut g.otg, "OTG").changed();
            changed |= cols[2].checkbox(&mut g.gamepad, "Gamepad").changed();
            changed |= cols[2].checkbox(&mut g.gamepad_otg, "Gamepad (OTG)").changed();
            changed |= cols[2]
                .checkbox(&mut g.no_vd_destroy, "Keep virtual display content")
                .changed();
            changed |= cols[2].checkbox(&mut g.hide_client, "Hide this window").changed();
        });
    });

    if changed {
        app.dirty = true;
    }

    ui.separator();

    /* ---------- templates ---------- */

    let names: Vec<String> = app.data.session_templates.keys().cloned().collect();
    ui.horizontal(|ui| {
        if !names.is_empty() {
            let idx = &mut app.start.template_index;
            *idx = (*idx).min(names.len() - 1);
            egui::ComboBox::from_label("Templates")
                .selected_text(names[*idx].as_str())
                .show_ui(ui, |ui| {
                    for (i, name) in names.iter().enumerate() {
                        ui.selectable_value(idx, i, name.as_str());
                    }
                });
            if ui.button("Load").clicked() {
                let name = names[app.start.template_index].clone();
                if let Some(t) = app.data.session_templates.get(&name).cloned() {
                    app.data.last_session.start = t;
                    app.dirty = true;
                    app.status(format!("Loaded {name}"));
                }
            }
            if ui.button("Delete").clicked() {
                let name = names[app.start.template_index].clone();
                app.alerts.confirm(
                    "Delete Template",
                    &format!("Delete the template {name}?"),
                    Action::DeleteTemplate(name),
                );
            }
        }
        if ui.button("Save as template").clicked() {
            app.alerts.input("Save Template", "Template name", "", InputKind::TemplateName);
        }
    });

    ui.separator();

    /* ---------- preview and launch ---------- */

    let preview = cmdline::build(&app.data.last_session.start, v);
    ui.monospace(format!("scrcpy{preview}"));

    let busy = app.tab_busy();
    ui.horizontal(|ui| {
        if ui.add_enabled(!busy, egui::Button::new("Start")).clicked() {
            actions::launch(app, ctx);
        }
        if ui.add_enabled(!busy, egui::Button::new("Open shell")).clicked() {
            actions::shell_clicked(app, ctx);
        }
        if ui.button("Reset widgets").clicked() {
            app.data.last_session.start = Default::default();
            app.dirty = true;
            app.status("Start tab reset");
        }
    });

    ui.horizontal(|ui| {
        ui.label("Manual args");
        if ui
            .add(
                TextEdit::singleline(&mut app.data.last_session.start.manual_args)
                    .hint_text("-m 1024 --no-audio")
                    .desired_width(320.0),
            )
            .changed()
        {
            app.dirty = true;
        }
        if ui.add_enabled(!busy, egui::Button::new("Run")).clicked() {
            actions::launch_manual(app, ctx);
        }
    });
}
