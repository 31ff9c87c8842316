// tests/outcomes.rs
//
// Worker-outcome routing exercised without a running event loop: build an
// App by hand, feed it outcomes, check the resulting state.

use std::sync::{Arc, Mutex};

use eframe::egui;

use scryconnect::gui::actions;
use scryconnect::gui::alerts::AlertQueue;
use scryconnect::gui::app::{App, ConfigState, ConnectState, StartState, TabKind};
use scryconnect::gui::workers::{Jobs, Outcome, Panel};
use scryconnect::settings::UserData;

fn app() -> App {
    App {
        data: UserData::default(),
        dirty: false,
        status: Arc::new(Mutex::new(String::new())),
        alerts: AlertQueue::default(),
        jobs: Jobs::new(),
        tab: TabKind::Start,
        connect: ConnectState::default(),
        start: StartState::default(),
        config: ConfigState::default(),
        hidden_for_session: false,
    }
}

#[test]
fn failed_session_restores_a_hidden_window() {
    let ctx = egui::Context::default();
    let mut app = app();
    app.hidden_for_session = true;

    actions::handle_outcome(
        &mut app,
        &ctx,
        Outcome::Failed { panel: Panel::Start, message: String::from("adb not found") },
    );

    assert!(!app.hidden_for_session);
    assert!(app.alerts.is_open());
}

#[test]
fn failures_on_other_panels_leave_the_window_state_alone() {
    let ctx = egui::Context::default();
    let mut app = app();
    app.hidden_for_session = true;

    actions::handle_outcome(
        &mut app,
        &ctx,
        Outcome::Failed { panel: Panel::Config, message: String::from("probe failed") },
    );

    assert!(app.hidden_for_session);
}

#[test]
fn successful_connect_does_not_save_the_endpoint() {
    let ctx = egui::Context::default();
    let mut app = app();

    actions::handle_outcome(
        &mut app,
        &ctx,
        Outcome::Connected {
            tcpip: String::from("restarting in tcp mode port: 5555"),
            connect: String::from("connected to 192.168.1.7:5555"),
            ip: String::from("192.168.1.7"),
            port: String::from("5555"),
        },
    );

    assert!(app.data.connect.saved.is_empty());
    assert!(app.data.connect.connected.contains(&String::from("192.168.1.7:5555")));
}
