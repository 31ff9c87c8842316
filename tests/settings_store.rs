// tests/settings_store.rs
use scryconnect::settings::{self, Resolution, SessionTemplate, ToolInstall, UserData};
use scryconnect::version::{V2_7, V3_0};

#[test]
fn round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("UserData.json");

    let mut data = UserData::default();
    data.theme_active = 1;
    let _ = data.save_connection("192.168.0.3", "5555");
    let _ = data.save_version("scrcpy 3.0", ToolInstall { path: String::from("/opt/scrcpy"), version: V3_0 });
    let _ = data.save_resolution(Resolution { width: 1080, height: 2400 });
    data.last_session.start.max_fps = 90;
    data.last_session.start.toggles.no_audio = true;

    settings::save_to(&path, &data).unwrap();
    let loaded = settings::load_from(&path);
    assert_eq!(loaded, data);
}

#[test]
fn missing_or_corrupt_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("nope.json");
    assert_eq!(settings::load_from(&missing), UserData::default());

    let corrupt = dir.path().join("bad.json");
    std::fs::write(&corrupt, "{not json").unwrap();
    assert_eq!(settings::load_from(&corrupt), UserData::default());
}

#[test]
fn partial_documents_fill_in_defaults() {
    // older files missing newer fields must still load
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.json");
    std::fs::write(&path, r#"{ "theme_active": 1 }"#).unwrap();

    let loaded = settings::load_from(&path);
    assert_eq!(loaded.theme_active, 1);
    assert_eq!(loaded.last_session.start, SessionTemplate::default());
}

#[test]
fn connection_names_are_ip_port_and_unique() {
    let mut data = UserData::default();
    assert_eq!(data.save_connection("10.0.0.2", "5555"), Some(String::from("10.0.0.2:5555")));
    assert_eq!(data.save_connection("10.0.0.2", "5555"), None);
    assert_eq!(data.save_connection("", "5555"), None);
    assert_eq!(data.save_connection("10.0.0.2", " "), None);
    assert!(data.delete_connection("10.0.0.2:5555"));
    assert!(!data.delete_connection("10.0.0.2:5555"));
}

#[test]
fn template_names_must_be_unique_and_non_empty() {
    let mut data = UserData::default();
    assert!(data.save_template("daily", SessionTemplate::default()));
    assert!(!data.save_template("daily", SessionTemplate::default()));
    assert!(!data.save_template("  ", SessionTemplate::default()));
    assert!(data.delete_template("daily"));
}

#[test]
fn resolutions_are_validated_and_keyed_by_label() {
    let mut data = UserData::default();
    assert_eq!(
        data.save_resolution(Resolution { width: 1080, height: 2400 }),
        Some(String::from("1080x2400"))
    );
    // duplicate
    assert_eq!(data.save_resolution(Resolution { width: 1080, height: 2400 }), None);
    // out of range
    assert_eq!(data.save_resolution(Resolution { width: 0, height: 2400 }), None);
    assert_eq!(data.save_resolution(Resolution { width: 1080, height: 100_000_000 }), None);
}

#[test]
fn deleting_the_selected_version_falls_back() {
    let mut data = UserData::default();
    assert!(data.save_version("a", ToolInstall { path: String::from("/a"), version: V2_7 }));
    assert!(data.save_version("b", ToolInstall { path: String::from("/b"), version: V3_0 }));
    assert_eq!(data.versions.selected.path, "/b");

    assert!(data.delete_version("b"));
    // falls back to the remaining entry
    assert_eq!(data.versions.selected.path, "/a");

    assert!(data.delete_version("a"));
    assert_eq!(data.versions.selected, ToolInstall::default());
}

#[test]
fn recording_paths_track_the_selected_folder() {
    let mut data = UserData::default();
    assert!(data.save_recording_path("clips", "/home/me/clips"));
    assert_eq!(data.recording.selected.as_deref(), Some("/home/me/clips"));

    assert!(data.save_recording_path("other", "/home/me/other"));
    assert!(data.delete_recording_path("other"));
    assert_eq!(data.recording.selected.as_deref(), Some("/home/me/clips"));

    assert!(data.delete_recording_path("clips"));
    assert_eq!(data.recording.selected, None);
}
