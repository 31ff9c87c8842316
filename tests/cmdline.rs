// tests/cmdline.rs
use std::fs;

use scryconnect::cmdline::{self, AudioSource, Orientation, RecordFormat};
use scryconnect::scrcpy;
use scryconnect::settings::SessionTemplate;
use scryconnect::version::{ToolVersion, V2_0, V2_2, V2_5, V3_0, V3_1};

fn template() -> SessionTemplate {
    SessionTemplate::default()
}

#[test]
fn default_template_builds_sliders_only() {
    let line = cmdline::build(&template(), V3_0);
    assert_eq!(line, " --max-fps 60 -m 1000 --video-bit-rate 8M");
}

#[test]
fn bit_rate_flag_is_renamed_below_2_0() {
    let line = cmdline::build(&template(), ToolVersion(1.9));
    assert!(line.contains(" --bit-rate 8M"));
    assert!(!line.contains("--video-bit-rate"));
}

#[test]
fn time_limit_needs_2_1() {
    let mut t = template();
    t.toggles.time_limit = true;
    t.time_limit_s = 30;
    assert!(!cmdline::build(&t, V2_0).contains("--time-limit"));
    assert!(cmdline::build(&t, V2_5).contains(" --time-limit 30"));
}

#[test]
fn record_defaults_to_video_name() {
    let mut t = template();
    t.toggles.record = true;
    assert!(cmdline::build(&t, V3_0).ends_with(" --record video.mp4"));
}

#[test]
fn audio_only_record_falls_back_to_mp4_below_2_1() {
    let mut t = template();
    t.toggles.record = true;
    t.record_format = RecordFormat::Opus;
    t.record_name = String::from("clip");

    let old = cmdline::build(&t, V2_0);
    assert!(old.contains(" --record clip.mp4"));
    assert!(!old.contains("--audio-codec"));

    let new = cmdline::build(&t, V2_5);
    assert!(new.contains(" --audio-codec=opus"));
    assert!(new.contains(" --record clip.opus"));
}

#[test]
fn flac_record_gets_the_audio_only_coupling() {
    let mut t = template();
    t.toggles.record = true;
    t.record_format = RecordFormat::Flac;
    t.record_name = String::from("clip");

    assert!(cmdline::build(&t, V2_0).contains(" --record clip.mp4"));

    let new = cmdline::build(&t, V2_5);
    assert!(new.contains(" --audio-codec=flac"));
    assert!(new.contains(" --record clip.flac"));
}

#[test]
fn orientation_takes_three_forms() {
    assert_eq!(Orientation::Deg90.args(V3_0), " --capture-orientation=@90");
    assert_eq!(Orientation::Deg90.args(V2_2), " --lock-video-orientation=1");
    assert_eq!(Orientation::Deg90.args(V2_5), " --lock-video-orientation=90");
    // flips only exist from 3.0
    assert_eq!(Orientation::Flip90.args(V2_5), "");
    assert_eq!(Orientation::Flip90.args(V3_1), " --capture-orientation=@flip90");
}

#[test]
fn audio_dup_needs_2_6() {
    assert_eq!(AudioSource::AudioDup.args(V2_5), "");
    assert_eq!(AudioSource::AudioDup.args(V3_0), " --audio-dup");
}

#[test]
fn version_gated_flags_are_dropped_on_old_installs() {
    let mut t = template();
    t.toggles.no_playback = true;
    t.toggles.gamepad = true;
    t.toggles.no_vd_destroy = true;

    let old = cmdline::build(&t, V2_0);
    assert!(!old.contains("--no-playback"));
    assert!(!old.contains(" -G"));
    assert!(!old.contains("--no-vd-destroy-content"));

    let new = cmdline::build(&t, V3_1);
    assert!(new.contains(" --no-playback"));
    assert!(new.contains(" -G"));
    assert!(new.contains(" --no-vd-destroy-content"));
}

#[test]
fn forward_all_clicks_was_dropped_after_2_7() {
    let mut t = template();
    t.toggles.forward_all_clicks = true;
    assert!(cmdline::build(&t, V2_5).contains(" --forward-all-clicks"));
    assert!(!cmdline::build(&t, V3_0).contains("--forward-all-clicks"));
}

#[test]
fn matching_input_modes_collapse_into_one_group() {
    let mut t = template();
    t.mouse_mode = cmdline::InputMode::Aoa;
    t.keyboard_mode = cmdline::InputMode::Aoa;
    let line = cmdline::build(&t, V3_0);
    assert!(line.contains(" --otg --mouse=aoa --keyboard=aoa"));

    t.keyboard_mode = cmdline::InputMode::Sdk;
    let line = cmdline::build(&t, V3_0);
    assert!(line.contains(" --otg --mouse=aoa"));
    assert!(line.contains(" --keyboard=sdk"));
}

#[test]
fn max_size_boundary_is_500() {
    assert!(!cmdline::valid_max_size(" -m 499"));
    assert!(cmdline::valid_max_size(" -m 500"));
    assert!(cmdline::valid_max_size(" --max-size 1000"));
    // no flag, or a value scrcpy will reject itself: not ours to block
    assert!(cmdline::valid_max_size(" --max-fps 60"));
    assert!(cmdline::valid_max_size(" -m abc"));
}

#[test]
fn record_file_name_keeps_the_written_case() {
    assert_eq!(
        cmdline::record_file_name(" --record Video.MP4 --no-audio"),
        Some(String::from("Video.MP4"))
    );
    assert_eq!(cmdline::record_file_name(" -r clip.mkv"), Some(String::from("clip.mkv")));
    assert_eq!(cmdline::record_file_name(" --no-audio"), None);
}

#[test]
fn record_name_collisions_get_numbered() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(cmdline::unique_record_name(dir.path(), "video.mp4"), "video.mp4");

    fs::write(dir.path().join("Video.mp4"), b"").unwrap();
    assert_eq!(cmdline::unique_record_name(dir.path(), "video.mp4"), "video_0.mp4");

    fs::write(dir.path().join("video_0.mp4"), b"").unwrap();
    assert_eq!(cmdline::unique_record_name(dir.path(), "video.mp4"), "video_1.mp4");
}

#[test]
fn mixed_case_record_names_are_renamed_in_the_arg_line() {
    let dir = tempfile::tempdir().unwrap();
    let args = "--max-fps 60 --record Video.mp4";

    let (line, file) = scrcpy::uniquify_recording(dir.path(), args);
    assert_eq!(line, args);
    assert_eq!(file.as_deref(), Some("Video.mp4"));

    fs::write(dir.path().join("video.mp4"), b"").unwrap();
    let (line, file) = scrcpy::uniquify_recording(dir.path(), args);
    assert_eq!(line, "--max-fps 60 --record video_0.mp4");
    assert_eq!(file.as_deref(), Some("video_0.mp4"));
}

#[test]
fn ip_recognizer_accepts_both_families() {
    assert!(cmdline::is_ip("192.168.0.3"));
    assert!(cmdline::is_ip("192.168.0.3:5555"));
    assert!(cmdline::is_ip("fe80:0:0:0:0:0:0:1"));
    assert!(!cmdline::is_ip("emulator-5554"));
    assert!(!cmdline::is_ip("R58M123ABC"));
    assert!(!cmdline::is_ip(""));
}
