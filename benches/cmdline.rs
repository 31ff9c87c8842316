// benches/cmdline.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scryconnect::cmdline;
use scryconnect::settings::SessionTemplate;
use scryconnect::version::{V2_0, V3_1};

fn loaded_template() -> SessionTemplate {
    let mut t = SessionTemplate::default();
    t.toggles.record = true;
    t.toggles.time_limit = true;
    t.time_limit_s = 120;
    t.toggles.mouse_bind = true;
    t.mouse_bind = String::from("++++:bhsn");
    t.record_format = cmdline::RecordFormat::Mkv;
    t.video_source = cmdline::VideoSource::BackCamera;
    t.audio_source = cmdline::AudioSource::Playback;
    t.orientation = cmdline::Orientation::Deg90;
    t.mouse_mode = cmdline::InputMode::Uhid;
    t.keyboard_mode = cmdline::InputMode::Uhid;
    t.toggles.show_touches = true;
    t.toggles.stay_awake = true;
    t.toggles.fullscreen = true;
    t
}

fn bench_build(c: &mut Criterion) {
    let default = SessionTemplate::default();
    let loaded = loaded_template();

    c.bench_function("build_default_3_1", |b| {
        b.iter(|| black_box(cmdline::build(black_box(&default), V3_1)).len())
    });

    c.bench_function("build_loaded_3_1", |b| {
        b.iter(|| black_box(cmdline::build(black_box(&loaded), V3_1)).len())
    });

    // old installs take the gated paths
    c.bench_function("build_loaded_2_0", |b| {
        b.iter(|| black_box(cmdline::build(black_box(&loaded), V2_0)).len())
    });
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
