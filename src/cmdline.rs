// src/cmdline.rs
//
// Everything between the Start tab's widgets and the scrcpy argument line:
// the per-version flag tables, the combo-box option enums, and the handful
// of lexical checks shared by the click handlers.
//
// Flags arrived in scrcpy releases at different times; each table entry
// carries the release that introduced it and is silently dropped when the
// selected install is older. 2.0 is the floor for most of the audio surface.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::settings::SessionTemplate;
use crate::version::{self, ToolVersion};

/* ---------- checkbox grid ---------- */

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggles {
    // stream
    pub no_audio: bool,
    pub no_video: bool,
    pub no_playback: bool,

    // control
    pub no_control: bool,
    pub show_touches: bool,
    pub stay_awake: bool,
    pub turn_screen_off: bool,
    pub prefer_text: bool,
    pub no_key_repeat: bool,
    pub raw_key_events: bool,
    pub forward_all_clicks: bool,
    pub no_mouse_hover: bool,

    // window
    pub fullscreen: bool,
    pub always_on_top: bool,
    pub borderless: bool,

    // shortcuts
    pub shortcut_ctrl: bool,
    pub shortcut_alt_ctrl: bool,

    // modes
    pub otg: bool,
    pub gamepad: bool,
    pub gamepad_otg: bool,
    pub no_vd_destroy: bool,

    // enablers: these gate a slider/line-edit value, they are not flags
    pub video_buffer: bool,
    pub audio_buffer: bool,
    pub time_limit: bool,
    pub record: bool,
    pub mouse_bind: bool,
    pub crop: bool,

    /// Not a scrcpy flag: hides this GUI while the session runs.
    pub hide_client: bool,
}

impl Toggles {
    /// Flag table, gated by the release that introduced each flag.
    /// `None` = accepted by every supported release.
    fn flag_rows(&self) -> [(bool, Option<ToolVersion>, &'static str); 21] {
        use version::*;
        [
            (self.no_audio, Some(V2_0), " --no-audio"),
            (self.no_video, Some(V2_0), " --no-video"),
            (self.no_playback, Some(V2_1), " --no-playback"),
            (self.no_mouse_hover, Some(V2_5), " --no-mouse-hover"),
            (self.gamepad, Some(V2_7), " -G"),
            (self.gamepad_otg, Some(V2_7), " -G --otg"),
            (self.no_vd_destroy, Some(V3_1), " --no-vd-destroy-content"),
            (self.prefer_text, None, " --prefer-text"),
            (self.no_key_repeat, None, " --no-key-repeat"),
            (self.raw_key_events, None, " --raw-key-events"),
            (self.shortcut_ctrl, None, " --shortcut-mod=lctrl,rctrl"),
            (self.shortcut_alt_ctrl, None, " --shortcut-mod=lalt,ralt,lctrl,rctrl"),
            (self.show_touches, None, " --show-touches"),
            (self.no_control, None, " --no-control"),
            (self.fullscreen, None, " -f"),
            (self.always_on_top, None, " --always-on-top"),
            (self.stay_awake, None, " --stay-awake"),
            (self.turn_screen_off, None, " --turn-screen-off"),
            (self.borderless, None, " --window-borderless"),
            (self.otg, None, " --otg"),
            // dropped upstream after 2.7
            (self.forward_all_clicks, None, " --forward-all-clicks"),
        ]
    }

    pub fn args(&self, v: ToolVersion) -> String {
        let mut line = s!();
        for (on, min, arg) in self.flag_rows() {
            if !on {
                continue;
            }
            match min {
                Some(m) if v < m => continue,
                _ => {}
            }
            if arg == " --forward-all-clicks" && v > version::V2_7 {
                continue;
            }
            line.push_str(arg);
        }
        line
    }
}

/* ---------- combo-box options ---------- */
//
// Each enum's `ALL` drives the combo; `args(version)` yields the flag text,
// empty when the variant is the no-op default or the install is too old.

macro_rules! combo_enum {
    ($name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self { $($name::$variant => $label),+ }
            }
        }
    };
}

combo_enum!(RecordFormat {
    Mp4 => "mp4",
    Mkv => "mkv",
    Opus => "opus",
    Aac => "aac",
    Flac => "flac",
});

impl RecordFormat {
    pub fn ext(&self) -> &'static str {
        self.label()
    }

    fn is_audio_only(&self) -> bool {
        matches!(self, RecordFormat::Opus | RecordFormat::Aac | RecordFormat::Flac)
    }
}

combo_enum!(VideoSource {
    Default => "Default",
    Screen => "Screen",
    BackCamera => "Back Camera",
    FrontCamera => "Front Camera",
    ExternalCamera => "External Camera",
});

impl VideoSource {
    pub fn args(&self, v: ToolVersion) -> &'static str {
        use VideoSource::*;
        if v < version::V2_2 {
            return "";
        }
        match self {
            Default => "",
            Screen => " --video-source=display",
            BackCamera => " --video-source=camera --camera-facing=back",
            FrontCamera => " --video-source=camera --camera-facing=front",
            ExternalCamera => " --video-source=camera --camera-facing=external",
        }
    }
}

combo_enum!(AudioSource {
    Default => "Default",
    Microphone => "Microphone",
    Playback => "Playback",
    AudioDup => "Audio Dup",
    AudioDupPlayback => "Audio Dup + Playback",
});

impl AudioSource {
    pub fn args(&self, v: ToolVersion) -> &'static str {
        use AudioSource::*;
        match self {
            Default => "",
            Microphone if v >= version::V2_2 => " --audio-source=mic",
            Playback if v >= version::V2_6 => " --audio-source=playback",
            AudioDup if v >= version::V2_6 => " --audio-dup",
            AudioDupPlayback if v >= version::V2_6 => " --audio-dup --audio-source=playback",
            _ => "",
        }
    }
}

combo_enum!(Orientation {
    Natural => "Natural",
    Deg0 => "0° Degrees",
    Deg90 => "90° Degrees",
    Deg180 => "180° Degrees",
    Deg270 => "270° Degrees",
    Flip0 => "Flip 0° Degrees",
    Flip90 => "Flip 90° Degrees",
    Flip180 => "Flip 180° Degrees",
    Flip270 => "Flip 270° Degrees",
});

impl Orientation {
    /// 3.0 renamed the option to --capture-orientation; older releases take
    /// --lock-video-orientation, with an index form up to 2.2 and a degree
    /// form after that. Flips only exist from 3.0 on.
    pub fn args(&self, v: ToolVersion) -> &'static str {
        use Orientation::*;
        if v >= version::V3_0 {
            return match self {
                Natural => "",
                Deg0 => " --capture-orientation=@0",
                Deg90 => " --capture-orientation=@90",
                Deg180 => " --capture-orientation=@180",
                Deg270 => " --capture-orientation=@270",
                Flip0 => " --capture-orientation=@flip0",
                Flip90 => " --capture-orientation=@flip90",
                Flip180 => " --capture-orientation=@flip180",
                Flip270 => " --capture-orientation=@flip270",
            };
        }
        if v <= version::V2_2 {
            return match self {
                Deg0 => " --lock-video-orientation=0",
                Deg90 => " --lock-video-orientation=1",
                Deg180 => " --lock-video-orientation=2",
                Deg270 => " --lock-video-orientation=3",
                _ => "",
            };
        }
        match self {
            Deg0 => " --lock-video-orientation=0",
            Deg90 => " --lock-video-orientation=90",
            Deg180 => " --lock-video-orientation=180",
            Deg270 => " --lock-video-orientation=270",
            _ => "",
        }
    }
}

combo_enum!(VideoEncoder {
    Default => "Default",
    C2MtkAvc => "(h264) C2 Mtk Avc Encoder",
    C2AndroidAvc => "(h264) C2 Android Avc Encoder",
    OmxGoogleH264 => "(h264) OMX Google H264 Encoder",
    OmxMtkAvc => "(h264) OMX MTK VIDEO ENCODER AVC",
    C2MtkHevc => "(h265) C2 Mtk Hevc Encoder",
    OmxMtkHevc => "(h265) OMX MTK VIDEO ENCODER HEVC",
    C2AndroidAv1 => "(av1) C2 Android Av1 Encoder",
});

impl VideoEncoder {
    pub fn args(&self, v: ToolVersion) -> &'static str {
        use VideoEncoder::*;
        match self {
            Default => "",
            C2MtkAvc => " --video-encoder=c2.mtk.avc.encoder --video-codec=h264",
            C2AndroidAvc => " --video-encoder=c2.android.avc.encoder --video-codec=h264",
            OmxGoogleH264 => " --video-encoder=OMX.google.h264.encoder --video-codec=h264",
            OmxMtkAvc => " --video-encoder=OMX.MTK.VIDEO.ENCODER.AVC --video-codec=h264",
            C2MtkHevc => " --video-encoder=c2.mtk.hevc.encoder --video-codec=h265",
            OmxMtkHevc => " --video-encoder=OMX.MTK.VIDEO.ENCODER.HEVC --video-codec=h265",
            C2AndroidAv1 if v >= version::V3_1 => {
                " --video-encoder=c2.android.av1.encoder --video-codec=av1"
            }
            _ => "",
        }
    }
}

combo_enum!(AudioEncoder {
    Default => "Default",
    C2AndroidOpus => "(opus) C2 Android Opus Encoder",
    C2AndroidAac => "(aac) C2 Android Aac Encoder",
    OmxGoogleAac => "(aac) OMX Google Aac Encoder",
    C2AndroidFlac => "(flac) C2 Android Flac Encoder",
    OmxGoogleFlac => "(flac) OMX Google Flac Encoder",
});

impl AudioEncoder {
    pub fn args(&self, v: ToolVersion) -> &'static str {
        use AudioEncoder::*;
        match self {
            Default => "",
            C2AndroidOpus => " --audio-codec=opus --audio-encoder=c2.android.opus.encoder",
            C2AndroidAac => " --audio-codec=aac --audio-encoder=c2.android.aac.encoder",
            OmxGoogleAac => " --audio-codec=aac --audio-encoder=OMX.google.aac.encoder",
            C2AndroidFlac if v >= version::V2_3 => {
                " --audio-codec=flac --audio-encoder=c2.android.flac.encoder"
            }
            OmxGoogleFlac if v >= version::V2_3 => {
                " --audio-codec=flac --audio-encoder=OMX.google.flac.encoder"
            }
            _ => "",
        }
    }
}

combo_enum!(InputMode {
    Default => "Default",
    Aoa => "AoA",
    Sdk => "SDK",
    Uhid => "uHid",
});

/// Mouse and keyboard modes collapse into one argument group when both pick
/// the same backend (AoA additionally forces OTG).
fn input_args(mouse: InputMode, keyboard: InputMode) -> String {
    use InputMode::*;
    if mouse == keyboard {
        return match mouse {
            Default => s!(),
            Aoa => s!(" --otg --mouse=aoa --keyboard=aoa"),
            Sdk => s!(" --mouse=sdk --keyboard=sdk"),
            Uhid => s!(" --mouse=uhid --keyboard=uhid"),
        };
    }
    let mut line = s!();
    line.push_str(match mouse {
        Default => "",
        Aoa => " --otg --mouse=aoa",
        Sdk => " --mouse=sdk",
        Uhid => " --mouse=uhid",
    });
    line.push_str(match keyboard {
        Default => "",
        Aoa => " --otg --keyboard=aoa",
        Sdk => " --keyboard=sdk",
        Uhid => " --keyboard=uhid",
    });
    line
}

/* ---------- the builder ---------- */

/// Assemble the scrcpy argument line from a Start-tab snapshot.
/// Slider values come first, then line edits, then combos, then flags,
/// the order sessions have always been launched with.
pub fn build(t: &SessionTemplate, v: ToolVersion) -> String {
    let mut line = s!();

    // sliders
    line.push_str(&format!(" --max-fps {}", t.max_fps));
    line.push_str(&format!(" -m {}", t.max_size));
    if v >= version::V2_0 {
        line.push_str(&format!(" --video-bit-rate {}M", t.bit_rate_mbps));
    } else {
        line.push_str(&format!(" --bit-rate {}M", t.bit_rate_mbps));
    }
    if t.toggles.video_buffer {
        line.push_str(&format!(" --display-buffer {}", t.video_buffer_ms));
    }
    if t.toggles.audio_buffer && v >= version::V2_0 {
        line.push_str(&format!(" --audio-buffer {}", t.audio_buffer_ms));
    }
    if t.toggles.time_limit && v >= version::V2_1 {
        line.push_str(&format!(" --time-limit {}", t.time_limit_s));
    }

    // line edits
    if t.toggles.record {
        let mut ext = t.record_format.ext();
        if t.record_format.is_audio_only() && v < version::V2_1 {
            // audio containers only became recordable in 2.1
            ext = "mp4";
        } else if t.record_format.is_audio_only() {
            line.push_str(&format!(" --audio-codec={ext}"));
        }
        let name = if t.record_name.is_empty() { "video" } else { &t.record_name };
        line.push_str(&format!(" --record {name}.{ext}"));
    }
    if t.toggles.mouse_bind && v >= version::V2_5 {
        line.push_str(&format!(" --mouse-bind={}", t.mouse_bind));
    }
    if t.toggles.crop {
        line.push_str(&format!(" --crop {}", t.crop));
    }

    // combos
    line.push_str(t.video_source.args(v));
    line.push_str(t.audio_source.args(v));
    line.push_str(t.orientation.args(v));
    line.push_str(t.video_encoder.args(v));
    line.push_str(t.audio_encoder.args(v));
    line.push_str(&input_args(t.mouse_mode, t.keyboard_mode));

    // flags
    line.push_str(&t.toggles.args(v));

    line
}

/* ---------- lexical checks ---------- */

/// `-m`/`--max-size` below 500 makes most encoders fail; values that are not
/// plain digits are left for scrcpy itself to reject.
pub fn valid_max_size(arg_line: &str) -> bool {
    match max_size_value(arg_line) {
        Some(v) => v >= 500,
        None => true,
    }
}

fn max_size_value(arg_line: &str) -> Option<u64> {
    let mut words = arg_line.split_whitespace();
    while let Some(word) = words.next() {
        if word == "-m" || word == "--max-size" {
            return words.next()?.parse().ok();
        }
    }
    None
}

/// The file name following `-r`/`--record`, in its original case so the
/// line can be rewritten by plain substring replacement.
pub fn record_file_name(arg_line: &str) -> Option<String> {
    let mut words = arg_line.split_whitespace();
    while let Some(word) = words.next() {
        if word == "-r" || word == "--record" {
            return words.next().map(|n| s!(n));
        }
    }
    None
}

/// Rename `name.ext` to `name_N.ext` until it no longer collides with an
/// entry of `dir`. Comparison is case-insensitive for Windows's sake.
pub fn unique_record_name(dir: &Path, file_name: &str) -> String {
    let existing: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_lowercase())
            .collect(),
        Err(_) => return s!(file_name),
    };
    let lower = file_name.to_lowercase();
    if !existing.contains(&lower) {
        return s!(file_name);
    }
    let (stem, ext) = match lower.rsplit_once('.') {
        Some((s, e)) => (s, format!(".{e}")),
        None => (lower.as_str(), s!()),
    };
    let mut index = 0;
    loop {
        let candidate = format!("{stem}_{index}{ext}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        index += 1;
    }
}

/// Loose IPv4/IPv6 recognizer used to keep only Wi-Fi entries of the
/// device list ("192.168.0.3:5555\tdevice").
pub fn is_ip(text: &str) -> bool {
    fn ipv4(tok: &str) -> bool {
        let parts: Vec<&str> = tok.split('.').collect();
        parts.len() == 4
            && parts
                .iter()
                .all(|p| (1..=3).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit()))
    }
    fn ipv6(tok: &str) -> bool {
        let parts: Vec<&str> = tok.split(':').collect();
        parts.len() == 8
            && parts
                .iter()
                .all(|p| (1..=4).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_hexdigit()))
    }
    text.split_whitespace().any(|tok| {
        let head = tok.split(':').next().unwrap_or(tok);
        ipv4(head) || ipv6(tok)
    })
}
