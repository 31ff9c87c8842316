// src/settings.rs
//
// The one persistent entity: a nested UserData.json document holding saved
// connections, tool versions, resolutions, session templates and the
// last-used widget state per tab. Loaded once at startup, mutated by UI
// callbacks, written back wholesale.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::version::ToolVersion;

pub const DATA_DIR: &str = "data";
pub const SETTINGS_FILE: &str = "UserData.json";

pub fn settings_path() -> PathBuf {
    PathBuf::from(DATA_DIR).join(SETTINGS_FILE)
}

/* ---------- document ---------- */

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub theme_active: usize,
    pub connect: ConnectData,
    pub session_templates: BTreeMap<String, SessionTemplate>,
    pub resolutions: BTreeMap<String, Resolution>,
    pub versions: VersionData,
    pub recording: RecordingData,
    pub last_session: LastSession,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectData {
    /// "ip:port" → endpoint
    pub saved: BTreeMap<String, Endpoint>,
    /// Port used by the device-scan list when connecting a discovered device
    pub port_auto: Option<String>,
    /// Serials connected during this install's lifetime (bookkeeping only)
    pub connected: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub ip: String,
    pub port: String,
}

impl Endpoint {
    pub fn label(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// "WxH", the form `adb shell wm size` takes.
    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }

    /// Width/height must be positive and under 8 digits.
    pub fn is_valid(&self) -> bool {
        let ok = |v: u32| v > 0 && v < 100_000_000;
        ok(self.width) && ok(self.height)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionData {
    pub selected: ToolInstall,
    pub saved: BTreeMap<String, ToolInstall>,
}

/// A scrcpy directory plus the version probed from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolInstall {
    pub path: String,
    pub version: ToolVersion,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordingData {
    pub selected: Option<String>,
    pub saved: BTreeMap<String, String>,
    /// false → recordings stay in the tool directory
    pub use_custom_dir: bool,
}

/* ---------- session template (Start tab snapshot) ---------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionTemplate {
    // sliders
    pub max_fps: u32,
    pub max_size: u32,
    pub bit_rate_mbps: u32,
    pub video_buffer_ms: u32,
    pub audio_buffer_ms: u32,
    pub time_limit_s: u32,

    // line edits
    pub record_name: String,
    pub mouse_bind: String,
    pub crop: String,
    /// Free-form argument line launched as-is, bypassing the builder.
    pub manual_args: String,

    // combo boxes
    pub record_format: crate::cmdline::RecordFormat,
    pub video_source: crate::cmdline::VideoSource,
    pub audio_source: crate::cmdline::AudioSource,
    pub orientation: crate::cmdline::Orientation,
    pub video_encoder: crate::cmdline::VideoEncoder,
    pub audio_encoder: crate::cmdline::AudioEncoder,
    pub mouse_mode: crate::cmdline::InputMode,
    pub keyboard_mode: crate::cmdline::InputMode,

    pub toggles: crate::cmdline::Toggles,
}

impl Default for SessionTemplate {
    fn default() -> Self {
        Self {
            max_fps: 60,
            max_size: 1000,
            bit_rate_mbps: 8,
            video_buffer_ms: 0,
            audio_buffer_ms: 0,
            time_limit_s: 0,
            record_name: s!(),
            mouse_bind: s!(),
            crop: s!(),
            manual_args: s!(),
            record_format: Default::default(),
            video_source: Default::default(),
            audio_source: Default::default(),
            orientation: Default::default(),
            video_encoder: Default::default(),
            audio_encoder: Default::default(),
            mouse_mode: Default::default(),
            keyboard_mode: Default::default(),
            toggles: Default::default(),
        }
    }
}

/* ---------- last-used UI state per tab ---------- */

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastSession {
    pub connect: ConnectSession,
    pub start: SessionTemplate,
    pub config: ConfigSession,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectSession {
    pub ip_index: usize,
    pub ip_text: String,
    pub port_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSession {
    pub version_index: usize,
    pub resolution_index: usize,
    pub path_index: usize,
}

/* ---------- named-map mutators ---------- */
//
// Name-uniqueness and range checks live on the document, not in the UI
// callbacks. Each mutator leaves the document untouched when the check
// fails.

impl UserData {
    pub fn save_connection(&mut self, ip: &str, port: &str) -> Option<String> {
        let (ip, port) = (ip.trim(), port.trim());
        if ip.is_empty() || port.is_empty() {
            return None;
        }
        let name = format!("{ip}:{port}");
        if self.connect.saved.contains_key(&name) {
            return None;
        }
        self.connect.saved.insert(
            name.clone(),
            Endpoint { ip: s!(ip), port: s!(port) },
        );
        Some(name)
    }

    pub fn delete_connection(&mut self, name: &str) -> bool {
        self.connect.saved.remove(name).is_some()
    }

    pub fn save_template(&mut self, name: &str, template: SessionTemplate) -> bool {
        let name = name.trim();
        if name.is_empty() || self.session_templates.contains_key(name) {
            return false;
        }
        self.session_templates.insert(s!(name), template);
        true
    }

    pub fn delete_template(&mut self, name: &str) -> bool {
        self.session_templates.remove(name).is_some()
    }

    pub fn save_resolution(&mut self, res: Resolution) -> Option<String> {
        if !res.is_valid() {
            return None;
        }
        let name = res.label();
        if self.resolutions.contains_key(&name) {
            return None;
        }
        self.resolutions.insert(name.clone(), res);
        Some(name)
    }

    pub fn delete_resolution(&mut self, name: &str) -> bool {
        self.resolutions.remove(name).is_some()
    }

    pub fn save_version(&mut self, name: &str, install: ToolInstall) -> bool {
        let name = name.trim();
        if name.is_empty() || self.versions.saved.contains_key(name) {
            return false;
        }
        self.versions.selected = install.clone();
        self.versions.saved.insert(s!(name), install);
        true
    }

    /// Remove a saved version; the selected one falls back to any remaining
    /// entry, or to an empty install when none are left.
    pub fn delete_version(&mut self, name: &str) -> bool {
        if self.versions.saved.remove(name).is_none() {
            return false;
        }
        self.versions.selected = self
            .versions
            .saved
            .values()
            .next()
            .cloned()
            .unwrap_or_default();
        true
    }

    pub fn save_recording_path(&mut self, name: &str, path: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.recording.saved.contains_key(name) {
            return false;
        }
        self.recording.saved.insert(s!(name), s!(path));
        self.recording.selected = Some(s!(path));
        true
    }

    pub fn delete_recording_path(&mut self, name: &str) -> bool {
        if self.recording.saved.remove(name).is_none() {
            return false;
        }
        self.recording.selected = self.recording.saved.values().next().cloned();
        true
    }

    pub fn selected_tool_dir(&self) -> Option<&str> {
        let p = self.versions.selected.path.as_str();
        (!p.is_empty()).then_some(p)
    }

    pub fn selected_version(&self) -> ToolVersion {
        self.versions.selected.version
    }
}

/* ---------- file I/O ---------- */

pub fn load() -> UserData {
    load_from(&settings_path())
}

/// Missing or corrupt file yields defaults; corruption is logged, not fatal.
pub fn load_from(path: &Path) -> UserData {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) => {
            logd!("Settings: {} not read ({}), using defaults", path.display(), e);
            return UserData::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(data) => data,
        Err(e) => {
            loge!("Settings: {} corrupt ({}), using defaults", path.display(), e);
            UserData::default()
        }
    }
}

pub fn save(data: &UserData) -> io::Result<()> {
    save_to(&settings_path(), data)
}

pub fn save_to(path: &Path, data: &UserData) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)
}
