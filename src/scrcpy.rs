// src/scrcpy.rs
//
// Mirroring-tool operations: install verification, version probing, session
// launch, and the post-session recording move.

use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;

use crate::cmdline;
use crate::exec;
use crate::version::ToolVersion;

/// On Windows the selected directory must hold both binaries; elsewhere the
/// tools come from PATH and any directory passes.
pub fn verify_install(path: &str) -> bool {
    if !cfg!(windows) {
        return true;
    }
    let Ok(entries) = fs::read_dir(path) else {
        return false;
    };
    let files: Vec<String> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().trim().to_lowercase())
        .collect();
    files.iter().any(|f| f == "scrcpy.exe") && files.iter().any(|f| f == "adb.exe")
}

/// The directory scrcpy commands run in: the selected install on Windows,
/// "." elsewhere (PATH lookup).
pub fn working_dir(path: &str) -> &Path {
    if cfg!(windows) && !path.is_empty() {
        Path::new(path)
    } else {
        Path::new(".")
    }
}

/// `scrcpy -v`, banner parsed into an ordered version.
pub fn probe_version(dir: &Path) -> Result<ToolVersion, Box<dyn Error>> {
    let out = exec::run(dir, "scrcpy -v")?;
    let banner = out.stdout_norm();
    ToolVersion::parse_banner(&banner)
        .ok_or_else(|| format!("could not parse scrcpy version from {banner:?}").into())
}

pub struct SessionResult {
    /// Normalized stderr, for the fault tables.
    pub stderr: String,
    /// Record file actually written, after collision renaming.
    pub record_file: Option<String>,
}

/// Rewrite the record target of `arg_line` when it collides with a file
/// already in `dir`. Returns the final line and the file scrcpy will write.
pub fn uniquify_recording(dir: &Path, arg_line: &str) -> (String, Option<String>) {
    let mut arg_line = s!(arg_line.trim());
    let mut record_file = cmdline::record_file_name(&arg_line);

    if let Some(name) = &record_file {
        let unique = cmdline::unique_record_name(dir, name);
        if unique != *name {
            arg_line = arg_line.replace(name.as_str(), &unique);
            record_file = Some(unique);
        }
    }
    (arg_line, record_file)
}

/// Run one mirroring session to completion. Blocks for the session's whole
/// lifetime; always called from a worker thread. When the argument line
/// records to a file that already exists in the tool directory, the file
/// name is uniquified first so nothing is overwritten.
pub fn launch(dir: &Path, serial: Option<&str>, arg_line: &str) -> io::Result<SessionResult> {
    let (arg_line, record_file) = uniquify_recording(dir, arg_line);

    let cmd = match serial {
        Some(serial) => format!("scrcpy -s {serial} {arg_line}"),
        None => join!("scrcpy ", &arg_line),
    };
    logf!("Session: {}", cmd);
    let out = exec::run(dir, &cmd)?;
    Ok(SessionResult { stderr: out.stderr_norm(), record_file })
}

/// Move a finished recording into the user's chosen directory, renaming on
/// collision. Err carries a message for the alert dialog.
pub fn relocate_recording(
    record_file: &str,
    tool_dir: &Path,
    target_dir: &str,
) -> Result<(), String> {
    let target = Path::new(target_dir);
    if !target.is_dir() {
        return Err(s!("target directory not found"));
    }
    let final_name = cmdline::unique_record_name(target, record_file);
    let from = tool_dir.join(record_file);
    let to = target.join(&final_name);

    // fs::rename fails across filesystems; fall back to copy + remove
    if fs::rename(&from, &to).is_err() {
        fs::copy(&from, &to).map_err(|e| e.to_string())?;
        fs::remove_file(&from).map_err(|e| e.to_string())?;
    }
    logf!("Recording: {} -> {}", record_file, to.display());
    Ok(())
}
