// src/exec.rs
//
// The process boundary: one command line through the platform shell, with
// the tool directory as cwd, output captured for substring matching.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

pub struct Output {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl Output {
    /// Lowercased, right-trimmed stderr, the form the fault tables match.
    pub fn stderr_norm(&self) -> String {
        norm(&self.stderr)
    }

    pub fn stdout_norm(&self) -> String {
        norm(&self.stdout)
    }
}

pub fn norm(text: &str) -> String {
    text.trim_end().to_lowercase()
}

fn shell(dir: &Path, command_line: &str) -> Command {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.args(["/C", command_line]);
        c
    } else {
        let mut c = Command::new("sh");
        c.args(["-c", command_line]);
        c
    };
    cmd.current_dir(dir);
    cmd
}

/// Run to completion, capturing both streams. Blocks; callers run this on a
/// worker thread.
pub fn run(dir: &Path, command_line: &str) -> io::Result<Output> {
    logd!("Exec: [{}] {}", dir.display(), command_line);
    let out = shell(dir, command_line)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;
    Ok(Output {
        stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        code: out.status.code(),
    })
}

/// Fire and forget, for terminal windows and file managers.
pub fn spawn(dir: &Path, command_line: &str) -> io::Result<()> {
    logd!("Exec: spawn [{}] {}", dir.display(), command_line);
    shell(dir, command_line)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
