// src/adb.rs
//
// Bridge-utility operations. Every function runs adb inside the selected
// tool directory and hands the captured text back for fault matching; none
// of them interpret success beyond what the output says.

use std::io;
use std::path::Path;

use crate::cmdline::is_ip;
use crate::exec;

/// One row of the device-scan list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    pub serial: String,
    pub ip: String,
    pub model: String,
}

/// Serials from `adb devices` (header line and blanks skipped).
pub fn devices(dir: &Path) -> io::Result<Vec<String>> {
    let out = exec::run(dir, "adb devices")?;
    Ok(parse_devices(&out.stdout))
}

/// Only entries that look like ip:port, the ones `adb disconnect` can act on.
pub fn wifi_devices(dir: &Path) -> io::Result<Vec<String>> {
    Ok(devices(dir)?.into_iter().filter(|d| is_ip(d)).collect())
}

pub fn parse_devices(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .skip(1) // "List of devices attached"
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| l.split('\t').next())
        .map(|s| s!(s.trim()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Wi-Fi address and model per connected serial. Devices whose wlan0 query
/// errors (USB-only, no Wi-Fi up) are skipped.
pub fn device_infos(dir: &Path) -> io::Result<Vec<DeviceInfo>> {
    let mut infos = Vec::new();
    for serial in devices(dir)? {
        let ip_out = exec::run(dir, &format!("adb -s {serial} shell ip addr show wlan0"))?;
        if !ip_out.stderr_norm().is_empty() {
            continue;
        }
        let Some(ip) = parse_wlan_ip(&ip_out.stdout_norm()) else {
            continue;
        };
        let model_out = exec::run(dir, &format!("adb -s {serial} shell getprop ro.product.model"))?;
        infos.push(DeviceInfo {
            serial,
            ip,
            model: title_case(&model_out.stdout_norm()),
        });
    }
    Ok(infos)
}

fn parse_wlan_ip(out: &str) -> Option<String> {
    let after = out.split("inet ").nth(1)?;
    let ip = after.split('/').next()?;
    (!ip.is_empty()).then(|| s!(ip))
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => s!(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `adb tcpip PORT` then `adb connect IP:PORT`; both outputs feed the
/// connection fault table. A tcpip stderr takes the place of its stdout.
pub struct ConnectOutcome {
    pub tcpip: String,
    pub connect: String,
}

pub fn tcpip_connect(dir: &Path, ip: &str, port: &str) -> io::Result<ConnectOutcome> {
    let tcp = exec::run(dir, &format!("adb tcpip {port}"))?;
    let target = if port.is_empty() { s!(ip) } else { format!("{ip}:{port}") };
    let connect = exec::run(dir, &join!("adb connect ", &target))?;

    let tcpip = if tcp.stderr_norm().is_empty() {
        tcp.stdout_norm()
    } else {
        tcp.stderr_norm()
    };
    Ok(ConnectOutcome { tcpip, connect: connect.stdout_norm() })
}

/// Wi-Fi-debug pairing. The device listens on its pairing port; tcpip 5555
/// first so the follow-up connection lands on a known port.
pub fn pair(dir: &Path, ip: &str, port: &str, code: &str) -> io::Result<String> {
    exec::run(dir, "adb tcpip 5555")?;
    let out = exec::run(dir, &format!("adb pair {ip}:{port} {code}"))?;
    let err = out.stderr_norm();
    Ok(if err.is_empty() { out.stdout_norm() } else { err })
}

pub fn disconnect(dir: &Path, serial: &str) -> io::Result<String> {
    let out = exec::run(dir, &join!("adb disconnect ", serial))?;
    let err = out.stderr_norm();
    Ok(if err.is_empty() { out.stdout_norm() } else { err })
}

/// `adb shell wm size WxH`, or `wm size reset` when no resolution is given.
pub fn set_resolution(dir: &Path, serial: &str, resolution: Option<&str>) -> io::Result<String> {
    let cmd = match resolution {
        Some(res) => format!("adb -s {serial} shell wm size {res}"),
        None => format!("adb -s {serial} shell wm size reset"),
    };
    let out = exec::run(dir, &cmd)?;
    let err = out.stderr_norm();
    Ok(if err.is_empty() { out.stdout_norm() } else { err })
}

/// kill-server + start-server; returns (start stderr, kill stderr).
/// adb prints its "daemon started successfully" banner on stderr.
pub fn restart_server(dir: &Path) -> io::Result<(String, String)> {
    let kill = exec::run(dir, "adb kill-server")?;
    let start = exec::run(dir, "adb start-server")?;
    Ok((start.stderr_norm(), kill.stderr_norm()))
}

/// Interactive `adb shell` in a platform terminal window.
pub fn open_shell(dir: &Path, serial: &str) -> io::Result<()> {
    if cfg!(windows) {
        return exec::spawn(dir, &format!("start cmd.exe /k adb -s {serial} shell"));
    }
    // pick the first terminal emulator under /usr/bin
    let ls = exec::run(dir, "ls /usr/bin | grep terminal")?;
    let stdout = ls.stdout_norm();
    let terminal = stdout
        .split_whitespace()
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no terminal emulator found"))?;
    exec::spawn(
        dir,
        &format!("{terminal} -- bash -c 'adb -s {serial} shell; exec bash'"),
    )
}
