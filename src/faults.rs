// src/faults.rs
//
// Output classification. The external tools report problems as free text;
// each classifier scans the normalized (lowercased, trimmed) capture against
// a static substring table and maps the first hit to a canned dialog.
// Unmatched output is treated as success; an unknown message simply
// scrolls past in the log.

/// Title/body pair for a modal dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub body: String,
}

impl Alert {
    pub fn new(title: &str, body: &str) -> Self {
        Self { title: s!(title), body: s!(body) }
    }
}

/* ---------- grouped substring lists ---------- */

pub const DEVICE_NOT_FOUND: &[&str] = &[
    "could not find any adb",
    "could not find adb device",
];

pub const ARGS_UNEXPECTED: &[&str] = &[
    "unexpected additional arg",
    "ambiguous option",
    "unknown option",
];

pub const VALUE_ERROR: &[&str] = &[
    "illegalargument",
    "could not parse",
    "option requires an arg",
];

fn any_of(out: &str, list: &[&str]) -> bool {
    list.iter().any(|needle| out.contains(needle))
}

/* ---------- session launch ---------- */

/// First matching fault across the argument, device and combination
/// tables, checked in that order.
pub fn session_fault(err_out: &str) -> Option<Alert> {
    argument_fault(err_out)
        .or_else(|| device_fault(err_out))
        .or_else(|| combination_fault(err_out))
}

pub fn argument_fault(err_out: &str) -> Option<Alert> {
    if any_of(err_out, ARGS_UNEXPECTED) {
        return Some(Alert::new(
            "Arguments Unexpected",
            "You provided an invalid arg, check that the arg used is\n\
             compatible with the version of scrcpy used, and try again",
        ));
    }
    if any_of(err_out, VALUE_ERROR) {
        return Some(Alert::new(
            "Values Error",
            "Not all values for the required arguments were provided or \
             invalid values were provided\nCheck the commands (like --crop) \
             and try again.",
        ));
    }
    let table: &[(&str, &str, &str)] = &[
        (
            "nothing to do",
            "Nothing To Do",
            "Nothing is being used <Video | Audio | OTG> in other words \
             nothing to do\ncheck everything is correct and try again",
        ),
        (
            "no format specified",
            "No Format",
            "The format chosen for '--record' is not valid or has not been \
             set\nchoose a valid one (.mp4 | .mkv) and try again",
        ),
        (
            "only work in otg mode",
            "OTG Arg",
            "To use arg (--hid-keyboard | --hid-mouse)\nyou need to use the \
             argument (--otg)",
        ),
        (
            "audio container does not support video stream",
            "Audio Container",
            "The selected audio container does not support the video stream\n\
             use --no-video and try again",
        ),
        (
            "camera options are only available with --video-source=camera",
            "Camera Options",
            "Camera options are only available with --video-source=camera\n\
             (This can also be caused by the '--crop' argument)",
        ),
        (
            "could not specify both --camera-size and -m/--max-size",
            "Camera Size",
            "Cannot specify --camera-size and -m/--max-size at the same time.",
        ),
        (
            "could not specify both --camera-id and --camera-facing",
            "Camera ID",
            "Cannot specify --camera-id and --camera-facing at the same time.",
        ),
        (
            "otg mode (--otg) is not supported on this platform",
            "Not Supported",
            "The otg mode (--otg) is not supported on this platform\n\
             try updating the version of scrcpy",
        ),
        (
            "otg mode (--otg) is disabled",
            "OTG Mode Disabled",
            "OTG mode (--otg) has been disabled, to fix this problem try \
             updating the version of scrcpy",
        ),
        (
            "invalid mouse bindings",
            "Mouse Bindings",
            "Mouse bindings are invalid, a binding can have a maximum of 4 \
             characters\nusing any of these characters: '+', '-', 'b', 'h', \
             's', 'n'.",
        ),
        (
            "could not retrieve device information",
            "Args Error",
            "Could not retrieve device information, try changing the arguments",
        ),
        (
            "--no-mouse-over is specific to --mouse=sdk",
            "No Mouse Over",
            "The --no-mouse-over option is specific to --mouse=sdk",
        ),
        (
            "--no-key-repeat is specific to --keyboard=sdk",
            "No Key Repeat",
            "The --no-key-repeat option is specific to --keyboard=sdk",
        ),
        (
            "--prefer-text is specific to --keyboard=sdk",
            "Prefer Text",
            "The --prefer-text option is specific to --keyboard=sdk",
        ),
        (
            "--raw-key-events is specific to --keyboard=sdk",
            "Raw Key Events",
            "The --raw-key-events option is specific to --keyboard=sdk",
        ),
    ];
    table
        .iter()
        .find(|(needle, _, _)| err_out.contains(needle))
        .map(|(_, title, body)| Alert::new(title, body))
}

pub fn device_fault(err_out: &str) -> Option<Alert> {
    if any_of(err_out, DEVICE_NOT_FOUND) {
        return Some(Alert::new(
            "Nothing Detected",
            "No device was detected, connect a device (Wi-Fi | USB)\nand try again",
        ));
    }
    let table: &[(&str, &str, &str)] = &[
        (
            "not find any usb device",
            "USB Device",
            "You need to connect the device via USB to use OTG, via Wi-Fi \
             will not work",
        ),
        (
            "state=offline",
            "Offline Device",
            "The selected device is offline, try disconnecting and \
             connecting it and try again",
        ),
        (
            "0xfffffff4",
            "Encoding Error",
            "An encoding error was detected, try changing the video bit-rate\n\
             or the maximum size (-m | --max-size) and try again.",
        ),
        (
            "encoding error",
            "Encoding Error",
            "An encoding error occurred, check that the arguments and their \
             values are correct\nand that the device is configured correctly, \
             then try again",
        ),
        (
            "turn screen off if control is disabled",
            "No Control",
            "Cannot use turn screen off without device control.",
        ),
        (
            "unauthorized",
            "Unauthorized",
            "The device has not yet authorized this computer\nto establish \
             an adb connection.",
        ),
        (
            "no matching camera found",
            "No Camera Was Found",
            "Make sure the camera is properly connected.",
        ),
    ];
    table
        .iter()
        .find(|(needle, _, _)| err_out.contains(needle))
        .map(|(_, title, body)| Alert::new(title, body))
}

pub fn combination_fault(err_out: &str) -> Option<Alert> {
    let table: &[(&str, &str, &str)] = &[
        (
            "--prefer-text is incompatible with --raw-key-events",
            "Incompatible Args",
            "The args '--prefer-text' and '--raw-key-events' are not \
             compatible\nremove one of them and try again.",
        ),
        (
            "not request to show touches if control is disabled",
            "Incompatible Args",
            "The args '--show-touches' and '--no-control' (or camera) are \
             not compatible\nremove one of them and try again",
        ),
        (
            "not request to stay awake if control is disabled",
            "Incompatible Args",
            "The args '--stay-awake' and '--no-control' (or camera) are not \
             compatible\nremove one of them and try again",
        ),
    ];
    table
        .iter()
        .find(|(needle, _, _)| err_out.contains(needle))
        .map(|(_, title, body)| Alert::new(title, body))
}

/* ---------- connection ---------- */

/// tcpip and connect outputs are matched together; connect-side phrases win
/// where both streams carry something.
pub fn connection_fault(tcpip_out: &str, connect_out: &str) -> Option<Alert> {
    if connect_out.contains("already connected to") {
        return Some(Alert::new("Already Connected", "This IP is already connected"));
    }
    if tcpip_out.contains("no devices/emulators found") {
        return Some(Alert::new(
            "Device Not Found",
            "No device found, check if it is properly connected (USB)",
        ));
    }
    if tcpip_out.contains("invalid port") {
        return Some(Alert::new(
            "Invalid Port",
            "Invalid PORT, make sure the PORT you entered is valid",
        ));
    }
    let table: &[(&str, &str, &str)] = &[
        (
            "(11001)",
            "Not Recognized",
            "The IP and Port were not recognized, check that both\nare \
             correct and try again (11001)",
        ),
        (
            "(10060)",
            "No Response",
            "Did not get a response from the connected device to the host\n\
             check the IP and try again (10060)",
        ),
        (
            "(10061)",
            "Connection Refused",
            "The connection was refused by the destination device, check \
             that it is not already connected to some host\nand make sure \
             the IP and Port are valid (10061)",
        ),
        (
            "bad port number",
            "Bad Port",
            "The chosen port is not usable, please choose another",
        ),
        (
            "server connection failed",
            "Connection Failed",
            "The connection was refused by the destination device,\nor the \
             device is offline",
        ),
        (
            "protocol fault",
            "Protocol Fault",
            "The protocol faulted, make sure the IP/PORT is valid",
        ),
    ];
    table
        .iter()
        .find(|(needle, _, _)| connect_out.contains(needle))
        .map(|(_, title, body)| Alert::new(title, body))
}

/// Success is only announced when the connect output actually says so.
pub fn connection_succeeded(connect_out: &str) -> bool {
    connect_out.contains("connected to")
}

/* ---------- disconnect / resolution / server ---------- */

pub fn disconnect_fault(out: &str) -> Option<Alert> {
    if out.contains("no such device") {
        return Some(Alert::new(
            "Failed To Find Device",
            "Cannot find the device, check that it has been connected \
             before and is valid",
        ));
    }
    if out.contains("security exception") {
        return Some(Alert::new(
            "Permission Refused",
            "Go in developer options and make sure\n'USB debugging \
             (Security settings)' is enabled",
        ));
    }
    None
}

pub fn resolution_fault(out: &str) -> Option<Alert> {
    if out.contains("not found") {
        return Some(Alert::new(
            "Device Not Found",
            "No device found, check if it is properly connected (USB or Wi-Fi)",
        ));
    }
    if out.contains("security exception") {
        return Some(Alert::new(
            "Permission Refused",
            "Go in developer options and make sure 'USB debugging \
             (Security settings)' is enabled",
        ));
    }
    if out.contains("not implemented: display") {
        return Some(Alert::new(
            "Not Supported Resolution",
            "The selected resolution is not supported by your device\nTry a \
             different resolution (your device will likely reboot)",
        ));
    }
    None
}

/// adb prints "daemon started successfully" on stderr when the restart took.
pub fn server_restarted(start_err: &str) -> bool {
    start_err.contains("started successfully")
}
