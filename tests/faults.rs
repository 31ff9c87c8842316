// tests/faults.rs
use scryconnect::faults;

#[test]
fn unknown_output_is_not_a_fault() {
    assert_eq!(faults::session_fault("info: mirroring started"), None);
    assert_eq!(faults::disconnect_fault("disconnected 192.168.0.3:5555"), None);
    assert_eq!(faults::resolution_fault("physical size: 1080x2400"), None);
}

#[test]
fn argument_faults_match_first() {
    // "could not parse" is a value error even when device phrases follow
    let out = "error: could not parse resolution, state=offline";
    let alert = faults::session_fault(out).unwrap();
    assert_eq!(alert.title, "Values Error");
}

#[test]
fn unexpected_argument_phrases() {
    for out in ["unexpected additional arguments", "ambiguous option --n", "unknown option --x"] {
        let alert = faults::argument_fault(out).unwrap();
        assert_eq!(alert.title, "Arguments Unexpected");
    }
}

#[test]
fn device_faults() {
    assert_eq!(
        faults::device_fault("error: could not find any adb device").unwrap().title,
        "Nothing Detected"
    );
    assert_eq!(faults::device_fault("device state=offline").unwrap().title, "Offline Device");
    assert_eq!(faults::device_fault("status 0xfffffff4").unwrap().title, "Encoding Error");
    assert_eq!(faults::device_fault("device unauthorized").unwrap().title, "Unauthorized");
}

#[test]
fn combination_faults() {
    let out = "could not request to show touches if control is disabled";
    assert_eq!(faults::session_fault(out).unwrap().title, "Incompatible Args");
}

#[test]
fn camera_and_otg_faults() {
    assert_eq!(
        faults::argument_fault("camera options are only available with --video-source=camera")
            .unwrap()
            .title,
        "Camera Options"
    );
    assert_eq!(
        faults::argument_fault("--hid-mouse will only work in otg mode").unwrap().title,
        "OTG Arg"
    );
}

#[test]
fn connection_faults_check_both_streams() {
    // tcpip side
    assert_eq!(
        faults::connection_fault("error: no devices/emulators found", "").unwrap().title,
        "Device Not Found"
    );
    assert_eq!(
        faults::connection_fault("error: invalid port", "").unwrap().title,
        "Invalid Port"
    );
    // connect side
    assert_eq!(
        faults::connection_fault("", "already connected to 192.168.0.3:5555").unwrap().title,
        "Already Connected"
    );
    assert_eq!(
        faults::connection_fault("", "failed to connect (10061)").unwrap().title,
        "Connection Refused"
    );
    assert_eq!(
        faults::connection_fault("", "connection reset: protocol fault").unwrap().title,
        "Protocol Fault"
    );
    assert_eq!(faults::connection_fault("restarting in tcp mode port: 5555", "connected to x"), None);
}

#[test]
fn connection_success_needs_the_phrase() {
    assert!(faults::connection_succeeded("connected to 192.168.0.3:5555"));
    // "already connected to" is caught by the fault table before this runs
    assert!(!faults::connection_succeeded("failed to connect"));
}

#[test]
fn disconnect_and_resolution_faults() {
    assert_eq!(
        faults::disconnect_fault("error: no such device").unwrap().title,
        "Failed To Find Device"
    );
    assert_eq!(
        faults::resolution_fault("java.lang.security exception").unwrap().title,
        "Permission Refused"
    );
    assert_eq!(
        faults::resolution_fault("not implemented: display 1").unwrap().title,
        "Not Supported Resolution"
    );
}

#[test]
fn server_restart_banner() {
    assert!(faults::server_restarted("* daemon started successfully"));
    assert!(!faults::server_restarted(""));
}
