// tests/output_parse.rs
use scryconnect::adb;
use scryconnect::exec;
use scryconnect::version::ToolVersion;

#[test]
fn normalization_lowercases_and_trims_the_right_end() {
    assert_eq!(exec::norm("ERROR: Demuxer\r\n"), "error: demuxer");
    // leading space is data (adb indents some lines)
    assert_eq!(exec::norm("  List\n"), "  list");
}

#[test]
fn device_list_skips_header_and_keeps_serials() {
    let stdout = "List of devices attached\n\
                  192.168.0.3:5555\tdevice\n\
                  R58M123ABC\tunauthorized\n\
                  \n";
    assert_eq!(adb::parse_devices(stdout), vec!["192.168.0.3:5555", "R58M123ABC"]);
}

#[test]
fn empty_device_list_parses_to_nothing() {
    assert!(adb::parse_devices("List of devices attached\n\n").is_empty());
}

#[test]
fn version_banner_parses_major_minor() {
    let banner = "scrcpy 2.4 <https://github.com/genymobile/scrcpy>";
    assert_eq!(ToolVersion::parse_banner(banner), Some(ToolVersion(2.4)));
}

#[test]
fn patch_releases_collapse_to_major_minor() {
    assert_eq!(
        ToolVersion::parse_banner("scrcpy 2.6.1 <https://...>"),
        Some(ToolVersion(2.6))
    );
}

#[test]
fn garbage_banners_do_not_parse() {
    assert_eq!(ToolVersion::parse_banner(""), None);
    assert_eq!(ToolVersion::parse_banner("scrcpy"), None);
    // a word with no digits yields no version
    assert_eq!(ToolVersion::parse_banner("scrcpy unknown"), None);
}

#[test]
fn version_ordering_matches_releases() {
    assert!(ToolVersion(2.7) < ToolVersion(3.0));
    assert!(ToolVersion(3.0) < ToolVersion(3.1));
    assert!(ToolVersion(2.0) <= ToolVersion(2.0));
}

#[test]
fn unknown_version_displays_as_such() {
    assert_eq!(ToolVersion::default().to_string(), "unknown");
    assert_eq!(ToolVersion(3.0).to_string(), "3.0");
}
