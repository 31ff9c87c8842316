// src/version.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scrcpy release number, compared the way the flag tables need it
/// (2.7 < 3.0 < 3.1). Stored as MAJOR.MINOR only; patch releases never
/// change the argument surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ToolVersion(pub f32);

pub const V2_0: ToolVersion = ToolVersion(2.0);
pub const V2_1: ToolVersion = ToolVersion(2.1);
pub const V2_2: ToolVersion = ToolVersion(2.2);
pub const V2_3: ToolVersion = ToolVersion(2.3);
pub const V2_5: ToolVersion = ToolVersion(2.5);
pub const V2_6: ToolVersion = ToolVersion(2.6);
pub const V2_7: ToolVersion = ToolVersion(2.7);
pub const V3_0: ToolVersion = ToolVersion(3.0);
pub const V3_1: ToolVersion = ToolVersion(3.1);

impl ToolVersion {
    pub fn is_known(self) -> bool {
        self.0 > 0.0
    }

    /// Parse the first line of `scrcpy -v`, e.g.
    /// `scrcpy 2.4 <https://github.com/Genymobile/scrcpy>`.
    /// Everything after a second '.' is dropped (2.6.1 → 2.6).
    pub fn parse_banner(out: &str) -> Option<Self> {
        let word = out.split_whitespace().nth(1)?;
        let mut digits = s!();
        let mut seen_point = false;
        for ch in word.chars() {
            if ch == '.' {
                if seen_point {
                    break;
                }
                seen_point = true;
                digits.push(ch);
            } else if ch.is_ascii_digit() {
                digits.push(ch);
            }
        }
        digits.parse().ok().map(ToolVersion)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "unknown")
        }
    }
}
