// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod adb;
pub mod cmdline;
pub mod exec;
pub mod faults;
pub mod gui;
pub mod scrcpy;
pub mod settings;
pub mod version;
