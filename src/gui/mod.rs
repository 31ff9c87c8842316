// src/gui/mod.rs
pub mod actions;
pub mod alerts;
pub mod app;
pub mod tabs;
pub mod workers;

pub use app::run;
