// src/gui/tabs/mod.rs
pub mod config;
pub mod connect;
pub mod start;
