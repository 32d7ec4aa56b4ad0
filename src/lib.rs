// src/lib.rs

pub mod app;
pub mod attachment;
pub mod config;
pub mod errors;
pub mod key_handlers;
pub mod log_view;
pub mod logging;
pub mod models;
pub mod playback;
pub mod responses;
pub mod session;
pub mod splash_screen;
pub mod status_indicator;
pub mod store;
pub mod ui;

pub use app::{App, AppScreen};
