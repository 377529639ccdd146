pub mod common;
pub mod dashboard;
pub mod data_source;
pub mod export;
pub mod gui;
pub mod logging;
pub mod notice;
pub mod settings;
pub mod settings_editor;
pub mod toast_log;

pub use gui::DashForgeApp;
