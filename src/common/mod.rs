pub mod file_dialog;
pub mod job;
