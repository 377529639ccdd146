use chrono::Local;
use once_cell::sync::Lazy;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const TOAST_LOG_FILE: &str = "toast.log";

static WRITE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub fn append_toast_log(msg: &str) {
    if let Err(e) = append_toast_log_to(TOAST_LOG_FILE, msg) {
        tracing::debug!("failed to append toast log: {e}");
    }
}

pub fn append_toast_log_to(path: impl AsRef<Path>, msg: &str) -> anyhow::Result<()> {
    let _guard = WRITE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg)?;
    Ok(())
}

/// Last `count` lines of the log, oldest first. Missing files yield nothing.
pub fn read_last_lines(path: impl AsRef<Path>, count: usize) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    let mut lines: Vec<String> = content.lines().map(|s| s.to_owned()).collect();
    if lines.len() > count {
        lines.drain(0..lines.len() - count);
    }
    lines
}
