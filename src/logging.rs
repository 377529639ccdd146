use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Filter used by [`init`]. `RUST_LOG` is only honoured in debug mode.
pub fn build_filter(debug: bool) -> EnvFilter {
    // When debug logging is disabled we force `info` level regardless of the
    // `RUST_LOG` environment variable.
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Initialise logging, optionally into `log_file` instead of stderr.
/// `debug` level can be explicitly enabled via the settings file.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // Only one global subscriber per process; a second init must not touch
    // the filesystem.
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = build_filter(debug);

    let target = log_file.and_then(|path| match path.file_name() {
        Some(file_name) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            Some((dir, file_name.to_owned()))
        }
        None => {
            eprintln!("invalid log file path {}, logging to stderr", path.display());
            None
        }
    });

    match target {
        Some((dir, file_name)) => {
            let appender = tracing_appender::rolling::never(dir, file_name);
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(appender)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_filter_ignores_rust_log() {
        assert_eq!(build_filter(false).to_string(), "info");
    }
}
