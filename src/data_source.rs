use crate::common::job::CancelToken;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Picked CSV file. Only name and size are known; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

impl CsvFile {
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        if !meta.is_file() {
            anyhow::bail!("{} is not a file", path.display());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            size_bytes: meta.len(),
            path: path.to_path_buf(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionRequest {
    Api { url: String, api_key: Option<String> },
    Sheets { url: String },
    Csv(CsvFile),
}

impl ConnectionRequest {
    pub fn api(url: &str, api_key: &str) -> Self {
        let api_key = api_key.trim();
        ConnectionRequest::Api {
            url: url.trim().to_string(),
            api_key: (!api_key.is_empty()).then(|| api_key.to_string()),
        }
    }

    pub fn sheets(url: &str) -> Self {
        ConnectionRequest::Sheets {
            url: url.trim().to_string(),
        }
    }

    /// Presence check performed before any connection attempt. The error text
    /// is shown to the user as is.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self {
            ConnectionRequest::Api { url, .. } if url.is_empty() => Err("Please enter an API URL"),
            ConnectionRequest::Sheets { url } if url.is_empty() => {
                Err("Please enter a Google Sheets URL")
            }
            _ => Ok(()),
        }
    }
}

/// Outcome of a successful connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionReport {
    pub message: String,
}

/// Pluggable data source backend.
pub trait DataSourceConnector: Send + Sync {
    fn connect_api(
        &self,
        url: &str,
        api_key: Option<&str>,
        cancel: &CancelToken,
    ) -> anyhow::Result<ConnectionReport>;

    fn connect_sheets(&self, url: &str, cancel: &CancelToken) -> anyhow::Result<ConnectionReport>;

    fn upload_csv(&self, file: &CsvFile, cancel: &CancelToken) -> anyhow::Result<ConnectionReport>;

    fn connect(
        &self,
        request: &ConnectionRequest,
        cancel: &CancelToken,
    ) -> anyhow::Result<ConnectionReport> {
        match request {
            ConnectionRequest::Api { url, api_key } => {
                self.connect_api(url, api_key.as_deref(), cancel)
            }
            ConnectionRequest::Sheets { url } => self.connect_sheets(url, cancel),
            ConnectionRequest::Csv(file) => self.upload_csv(file, cancel),
        }
    }
}

/// Reports success without any network or file I/O.
#[derive(Debug, Clone, Default)]
pub struct SimulatedConnector {
    delay: Duration,
}

impl SimulatedConnector {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl DataSourceConnector for SimulatedConnector {
    fn connect_api(
        &self,
        url: &str,
        api_key: Option<&str>,
        cancel: &CancelToken,
    ) -> anyhow::Result<ConnectionReport> {
        tracing::info!(url, with_key = api_key.is_some(), "simulated api connection");
        cancel.sleep(self.delay)?;
        Ok(ConnectionReport {
            message: "Successfully connected to API".into(),
        })
    }

    fn connect_sheets(&self, url: &str, cancel: &CancelToken) -> anyhow::Result<ConnectionReport> {
        tracing::info!(url, "simulated sheets connection");
        cancel.sleep(self.delay)?;
        Ok(ConnectionReport {
            message: "Successfully connected to Google Sheets".into(),
        })
    }

    fn upload_csv(&self, file: &CsvFile, cancel: &CancelToken) -> anyhow::Result<ConnectionReport> {
        tracing::info!(name = %file.name, bytes = file.size_bytes, "simulated csv upload");
        cancel.sleep(self.delay)?;
        Ok(ConnectionReport {
            message: format!("Successfully uploaded {}", file.name),
        })
    }
}
