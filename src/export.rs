use crate::common::job::CancelToken;
use crate::dashboard::widget::WidgetDescriptor;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_EXPORT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Csv => "CSV",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A4,
    Letter,
}

impl PaperSize {
    pub fn label(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfOptions {
    pub all_widgets: bool,
    pub include_data_tables: bool,
    pub paper_size: PaperSize,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            all_widgets: true,
            include_data_tables: true,
            paper_size: PaperSize::A4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub all_data: bool,
    pub include_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            all_data: true,
            include_headers: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOptions {
    Pdf(PdfOptions),
    Csv(CsvOptions),
}

impl ExportOptions {
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportOptions::Pdf(_) => ExportFormat::Pdf,
            ExportOptions::Csv(_) => ExportFormat::Csv,
        }
    }
}

/// Everything a backend needs to export the dashboard.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub options: ExportOptions,
    pub widgets: Vec<WidgetDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub format: ExportFormat,
    pub widget_count: usize,
    /// Written file, if the backend produced one.
    pub artifact: Option<PathBuf>,
}

/// Pluggable export implementation. Runs off the UI thread and must return
/// [`crate::common::job::Cancelled`] when `cancel` fires.
pub trait ExportBackend: Send + Sync {
    fn export(&self, request: &ExportRequest, cancel: &CancelToken) -> anyhow::Result<ExportReport>;
}

/// Placeholder backend: waits a fixed delay and produces no file.
#[derive(Debug, Clone)]
pub struct SimulatedExportBackend {
    delay: Duration,
}

impl Default for SimulatedExportBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_EXPORT_DELAY_MS))
    }
}

impl SimulatedExportBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl ExportBackend for SimulatedExportBackend {
    fn export(&self, request: &ExportRequest, cancel: &CancelToken) -> anyhow::Result<ExportReport> {
        let format = request.options.format();
        tracing::info!(
            format = format.label(),
            widgets = request.widgets.len(),
            "simulated export started"
        );
        cancel.sleep(self.delay)?;
        Ok(ExportReport {
            format,
            widget_count: request.widgets.len(),
            artifact: None,
        })
    }
}
