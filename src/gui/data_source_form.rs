use crate::common::file_dialog;
use crate::common::job::{BackgroundJob, JobStatus};
use crate::data_source::{
    ConnectionReport, ConnectionRequest, CsvFile, DataSourceConnector, SimulatedConnector,
};
use crate::notice::NoticeQueue;
use eframe::egui;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceTab {
    #[default]
    Api,
    Sheets,
    Csv,
}

impl DataSourceTab {
    pub const ALL: [DataSourceTab; 3] = [DataSourceTab::Api, DataSourceTab::Sheets, DataSourceTab::Csv];

    pub fn label(&self) -> &'static str {
        match self {
            DataSourceTab::Api => "REST API",
            DataSourceTab::Sheets => "Google Sheets",
            DataSourceTab::Csv => "CSV Upload",
        }
    }
}

/// Connection forms shown on the Data Sources tab. Not linked to widgets.
pub struct DataSourceForm {
    pub tab: DataSourceTab,
    pub api_url: String,
    pub api_key: String,
    pub sheets_url: String,
    pub csv_path: String,
    csv_file: Option<CsvFile>,
    connector: Arc<dyn DataSourceConnector>,
    job: Option<BackgroundJob<ConnectionReport>>,
}

impl Default for DataSourceForm {
    fn default() -> Self {
        Self::new(Arc::new(SimulatedConnector::default()))
    }
}

impl DataSourceForm {
    pub fn new(connector: Arc<dyn DataSourceConnector>) -> Self {
        Self {
            tab: DataSourceTab::Api,
            api_url: String::new(),
            api_key: String::new(),
            sheets_url: String::new(),
            csv_path: String::new(),
            csv_file: None,
            connector,
            job: None,
        }
    }

    pub fn set_connector(&mut self, connector: Arc<dyn DataSourceConnector>) {
        self.connector = connector;
    }

    pub fn csv_file(&self) -> Option<&CsvFile> {
        self.csv_file.as_ref()
    }

    pub fn is_connecting(&self) -> bool {
        self.job.is_some()
    }

    /// Record the CSV file at `path`. Unreadable paths clear the selection.
    pub fn select_csv(&mut self, path: impl AsRef<Path>, notices: &mut NoticeQueue) {
        let path = path.as_ref();
        self.csv_path = path.display().to_string();
        match CsvFile::from_path(path) {
            Ok(file) => {
                tracing::debug!(name = %file.name, bytes = file.size_bytes, "csv file selected");
                self.csv_file = Some(file);
            }
            Err(e) => {
                tracing::warn!("csv selection failed: {e:#}");
                self.csv_file = None;
                notices.error(format!("Cannot use file: {e}"));
            }
        }
    }

    /// Request for the active tab, or the message explaining what is missing.
    pub fn request(&self) -> Result<ConnectionRequest, &'static str> {
        let request = match self.tab {
            DataSourceTab::Api => ConnectionRequest::api(&self.api_url, &self.api_key),
            DataSourceTab::Sheets => ConnectionRequest::sheets(&self.sheets_url),
            // the selection only counts while the path field still names it
            DataSourceTab::Csv => match &self.csv_file {
                Some(file) if file.path == Path::new(self.csv_path.trim()) => {
                    ConnectionRequest::Csv(file.clone())
                }
                _ => return Err("Please select a CSV file"),
            },
        };
        request.validate()?;
        Ok(request)
    }

    /// Validate the active tab and start the connection in the background.
    pub fn submit(&mut self, notices: &mut NoticeQueue) {
        if self.job.is_some() {
            return;
        }
        let request = match self.request() {
            Ok(request) => request,
            Err(msg) => {
                notices.error(msg);
                return;
            }
        };
        let connector = Arc::clone(&self.connector);
        match BackgroundJob::spawn("data-source", move |cancel| {
            connector.connect(&request, cancel)
        }) {
            Ok(job) => self.job = Some(job),
            Err(e) => {
                tracing::error!("failed to start connection: {e}");
                notices.error(format!("Connection failed: {e}"));
            }
        }
    }

    pub fn poll(&mut self, notices: &mut NoticeQueue) -> Option<ConnectionReport> {
        let job = self.job.as_mut()?;
        match job.poll() {
            JobStatus::Running => None,
            JobStatus::Cancelled => {
                self.job = None;
                None
            }
            JobStatus::Finished(Ok(report)) => {
                self.job = None;
                notices.success(report.message.clone());
                Some(report)
            }
            JobStatus::Finished(Err(e)) => {
                self.job = None;
                tracing::error!("connection failed: {e:#}");
                notices.error(format!("Connection failed: {e}"));
                None
            }
        }
    }

    /// The tab is no longer visible; abandon any pending request.
    pub fn on_hidden(&mut self) {
        if let Some(job) = self.job.take() {
            tracing::info!(job = job.name(), "connection abandoned");
            job.cancel();
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, notices: &mut NoticeQueue) {
        ui.heading("Connect Data Source");
        ui.horizontal(|ui| {
            for tab in DataSourceTab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.label());
            }
        });
        ui.separator();
        let busy = self.is_connecting();
        let mut submit = false;
        ui.add_enabled_ui(!busy, |ui| match self.tab {
            DataSourceTab::Api => {
                ui.label("API URL");
                ui.add(egui::TextEdit::singleline(&mut self.api_url).hint_text("https://api.example.com/data"));
                ui.label("API Key (optional)");
                ui.add(egui::TextEdit::singleline(&mut self.api_key).password(true));
                submit = ui.button("Connect API").clicked();
            }
            DataSourceTab::Sheets => {
                ui.label("Google Sheets URL");
                ui.add(
                    egui::TextEdit::singleline(&mut self.sheets_url)
                        .hint_text("https://docs.google.com/spreadsheets/d/..."),
                );
                submit = ui.button("Connect Sheet").clicked();
            }
            DataSourceTab::Csv => {
                ui.label("CSV File");
                ui.horizontal(|ui| {
                    let edit = ui.text_edit_singleline(&mut self.csv_path);
                    if edit.changed() {
                        self.csv_file = None;
                    }
                    if edit.lost_focus() && !self.csv_path.trim().is_empty() {
                        let path = self.csv_path.trim().to_string();
                        self.select_csv(path, notices);
                    }
                    if file_dialog::native_picker_available() && ui.button("Browse...").clicked() {
                        if let Some(path) = file_dialog::pick_csv_file() {
                            self.select_csv(path, notices);
                        }
                    }
                });
                if let Some(file) = &self.csv_file {
                    ui.weak(format!("{} ({} bytes)", file.name, file.size_bytes));
                }
                submit = ui.button("Upload CSV").clicked();
            }
        });
        if busy {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Connecting...");
            });
        }
        if submit {
            self.submit(notices);
        }
    }
}
