use crate::common::job::{BackgroundJob, JobStatus};
use crate::dashboard::widget::WidgetDescriptor;
use crate::export::{
    CsvOptions, ExportBackend, ExportFormat, ExportOptions, ExportReport, ExportRequest,
    PaperSize, PdfOptions, SimulatedExportBackend,
};
use crate::notice::NoticeQueue;
use eframe::egui;
use std::sync::Arc;

pub struct ExportDialog {
    pub open: bool,
    pub format: ExportFormat,
    pub pdf: PdfOptions,
    pub csv: CsvOptions,
    backend: Arc<dyn ExportBackend>,
    job: Option<BackgroundJob<ExportReport>>,
}

impl Default for ExportDialog {
    fn default() -> Self {
        Self::new(Arc::new(SimulatedExportBackend::default()))
    }
}

impl ExportDialog {
    pub fn new(backend: Arc<dyn ExportBackend>) -> Self {
        Self {
            open: false,
            format: ExportFormat::Pdf,
            pdf: PdfOptions::default(),
            csv: CsvOptions::default(),
            backend,
            job: None,
        }
    }

    pub fn set_backend(&mut self, backend: Arc<dyn ExportBackend>) {
        self.backend = backend;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dialog, cancelling any export in flight.
    pub fn close(&mut self) {
        self.open = false;
        if let Some(job) = self.job.take() {
            tracing::info!(job = job.name(), "export cancelled");
            job.cancel();
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.job.is_some()
    }

    pub fn options(&self) -> ExportOptions {
        match self.format {
            ExportFormat::Pdf => ExportOptions::Pdf(self.pdf),
            ExportFormat::Csv => ExportOptions::Csv(self.csv),
        }
    }

    /// Start an export of `widgets` with the options of the active tab.
    pub fn start_export(&mut self, widgets: &[WidgetDescriptor], notices: &mut NoticeQueue) {
        if self.job.is_some() {
            return;
        }
        let request = ExportRequest {
            options: self.options(),
            widgets: widgets.to_vec(),
        };
        let label = self.format.label();
        let backend = Arc::clone(&self.backend);
        match BackgroundJob::spawn(&format!("export-{}", label.to_lowercase()), move |cancel| {
            backend.export(&request, cancel)
        }) {
            Ok(job) => {
                notices.info(format!("Exporting as {label}..."));
                self.job = Some(job);
            }
            Err(e) => {
                tracing::error!("failed to start export: {e}");
                notices.error(format!("Export failed: {e}"));
            }
        }
    }

    /// Check on the running export. Returns the report once it completes.
    pub fn poll(&mut self, notices: &mut NoticeQueue) -> Option<ExportReport> {
        let job = self.job.as_mut()?;
        match job.poll() {
            JobStatus::Running => None,
            JobStatus::Cancelled => {
                self.job = None;
                None
            }
            JobStatus::Finished(Ok(report)) => {
                self.job = None;
                tracing::info!(format = report.format.label(), widgets = report.widget_count, "export complete");
                notices.success(format!("{} export complete!", report.format.label()));
                self.open = false;
                Some(report)
            }
            JobStatus::Finished(Err(e)) => {
                self.job = None;
                tracing::error!("export failed: {e:#}");
                notices.error(format!("Export failed: {e}"));
                None
            }
        }
    }

    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        widgets: &[WidgetDescriptor],
        notices: &mut NoticeQueue,
    ) {
        if !self.open {
            return;
        }
        let mut open = self.open;
        let mut close = false;
        let mut start = false;
        let busy = self.is_exporting();
        egui::Window::new("Export Dashboard")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.format, ExportFormat::Pdf, "PDF");
                    ui.selectable_value(&mut self.format, ExportFormat::Csv, "CSV");
                });
                ui.separator();
                ui.add_enabled_ui(!busy, |ui| match self.format {
                    ExportFormat::Pdf => {
                        ui.checkbox(&mut self.pdf.all_widgets, "Include all widgets");
                        ui.checkbox(&mut self.pdf.include_data_tables, "Include data tables");
                        ui.horizontal(|ui| {
                            ui.label("Paper size");
                            ui.radio_value(&mut self.pdf.paper_size, PaperSize::A4, PaperSize::A4.label());
                            ui.radio_value(
                                &mut self.pdf.paper_size,
                                PaperSize::Letter,
                                PaperSize::Letter.label(),
                            );
                        });
                    }
                    ExportFormat::Csv => {
                        ui.checkbox(&mut self.csv.all_data, "Export all data");
                        ui.checkbox(&mut self.csv.include_headers, "Include column headers");
                    }
                });
                ui.separator();
                ui.horizontal(|ui| {
                    if busy {
                        ui.add(egui::Spinner::new());
                        ui.label("Exporting...");
                    } else if ui
                        .button(format!("Export as {}", self.format.label()))
                        .clicked()
                    {
                        start = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
        if start {
            self.start_export(widgets, notices);
        }
        if close || !open {
            self.close();
        }
    }
}
