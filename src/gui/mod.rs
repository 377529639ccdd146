pub mod add_widget_dialog;
pub mod confirmation_modal;
pub mod data_source_form;
pub mod export_dialog;
pub mod settings_panel;
pub mod toast_log_dialog;

pub use add_widget_dialog::{AddWidgetDialog, AddWidgetForm};
pub use confirmation_modal::{ConfirmationModal, ConfirmationResult, DestructiveAction};
pub use data_source_form::{DataSourceForm, DataSourceTab};
pub use export_dialog::ExportDialog;
pub use settings_panel::{SettingsForm, SettingsPanel, SettingsPanelResult, SettingsTab};
pub use toast_log_dialog::ToastLogDialog;

use crate::dashboard::{Dashboard, DashboardEvent, WidgetStore};
use crate::data_source::SimulatedConnector;
use crate::export::SimulatedExportBackend;
use crate::notice::{NoticeKind, NoticeQueue};
use crate::settings::Settings;
use crate::settings_editor::SettingsEditor;
use crate::toast_log::append_toast_log;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::sync::Arc;
use std::time::Duration;

fn push_toast(toasts: &mut Toasts, toast: Toast) {
    append_toast_log(toast.text.text());
    toasts.add(toast);
}

fn toast_kind(kind: NoticeKind) -> ToastKind {
    match kind {
        NoticeKind::Info => ToastKind::Info,
        NoticeKind::Success => ToastKind::Success,
        NoticeKind::Error => ToastKind::Error,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Dashboard,
    DataSources,
    Settings,
}

impl AppTab {
    pub const ALL: [AppTab; 3] = [AppTab::Dashboard, AppTab::DataSources, AppTab::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            AppTab::Dashboard => "Dashboard",
            AppTab::DataSources => "Data Sources",
            AppTab::Settings => "Settings",
        }
    }
}

pub struct DashForgeApp {
    pub dashboard: Dashboard,
    pub data_sources: DataSourceForm,
    tab: AppTab,
    notices: NoticeQueue,
    toasts: Toasts,
    toast_log_dialog: ToastLogDialog,
    confirm: ConfirmationModal,
    settings_editor: SettingsEditor,
    settings_path: String,
    window_size: (i32, i32),
    pub enable_toasts: bool,
    pub toast_duration: f32,
}

impl DashForgeApp {
    pub fn new(settings: &Settings, settings_path: &str) -> Self {
        let dashboard = Dashboard::new(WidgetStore::seeded())
            .with_export_backend(Arc::new(SimulatedExportBackend::new(settings.export_delay())));
        let data_sources = DataSourceForm::new(Arc::new(SimulatedConnector::new(settings.connect_delay())));
        let (w, h) = settings.window_size();
        Self {
            dashboard,
            data_sources,
            tab: AppTab::Dashboard,
            notices: NoticeQueue::default(),
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            toast_log_dialog: ToastLogDialog::default(),
            confirm: ConfirmationModal::default(),
            settings_editor: SettingsEditor::new(settings),
            settings_path: settings_path.to_string(),
            window_size: (w as i32, h as i32),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
        }
    }

    pub fn tab(&self) -> AppTab {
        self.tab
    }

    /// Switch tabs. Leaving Data Sources abandons any pending connection.
    pub fn set_tab(&mut self, tab: AppTab) {
        if self.tab == tab {
            return;
        }
        if self.tab == AppTab::DataSources {
            self.data_sources.on_hidden();
        }
        tracing::debug!(from = ?self.tab, to = ?tab, "tab changed");
        self.tab = tab;
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    /// Ask for confirmation before resetting the dashboard.
    pub fn request_reset(&mut self) {
        self.confirm.open_for(DestructiveAction::ResetDashboard);
    }

    pub fn confirm_open(&self) -> bool {
        self.confirm.is_open()
    }

    pub fn handle_confirmation(&mut self, result: ConfirmationResult) {
        if result != ConfirmationResult::Confirmed {
            return;
        }
        if let Some(DestructiveAction::ResetDashboard) = self.confirm.pending() {
            self.dashboard.handle(DashboardEvent::Reset, &mut self.notices);
        }
    }

    /// Persist new application settings and apply what can change live.
    pub fn apply_settings(&mut self, settings: Settings) {
        if let Err(e) = settings.save(&self.settings_path) {
            tracing::error!("failed to save settings: {e}");
            self.notices.error(format!("Failed to save settings: {e}"));
            return;
        }
        self.enable_toasts = settings.enable_toasts;
        self.toast_duration = settings.toast_duration;
        self.dashboard
            .export_dialog
            .set_backend(Arc::new(SimulatedExportBackend::new(settings.export_delay())));
        self.data_sources
            .set_connector(Arc::new(SimulatedConnector::new(settings.connect_delay())));
        self.settings_editor = SettingsEditor::new(&settings);
        tracing::info!(path = %self.settings_path, "settings saved");
        self.notices.success("Settings saved");
    }

    fn flush_notices(&mut self) {
        for notice in self.notices.drain() {
            if self.enable_toasts {
                push_toast(
                    &mut self.toasts,
                    Toast {
                        text: notice.text.into(),
                        kind: toast_kind(notice.kind),
                        options: ToastOptions::default()
                            .duration_in_seconds(self.toast_duration as f64),
                    },
                );
            } else {
                append_toast_log(&notice.text);
            }
        }
    }

    fn header_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Dashboard Generator");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save Dashboard").clicked() {
                    self.dashboard.handle(DashboardEvent::Save, &mut self.notices);
                }
                if ui.button("Notification Log").clicked() {
                    self.toast_log_dialog.open();
                }
            });
        });
        ui.horizontal(|ui| {
            for tab in AppTab::ALL {
                if ui.selectable_label(self.tab == tab, tab.label()).clicked() {
                    self.set_tab(tab);
                }
            }
        });
    }

    fn settings_tab_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Application Settings");
        if let Some(settings) = self.settings_editor.ui(ui) {
            self.apply_settings(settings);
        }
        ui.add_space(16.0);
        ui.separator();
        ui.heading("Dashboard");
        ui.label("Restore the default widgets. Added and edited widgets are discarded.");
        if ui.button("Reset Dashboard").clicked() {
            self.request_reset();
        }
    }
}

impl eframe::App for DashForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.window_size = (rect.width() as i32, rect.height() as i32);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| self.header_ui(ui));
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(format!("{} widgets", self.dashboard.store.len()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("Dashboard Generator");
                });
            });
        });

        if self.tab == AppTab::Dashboard {
            self.dashboard.side_panel(ctx, &mut self.notices);
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            AppTab::Dashboard => {
                self.dashboard.toolbar_ui(ui, &mut self.notices);
                ui.add_space(8.0);
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| self.dashboard.ui(ui, &mut self.notices));
            }
            AppTab::DataSources => self.data_sources.ui(ui, &mut self.notices),
            AppTab::Settings => self.settings_tab_ui(ui),
        });

        self.dashboard.windows(ctx, &mut self.notices);
        self.data_sources.poll(&mut self.notices);
        if self.data_sources.is_connecting() || self.dashboard.is_dragging() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }

        let result = self.confirm.ui(ctx);
        self.handle_confirmation(result);
        self.toast_log_dialog.ui(ctx);

        self.flush_notices();
        self.toasts.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.data_sources.on_hidden();
        self.dashboard.export_dialog.close();
        match Settings::load(&self.settings_path) {
            Ok(mut settings) => {
                settings.window_size = Some(self.window_size);
                if let Err(e) = settings.save(&self.settings_path) {
                    tracing::warn!("failed to store window size: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to read settings on exit: {e}"),
        }
    }
}
