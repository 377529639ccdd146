use crate::settings::Settings;
use eframe::egui;

/// Editable copy of the application settings shown on the Settings tab.
#[derive(Default)]
pub struct SettingsEditor {
    debug_logging: bool,
    log_file: String,
    enable_toasts: bool,
    toast_duration: f32,
    export_delay_ms: u64,
    connect_delay_ms: u64,
    window_w: i32,
    window_h: i32,
}

impl SettingsEditor {
    pub fn new(settings: &Settings) -> Self {
        Self {
            debug_logging: settings.debug_logging,
            log_file: settings.log_file.clone().unwrap_or_default(),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
            export_delay_ms: settings.export_delay_ms,
            connect_delay_ms: settings.connect_delay_ms,
            window_w: settings.window_size.unwrap_or((1200, 860)).0,
            window_h: settings.window_size.unwrap_or((1200, 860)).1,
        }
    }

    pub fn to_settings(&self) -> Settings {
        Settings {
            debug_logging: self.debug_logging,
            log_file: if self.log_file.trim().is_empty() {
                None
            } else {
                Some(self.log_file.trim().to_string())
            },
            enable_toasts: self.enable_toasts,
            toast_duration: self.toast_duration.max(0.5),
            export_delay_ms: self.export_delay_ms,
            connect_delay_ms: self.connect_delay_ms,
            window_size: Some((self.window_w, self.window_h)),
        }
    }

    /// Draw the editor. Returns the new settings when the user saves.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<Settings> {
        let mut saved = None;
        egui::Grid::new("app_settings")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Debug logging");
                egui::ComboBox::from_id_source("settings_debug_logging")
                    .selected_text(if self.debug_logging {
                        "Enabled"
                    } else {
                        "Disabled"
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.debug_logging, false, "Disabled");
                        ui.selectable_value(&mut self.debug_logging, true, "Enabled");
                    });
                ui.end_row();

                ui.label("Log file");
                ui.add(egui::TextEdit::singleline(&mut self.log_file).hint_text("stderr"));
                ui.end_row();

                ui.label("Notifications");
                ui.checkbox(&mut self.enable_toasts, "Show toasts");
                ui.end_row();

                ui.label("Toast duration (s)");
                ui.add(egui::DragValue::new(&mut self.toast_duration).speed(0.1).clamp_range(0.5..=30.0));
                ui.end_row();

                ui.label("Export delay (ms)");
                ui.add(egui::DragValue::new(&mut self.export_delay_ms).speed(10.0));
                ui.end_row();

                ui.label("Connect delay (ms)");
                ui.add(egui::DragValue::new(&mut self.connect_delay_ms).speed(10.0));
                ui.end_row();

                ui.label("Window size");
                ui.horizontal(|ui| {
                    ui.add(egui::DragValue::new(&mut self.window_w).clamp_range(640..=7680));
                    ui.label("x");
                    ui.add(egui::DragValue::new(&mut self.window_h).clamp_range(480..=4320));
                });
                ui.end_row();
            });
        ui.weak("Logging and window changes apply on next start.");
        if ui.button("Save Settings").clicked() {
            saved = Some(self.to_settings());
        }
        saved
    }
}
