use crate::toast_log::{read_last_lines, TOAST_LOG_FILE};
use eframe::egui;

const VISIBLE_LINES: usize = 50;

#[derive(Default)]
pub struct ToastLogDialog {
    pub open: bool,
    lines: Vec<String>,
}

impl ToastLogDialog {
    pub fn open(&mut self) {
        self.lines = read_last_lines(TOAST_LOG_FILE, VISIBLE_LINES);
        self.open = true;
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }
        let mut close = false;
        egui::Window::new("Notification Log")
            .resizable(true)
            .default_size((420.0, 240.0))
            .open(&mut self.open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .max_height(200.0)
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if self.lines.is_empty() {
                            ui.weak("No notifications yet");
                        }
                        for line in &self.lines {
                            ui.label(line);
                        }
                    });
                ui.horizontal(|ui| {
                    if ui.button("Refresh").clicked() {
                        self.lines = read_last_lines(TOAST_LOG_FILE, VISIBLE_LINES);
                    }
                    if ui.button("Open file").clicked() {
                        if let Err(e) = open::that(TOAST_LOG_FILE) {
                            tracing::warn!("failed to open {TOAST_LOG_FILE}: {e}");
                        }
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });
        if close {
            self.open = false;
        }
    }
}
