use super::{Widget, ACCENT_BLUE};
use eframe::egui;

/// Single headline figure with a comparison line.
pub struct MetricWidget {
    pub value: String,
    pub comparison: String,
}

impl Default for MetricWidget {
    fn default() -> Self {
        Self {
            value: "87%".into(),
            comparison: "Compared to 74% last month".into(),
        }
    }
}

impl Widget for MetricWidget {
    fn render(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height().min(160.0) / 4.0);
            ui.label(
                egui::RichText::new(&self.value)
                    .size(36.0)
                    .strong()
                    .color(ACCENT_BLUE),
            );
            ui.label(egui::RichText::new(&self.comparison).small().weak());
        });
    }
}
