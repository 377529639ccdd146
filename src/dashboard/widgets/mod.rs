use crate::dashboard::widget::WidgetContent;
use eframe::egui;

mod chart;
mod metric;
mod table;

pub use chart::{bar_rects, ChartWidget};
pub use metric::MetricWidget;
pub use table::{TableRow, TableWidget};

pub(crate) const ACCENT_BLUE: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
pub(crate) const ACCENT_PURPLE: egui::Color32 = egui::Color32::from_rgb(139, 92, 246);

/// Body renderer for one widget card.
///
/// Instances live as long as their widget so mock data stays stable between
/// frames.
pub trait Widget: Send {
    fn render(&mut self, ui: &mut egui::Ui);

    /// Called when the widget's content changed without changing its kind.
    fn on_content_updated(&mut self, _content: &WidgetContent) {}
}

/// Type-based content selector.
pub fn create(content: &WidgetContent) -> Box<dyn Widget> {
    match content {
        WidgetContent::Chart { chart_type } => Box::new(ChartWidget::new(*chart_type)),
        WidgetContent::Table => Box::new(TableWidget::new()),
        WidgetContent::Metric => Box::new(MetricWidget::default()),
    }
}
