use super::{Widget, ACCENT_BLUE, ACCENT_PURPLE};
use crate::dashboard::widget::{ChartType, WidgetContent};
use eframe::egui;
use rand::Rng;

const SERIES_LEN: usize = 6;
const PLOT_HEIGHT: f32 = 128.0;

/// Placeholder chart painting a random series in the selected style.
pub struct ChartWidget {
    chart_type: ChartType,
    series: Vec<f32>,
}

impl ChartWidget {
    pub fn new(chart_type: ChartType) -> Self {
        let mut rng = rand::thread_rng();
        let series = (0..SERIES_LEN).map(|_| rng.gen_range(0.2..1.0)).collect();
        Self { chart_type, series }
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        match self.chart_type {
            ChartType::Bar => {
                let count = self.series.len().max(1);
                for (i, bar) in bar_rects(rect, &self.series).into_iter().enumerate() {
                    painter.rect_filled(bar, 2.0, gradient(i, count));
                }
            }
            ChartType::Line => {
                let points = series_points(rect, &self.series);
                painter.add(egui::Shape::line(
                    points.clone(),
                    egui::Stroke::new(2.0, ACCENT_BLUE),
                ));
                for p in points {
                    painter.circle_filled(p, 3.0, ACCENT_PURPLE);
                }
            }
            ChartType::Area => {
                let points = series_points(rect, &self.series);
                let fill = ACCENT_BLUE.gamma_multiply(0.35);
                for pair in points.windows(2) {
                    let quad = vec![
                        egui::pos2(pair[0].x, rect.bottom()),
                        pair[0],
                        pair[1],
                        egui::pos2(pair[1].x, rect.bottom()),
                    ];
                    painter.add(egui::Shape::convex_polygon(quad, fill, egui::Stroke::NONE));
                }
                painter.add(egui::Shape::line(points, egui::Stroke::new(2.0, ACCENT_BLUE)));
            }
            ChartType::Pie => paint_pie(painter, rect, &self.series),
        }
    }
}

impl Widget for ChartWidget {
    fn render(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{} Chart", self.chart_type.as_str()))
                    .small()
                    .weak(),
            );
            let height = ui.available_height().clamp(0.0, PLOT_HEIGHT);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), height),
                egui::Sense::hover(),
            );
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 4.0, ui.visuals().faint_bg_color);
            self.paint(&painter, rect.shrink(6.0));
        });
    }

    fn on_content_updated(&mut self, content: &WidgetContent) {
        if let Some(chart_type) = content.chart_type() {
            self.chart_type = chart_type;
        }
    }
}

fn gradient(i: usize, count: usize) -> egui::Color32 {
    let t = if count > 1 {
        i as f32 / (count - 1) as f32
    } else {
        0.0
    };
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    egui::Color32::from_rgb(
        lerp(ACCENT_BLUE.r(), ACCENT_PURPLE.r()),
        lerp(ACCENT_BLUE.g(), ACCENT_PURPLE.g()),
        lerp(ACCENT_BLUE.b(), ACCENT_PURPLE.b()),
    )
}

/// Bars for `series` (values in 0..=1) laid out left to right inside `rect`.
pub fn bar_rects(rect: egui::Rect, series: &[f32]) -> Vec<egui::Rect> {
    if series.is_empty() {
        return Vec::new();
    }
    let slot = rect.width() / series.len() as f32;
    let bar_width = slot * 0.7;
    series
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = rect.height() * v.clamp(0.0, 1.0);
            let x = rect.left() + slot * i as f32 + (slot - bar_width) / 2.0;
            egui::Rect::from_min_max(
                egui::pos2(x, rect.bottom() - h),
                egui::pos2(x + bar_width, rect.bottom()),
            )
        })
        .collect()
}

fn series_points(rect: egui::Rect, series: &[f32]) -> Vec<egui::Pos2> {
    let steps = (series.len().max(2) - 1) as f32;
    series
        .iter()
        .enumerate()
        .map(|(i, v)| {
            egui::pos2(
                rect.left() + rect.width() * i as f32 / steps,
                rect.bottom() - rect.height() * v.clamp(0.0, 1.0),
            )
        })
        .collect()
}

fn paint_pie(painter: &egui::Painter, rect: egui::Rect, series: &[f32]) {
    let total: f32 = series.iter().sum();
    if total <= 0.0 {
        return;
    }
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0;
    let mut start = -std::f32::consts::FRAC_PI_2;
    for (i, v) in series.iter().enumerate() {
        let sweep = std::f32::consts::TAU * v / total;
        let color = gradient(i, series.len());
        // fan of thin triangles keeps every shape convex
        let steps = ((sweep / 0.1).ceil() as usize).max(1);
        for s in 0..steps {
            let a0 = start + sweep * s as f32 / steps as f32;
            let a1 = start + sweep * (s + 1) as f32 / steps as f32;
            let p0 = center + radius * egui::vec2(a0.cos(), a0.sin());
            let p1 = center + radius * egui::vec2(a1.cos(), a1.sin());
            painter.add(egui::Shape::convex_polygon(
                vec![center, p0, p1],
                color,
                egui::Stroke::NONE,
            ));
        }
        start += sweep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_stay_inside_plot_area() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(120.0, 60.0));
        let bars = bar_rects(rect, &[0.5, 1.0, 1.7]);
        assert_eq!(bars.len(), 3);
        for bar in &bars {
            assert!(rect.contains_rect(*bar));
            assert_eq!(bar.bottom(), rect.bottom());
        }
        assert_eq!(bars[0].height(), 30.0);
        assert_eq!(bars[2].height(), 60.0);
    }

    #[test]
    fn chart_type_follows_content_updates() {
        let mut chart = ChartWidget::new(ChartType::Bar);
        chart.on_content_updated(&WidgetContent::Chart {
            chart_type: ChartType::Area,
        });
        assert_eq!(chart.chart_type(), ChartType::Area);
        assert_eq!(chart.series.len(), SERIES_LEN);
    }
}
