use super::Widget;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use rand::Rng;

const ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub product: String,
    pub revenue: f64,
    pub sales: u32,
}

impl TableRow {
    pub fn revenue_label(&self) -> String {
        format!("${:.2}", self.revenue)
    }
}

/// Placeholder product table.
pub struct TableWidget {
    rows: Vec<TableRow>,
}

impl TableWidget {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let rows = (1..=ROWS)
            .map(|i| TableRow {
                product: format!("Product {i}"),
                revenue: rng.gen_range(0.0..1000.0),
                sales: rng.gen_range(0..100),
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}

impl Default for TableWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TableWidget {
    fn render(&mut self, ui: &mut egui::Ui) {
        // TableBuilder ids derive from the parent, so every card needs its own scope
        ui.push_id(ui.next_auto_id(), |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::remainder())
                .column(Column::auto())
                .column(Column::auto())
                .header(18.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Product");
                    });
                    header.col(|ui| {
                        ui.strong("Revenue");
                    });
                    header.col(|ui| {
                        ui.strong("Sales");
                    });
                })
                .body(|mut body| {
                    for row in &self.rows {
                        body.row(18.0, |mut r| {
                            r.col(|ui| {
                                ui.label(&row.product);
                            });
                            r.col(|ui| {
                                ui.label(row.revenue_label());
                            });
                            r.col(|ui| {
                                ui.label(row.sales.to_string());
                            });
                        });
                    }
                });
        });
    }
}
