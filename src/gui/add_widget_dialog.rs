use crate::dashboard::widget::{
    ChartType, DataSourceKind, WidgetContent, WidgetDescriptor, WidgetId, WidgetKind, WidgetSize,
};
use eframe::egui;

/// Field values of the Add Widget form.
#[derive(Debug, Clone, PartialEq)]
pub struct AddWidgetForm {
    pub title: String,
    pub kind: WidgetKind,
    pub size: WidgetSize,
    pub chart_type: ChartType,
    pub data_source: DataSourceKind,
}

impl Default for AddWidgetForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: WidgetKind::Chart,
            size: WidgetSize::Md,
            chart_type: ChartType::Bar,
            data_source: DataSourceKind::Mock,
        }
    }
}

impl AddWidgetForm {
    pub fn shows_chart_type(&self) -> bool {
        self.kind == WidgetKind::Chart
    }

    /// Descriptor with a placeholder id; the store mints the real one.
    /// The title is kept as typed; trimming only decides emptiness.
    pub fn to_descriptor(&self) -> WidgetDescriptor {
        let content = WidgetContent::from_kind(self.kind, self.chart_type);
        let mut descriptor =
            WidgetDescriptor::new(WidgetId::default(), &self.title, content, self.size);
        descriptor.data_source = self.data_source;
        descriptor
    }
}

#[derive(Default)]
pub struct AddWidgetDialog {
    pub open: bool,
    form: AddWidgetForm,
    missing_title: bool,
}

impl AddWidgetDialog {
    pub fn open(&mut self) {
        self.open = true;
        self.missing_title = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.missing_title = false;
    }

    pub fn form(&self) -> &AddWidgetForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut AddWidgetForm {
        &mut self.form
    }

    pub fn shows_chart_type(&self) -> bool {
        self.form.shows_chart_type()
    }

    pub fn missing_title(&self) -> bool {
        self.missing_title
    }

    /// Emit the form as a descriptor and reset to defaults.
    ///
    /// Returns `None` and flags the title field when the title is blank.
    pub fn submit(&mut self) -> Option<WidgetDescriptor> {
        if self.form.title.trim().is_empty() {
            self.missing_title = true;
            return None;
        }
        let descriptor = self.form.to_descriptor();
        self.form = AddWidgetForm::default();
        self.close();
        Some(descriptor)
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> Option<WidgetDescriptor> {
        if !self.open {
            return None;
        }
        let mut submitted = None;
        let mut close = false;
        let mut open = self.open;
        egui::Window::new("Add New Widget")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("add_widget_form")
                    .num_columns(2)
                    .spacing([12.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Widget Title");
                        ui.text_edit_singleline(&mut self.form.title);
                        ui.end_row();

                        ui.label("Widget Type");
                        egui::ComboBox::from_id_source("add_widget_kind")
                            .selected_text(self.form.kind.label())
                            .show_ui(ui, |ui| {
                                for kind in WidgetKind::ALL {
                                    ui.selectable_value(&mut self.form.kind, kind, kind.label());
                                }
                            });
                        ui.end_row();

                        ui.label("Size");
                        egui::ComboBox::from_id_source("add_widget_size")
                            .selected_text(self.form.size.label())
                            .show_ui(ui, |ui| {
                                for size in WidgetSize::ALL {
                                    ui.selectable_value(&mut self.form.size, size, size.label());
                                }
                            });
                        ui.end_row();

                        if self.form.shows_chart_type() {
                            ui.label("Chart Type");
                            egui::ComboBox::from_id_source("add_widget_chart")
                                .selected_text(self.form.chart_type.label())
                                .show_ui(ui, |ui| {
                                    for chart in ChartType::ALL {
                                        ui.selectable_value(
                                            &mut self.form.chart_type,
                                            chart,
                                            chart.label(),
                                        );
                                    }
                                });
                            ui.end_row();
                        }

                        ui.label("Data Source");
                        egui::ComboBox::from_id_source("add_widget_source")
                            .selected_text(self.form.data_source.label())
                            .show_ui(ui, |ui| {
                                for source in DataSourceKind::ALL {
                                    ui.selectable_value(
                                        &mut self.form.data_source,
                                        source,
                                        source.label(),
                                    );
                                }
                            });
                        ui.end_row();
                    });
                if self.missing_title {
                    ui.colored_label(ui.visuals().error_fg_color, "A title is required");
                }
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Add Widget").clicked() {
                        submitted = self.submit();
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
        if submitted.is_some() {
            return submitted;
        }
        if close || !open {
            self.close();
        }
        None
    }
}
