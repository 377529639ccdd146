use crate::dashboard::widget::{
    ChartType, DataSourceKind, WidgetContent, WidgetDescriptor, WidgetKind, WidgetSize,
};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Data,
    Appearance,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [
        SettingsTab::General,
        SettingsTab::Data,
        SettingsTab::Appearance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Data => "Data",
            SettingsTab::Appearance => "Appearance",
        }
    }
}

/// Working copy of the widget being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    pub widget: WidgetDescriptor,
    pub tab: SettingsTab,
    /// Draft only, never written back to the descriptor.
    pub api_endpoint: String,
    /// Draft only, never written back to the descriptor.
    pub sheets_url: String,
}

impl SettingsForm {
    pub fn new(widget: &WidgetDescriptor) -> Self {
        Self {
            widget: widget.clone(),
            tab: SettingsTab::General,
            api_endpoint: String::new(),
            sheets_url: String::new(),
        }
    }

    pub fn shows_chart_type(&self) -> bool {
        self.widget.kind() == WidgetKind::Chart
    }

    pub fn shows_api_endpoint(&self) -> bool {
        self.widget.data_source == DataSourceKind::Api
    }

    pub fn shows_sheets_url(&self) -> bool {
        self.widget.data_source == DataSourceKind::Sheets
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        if let WidgetContent::Chart { chart_type: current } = &mut self.widget.content {
            *current = chart_type;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsPanelResult {
    None,
    Saved(WidgetDescriptor),
    Cancelled,
}

/// Side panel editing one widget at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsPanel {
    #[default]
    Closed,
    Editing(SettingsForm),
}

impl SettingsPanel {
    pub fn open(&mut self, widget: &WidgetDescriptor) {
        tracing::debug!(id = %widget.id, "editing widget settings");
        *self = SettingsPanel::Editing(SettingsForm::new(widget));
    }

    pub fn close(&mut self) {
        *self = SettingsPanel::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, SettingsPanel::Editing(_))
    }

    pub fn form(&self) -> Option<&SettingsForm> {
        match self {
            SettingsPanel::Editing(form) => Some(form),
            SettingsPanel::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut SettingsForm> {
        match self {
            SettingsPanel::Editing(form) => Some(form),
            SettingsPanel::Closed => None,
        }
    }

    /// Close the panel and hand back the edited descriptor.
    pub fn save(&mut self) -> Option<WidgetDescriptor> {
        match std::mem::take(self) {
            SettingsPanel::Editing(form) => Some(form.widget),
            SettingsPanel::Closed => None,
        }
    }

    pub fn shows_chart_type(&self) -> bool {
        self.form().map_or(false, SettingsForm::shows_chart_type)
    }

    pub fn shows_api_endpoint(&self) -> bool {
        self.form().map_or(false, SettingsForm::shows_api_endpoint)
    }

    pub fn shows_sheets_url(&self) -> bool {
        self.form().map_or(false, SettingsForm::shows_sheets_url)
    }

    /// Draw as a right side panel. Call before the central panel.
    pub fn ui(&mut self, ctx: &egui::Context) -> SettingsPanelResult {
        let SettingsPanel::Editing(form) = self else {
            return SettingsPanelResult::None;
        };
        let mut result = SettingsPanelResult::None;
        egui::SidePanel::right("widget_settings_panel")
            .resizable(false)
            .exact_width(300.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Widget Settings");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            result = SettingsPanelResult::Cancelled;
                        }
                    });
                });
                ui.separator();
                ui.horizontal(|ui| {
                    for tab in SettingsTab::ALL {
                        ui.selectable_value(&mut form.tab, tab, tab.label());
                    }
                });
                ui.add_space(6.0);
                match form.tab {
                    SettingsTab::General => general_tab(ui, form),
                    SettingsTab::Data => data_tab(ui, form),
                    SettingsTab::Appearance => appearance_tab(ui, form),
                }
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    if ui.button("Save Changes").clicked() {
                        result = SettingsPanelResult::Saved(form.widget.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        result = SettingsPanelResult::Cancelled;
                    }
                });
            });
        if result != SettingsPanelResult::None {
            self.close();
        }
        result
    }
}

fn general_tab(ui: &mut egui::Ui, form: &mut SettingsForm) {
    ui.label("Widget Title");
    ui.text_edit_singleline(&mut form.widget.title);
    ui.label("Size");
    egui::ComboBox::from_id_source("settings_size")
        .selected_text(form.widget.size.label())
        .show_ui(ui, |ui| {
            for size in WidgetSize::ALL {
                ui.selectable_value(&mut form.widget.size, size, size.label());
            }
        });
}

fn data_tab(ui: &mut egui::Ui, form: &mut SettingsForm) {
    ui.label("Data Source");
    egui::ComboBox::from_id_source("settings_source")
        .selected_text(form.widget.data_source.label())
        .show_ui(ui, |ui| {
            for source in DataSourceKind::ALL {
                ui.selectable_value(&mut form.widget.data_source, source, source.label());
            }
        });
    if form.shows_api_endpoint() {
        ui.label("API Endpoint");
        ui.add(egui::TextEdit::singleline(&mut form.api_endpoint).hint_text("https://"));
    }
    if form.shows_sheets_url() {
        ui.label("Google Sheets URL");
        ui.add(egui::TextEdit::singleline(&mut form.sheets_url).hint_text("https://docs.google.com/"));
    }
}

fn appearance_tab(ui: &mut egui::Ui, form: &mut SettingsForm) {
    let Some(mut chart_type) = form.widget.chart_type() else {
        ui.weak("No appearance options for this widget type");
        return;
    };
    ui.label("Chart Type");
    egui::ComboBox::from_id_source("settings_chart")
        .selected_text(chart_type.label())
        .show_ui(ui, |ui| {
            for chart in ChartType::ALL {
                ui.selectable_value(&mut chart_type, chart, chart.label());
            }
        });
    form.set_chart_type(chart_type);
}
