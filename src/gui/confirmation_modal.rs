use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResult {
    None,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    ResetDashboard,
}

impl DestructiveAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::ResetDashboard => "Reset the dashboard to its default widgets",
        }
    }

    pub fn warning(self) -> &'static str {
        match self {
            Self::ResetDashboard => "All added and edited widgets will be lost.",
        }
    }

    pub fn confirm_label(self) -> &'static str {
        match self {
            Self::ResetDashboard => "Reset",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmationModal {
    open: bool,
    pending: Option<DestructiveAction>,
    title: String,
    description: String,
    warning: String,
    confirm_label: String,
}

impl Default for ConfirmationModal {
    fn default() -> Self {
        Self {
            open: false,
            pending: None,
            title: "Are you sure?".into(),
            description: String::new(),
            warning: String::new(),
            confirm_label: "Confirm".into(),
        }
    }
}

impl ConfirmationModal {
    pub fn open_for(&mut self, kind: DestructiveAction) {
        self.description = kind.label().into();
        self.warning = kind.warning().into();
        self.confirm_label = kind.confirm_label().into();
        self.pending = Some(kind);
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn pending(&self) -> Option<DestructiveAction> {
        self.pending
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ConfirmationResult {
        if !self.open {
            return ConfirmationResult::None;
        }
        let mut result = ConfirmationResult::None;
        let mut open = true;
        egui::Window::new(self.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                if !self.description.is_empty() {
                    ui.label(&self.description);
                }
                ui.colored_label(egui::Color32::YELLOW, &self.warning);
                ui.horizontal(|ui| {
                    if ui.button(&self.confirm_label).clicked() {
                        result = ConfirmationResult::Confirmed;
                    }
                    if ui.button("Cancel").clicked() {
                        result = ConfirmationResult::Cancelled;
                    }
                });
            });
        if !open && result == ConfirmationResult::None {
            result = ConfirmationResult::Cancelled;
        }
        if result != ConfirmationResult::None {
            self.open = false;
        }
        result
    }
}
