use crate::dashboard::widget::WidgetDescriptor;
use crate::dashboard::widgets::{Widget, ACCENT_BLUE};
use eframe::egui;

/// Drag feedback for one card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardVisual {
    /// The card is the one being dragged.
    pub lifted: bool,
    /// A dragged card is hovering over this one.
    pub drop_highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    OpenSettings,
    Remove,
    Export,
}

pub struct CardOutput {
    pub action: Option<CardAction>,
    /// Move handle; drag sensing only.
    pub handle: egui::Response,
}

/// Draw the card chrome and body filling `ui`'s max rect.
pub fn show(
    ui: &mut egui::Ui,
    descriptor: &WidgetDescriptor,
    body: &mut dyn Widget,
    visual: CardVisual,
) -> CardOutput {
    let rect = ui.max_rect();
    let mut action = None;
    let inner = egui::Frame::group(ui.style())
        .fill(ui.visuals().window_fill)
        .rounding(6.0)
        .show(ui, |ui| {
            ui.set_min_size(rect.size() - egui::vec2(14.0, 14.0));
            let handle = ui
                .horizontal(|ui| {
                    let handle = ui
                        .add(
                            egui::Label::new(egui::RichText::new("✥").weak())
                                .selectable(false)
                                .sense(egui::Sense::drag()),
                        )
                        .on_hover_cursor(egui::CursorIcon::Grab)
                        .on_hover_text("Drag to move");
                    ui.strong(&descriptor.title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.menu_button("⋯", |ui| {
                            if ui.button("Export").clicked() {
                                action = Some(CardAction::Export);
                                ui.close_menu();
                            }
                            if ui.button("Settings").clicked() {
                                action = Some(CardAction::OpenSettings);
                                ui.close_menu();
                            }
                            if ui.button("Remove widget").clicked() {
                                action = Some(CardAction::Remove);
                                ui.close_menu();
                            }
                        });
                    });
                    handle
                })
                .inner;
            ui.separator();
            body.render(ui);
            handle
        });

    let painter = ui.painter_at(rect);
    if visual.drop_highlight {
        painter.rect_stroke(rect.shrink(1.0), 6.0, egui::Stroke::new(2.0, ACCENT_BLUE));
    }
    if visual.lifted {
        painter.rect_filled(rect, 6.0, ui.visuals().extreme_bg_color.gamma_multiply(0.6));
    }

    CardOutput {
        action,
        handle: inner.inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::widget::seed_widgets;

    struct CountingBody(usize);

    impl Widget for CountingBody {
        fn render(&mut self, ui: &mut egui::Ui) {
            self.0 += 1;
            ui.label("body");
        }
    }

    #[test]
    fn card_renders_body_once_per_frame() {
        let descriptor = seed_widgets().remove(3);
        let mut body = CountingBody(0);
        egui::__run_test_ui(|ui| {
            let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(240.0, 200.0));
            ui.allocate_ui_at_rect(rect, |ui| {
                let out = show(ui, &descriptor, &mut body, CardVisual::default());
                assert!(out.action.is_none());
                assert!(!out.handle.dragged());
            });
        });
        assert_eq!(body.0, 1);
    }
}
