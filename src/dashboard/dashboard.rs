use crate::dashboard::card::{self, CardAction, CardVisual};
use crate::dashboard::drag::{DragPayload, DragTracker, DropTargetId};
use crate::dashboard::layout::{grid_height, place_widgets, placement_rect, row_count, ROW_HEIGHT};
use crate::dashboard::store::WidgetStore;
use crate::dashboard::widget::{WidgetContent, WidgetDescriptor, WidgetId};
use crate::dashboard::widgets::{self, Widget};
use crate::export::ExportBackend;
use crate::gui::add_widget_dialog::AddWidgetDialog;
use crate::gui::export_dialog::ExportDialog;
use crate::gui::settings_panel::{SettingsPanel, SettingsPanelResult};
use crate::notice::NoticeQueue;
use eframe::egui;
use std::collections::HashMap;
use std::sync::Arc;

/// Everything the user can do to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    OpenAddWidget,
    AddWidget(WidgetDescriptor),
    OpenSettings(WidgetId),
    UpdateWidget(WidgetDescriptor),
    RemoveWidget(WidgetId),
    Reorder {
        payload: DragPayload,
        target: DropTargetId,
    },
    OpenExport,
    /// Export from a single widget's menu.
    ExportWidget(WidgetId),
    Save,
    Reset,
}

struct WidgetRuntime {
    content: WidgetContent,
    body: Box<dyn Widget>,
    /// Move handle as laid out in the last frame.
    handle_rect: egui::Rect,
}

/// Widget grid together with the dialogs that edit it.
pub struct Dashboard {
    pub store: WidgetStore,
    pub add_dialog: AddWidgetDialog,
    pub settings_panel: SettingsPanel,
    pub export_dialog: ExportDialog,
    drag: DragTracker,
    runtime: HashMap<WidgetId, WidgetRuntime>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(WidgetStore::seeded())
    }
}

impl Dashboard {
    pub fn new(store: WidgetStore) -> Self {
        let mut dashboard = Self {
            store,
            add_dialog: AddWidgetDialog::default(),
            settings_panel: SettingsPanel::default(),
            export_dialog: ExportDialog::default(),
            drag: DragTracker::default(),
            runtime: HashMap::new(),
        };
        dashboard.sync_runtime();
        dashboard
    }

    pub fn with_export_backend(mut self, backend: Arc<dyn ExportBackend>) -> Self {
        self.export_dialog.set_backend(backend);
        self
    }

    /// True while background work started from the dashboard is running.
    pub fn is_busy(&self) -> bool {
        self.export_dialog.is_exporting()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging()
    }

    pub fn handle(&mut self, event: DashboardEvent, notices: &mut NoticeQueue) {
        tracing::trace!(?event, "dashboard event");
        match event {
            DashboardEvent::OpenAddWidget => self.add_dialog.open(),
            DashboardEvent::AddWidget(descriptor) => {
                self.store.add(descriptor, notices);
            }
            DashboardEvent::OpenSettings(id) => match self.store.get(&id) {
                Some(descriptor) => self.settings_panel.open(descriptor),
                None => tracing::warn!(id = %id, "settings requested for unknown widget"),
            },
            DashboardEvent::UpdateWidget(descriptor) => {
                self.store.update(descriptor, notices);
            }
            DashboardEvent::RemoveWidget(id) => self.store.remove(&id, notices),
            DashboardEvent::Reorder { payload, target } => {
                self.store.reorder(&payload, &target, notices);
            }
            DashboardEvent::OpenExport => self.export_dialog.open(),
            DashboardEvent::ExportWidget(id) => {
                tracing::debug!(id = %id, "per-widget export requested");
                notices.info("Export functionality coming soon");
            }
            DashboardEvent::Save => self.store.save(notices),
            DashboardEvent::Reset => {
                self.settings_panel.close();
                self.runtime.clear();
                self.store.reset(notices);
            }
        }
        self.sync_runtime();
    }

    /// Match runtime bodies to the store: reuse by id, notify on content
    /// changes, rebuild on kind changes and drop bodies of removed widgets.
    pub fn sync_runtime(&mut self) {
        let mut reusable = std::mem::take(&mut self.runtime);
        for descriptor in self.store.widgets() {
            let runtime = match reusable.remove(&descriptor.id) {
                Some(mut rt) if rt.content.kind() == descriptor.kind() => {
                    if rt.content != descriptor.content {
                        rt.body.on_content_updated(&descriptor.content);
                        rt.content = descriptor.content;
                    }
                    rt
                }
                _ => WidgetRuntime {
                    content: descriptor.content,
                    body: widgets::create(&descriptor.content),
                    handle_rect: egui::Rect::NOTHING,
                },
            };
            self.runtime.insert(descriptor.id.clone(), runtime);
        }
        let store = &self.store;
        self.drag.retain_widgets(|id| store.contains(id));
    }

    pub fn runtime_len(&self) -> usize {
        self.runtime.len()
    }

    /// Screen rect of a widget's move handle from the last drawn frame.
    pub fn handle_rect(&self, id: &WidgetId) -> Option<egui::Rect> {
        self.runtime
            .get(id)
            .map(|rt| rt.handle_rect)
            .filter(|rect| rect.is_positive())
    }

    pub fn toolbar_ui(&mut self, ui: &mut egui::Ui, notices: &mut NoticeQueue) {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.heading("My Dashboard");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add Widget").clicked() {
                    events.push(DashboardEvent::OpenAddWidget);
                }
                if ui.button("Export").clicked() {
                    events.push(DashboardEvent::OpenExport);
                }
                if ui.button("Save").clicked() {
                    events.push(DashboardEvent::Save);
                }
            });
        });
        for event in events {
            self.handle(event, notices);
        }
    }

    /// The widget settings side panel. Draw before the central panel.
    pub fn side_panel(&mut self, ctx: &egui::Context, notices: &mut NoticeQueue) {
        if let SettingsPanelResult::Saved(descriptor) = self.settings_panel.ui(ctx) {
            self.handle(DashboardEvent::UpdateWidget(descriptor), notices);
        }
    }

    /// Floating dialogs and background job polling.
    pub fn windows(&mut self, ctx: &egui::Context, notices: &mut NoticeQueue) {
        if let Some(descriptor) = self.add_dialog.ui(ctx) {
            self.handle(DashboardEvent::AddWidget(descriptor), notices);
        }
        self.export_dialog.ui(ctx, self.store.widgets(), notices);
        self.export_dialog.poll(notices);
        if self.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }

    /// The widget grid.
    pub fn ui(&mut self, ui: &mut egui::Ui, notices: &mut NoticeQueue) {
        let placements = place_widgets(self.store.widgets());
        let width = ui.available_width();
        let height = grid_height(row_count(&placements)).max(ROW_HEIGHT);
        let (grid_rect, grid_response) =
            ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

        if placements.is_empty() {
            ui.put(
                grid_rect,
                egui::Label::new(egui::RichText::new("No widgets yet. Use Add Widget to create one.").weak()),
            );
        }

        let mut events = Vec::new();
        let mut drops = Vec::new();
        let mut over_card = false;
        for placement in &placements {
            let descriptor = &self.store.widgets()[placement.index];
            let id = descriptor.id.clone();
            let rect = placement_rect(grid_rect.min, width, placement);
            let target = DropTargetId::Widget(id.clone());
            let visual = CardVisual {
                lifted: self.drag.is_lifted(&id),
                drop_highlight: self.drag.is_over(&target),
            };
            let Some(runtime) = self.runtime.get_mut(&id) else {
                continue;
            };
            let clip = rect.intersect(ui.clip_rect());
            let output = ui
                .allocate_ui_at_rect(rect, |ui| {
                    ui.set_clip_rect(clip);
                    card::show(ui, descriptor, runtime.body.as_mut(), visual)
                })
                .inner;
            runtime.handle_rect = output.handle.rect;

            match output.action {
                Some(CardAction::OpenSettings) => events.push(DashboardEvent::OpenSettings(id.clone())),
                Some(CardAction::Remove) => events.push(DashboardEvent::RemoveWidget(id.clone())),
                Some(CardAction::Export) => events.push(DashboardEvent::ExportWidget(id.clone())),
                None => {}
            }

            if output.handle.drag_started() {
                self.drag.start_drag(&id);
            }
            output.handle.dnd_set_drag_payload(DragPayload::widget(id.clone()));
            if output.handle.drag_stopped() {
                self.drag.end_drag(&id);
            }

            let drop_zone = ui.interact(rect, egui::Id::new(("widget-drop", id.as_str())), egui::Sense::hover());
            let hovered = drop_zone
                .dnd_hover_payload::<DragPayload>()
                .map_or(false, |payload| payload.source_id != id);
            over_card |= drop_zone.contains_pointer();
            self.drag.set_hovered(&target, hovered);
            if let Some(payload) = drop_zone.dnd_release_payload::<DragPayload>() {
                drops.push((target, payload));
            }
        }

        // releases outside any card land on the grid itself
        let grid_hovered = !over_card && grid_response.dnd_hover_payload::<DragPayload>().is_some();
        self.drag.set_hovered(&DropTargetId::Grid, grid_hovered);
        if let Some(payload) = grid_response.dnd_release_payload::<DragPayload>() {
            drops.push((DropTargetId::Grid, payload));
        }
        if grid_hovered {
            ui.painter().rect_stroke(
                grid_rect,
                6.0,
                egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
            );
        }

        for (target, payload) in drops {
            let store = &self.store;
            match self.drag.drop_on(&target, Some(payload.as_ref()), |id| store.contains(id)) {
                Ok(payload) => events.push(DashboardEvent::Reorder { payload, target }),
                Err(e) => tracing::warn!("drop rejected: {e}"),
            }
        }

        for event in events {
            self.handle(event, notices);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::widget::ChartType;

    fn body_addr(dashboard: &Dashboard, id: &str) -> usize {
        let rt = &dashboard.runtime[&WidgetId::from(id)];
        rt.body.as_ref() as *const dyn Widget as *const () as usize
    }

    #[test]
    fn grid_renders_all_seeded_widgets() {
        let mut dashboard = Dashboard::default();
        let mut notices = NoticeQueue::default();
        egui::__run_test_ui(|ui| {
            let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(900.0, 1200.0));
            ui.allocate_ui_at_rect(rect, |ui| {
                dashboard.ui(ui, &mut notices);
            });
        });
        assert_eq!(dashboard.runtime_len(), 5);
        assert!(notices.is_empty());
        assert!(!dashboard.is_dragging());
    }

    #[test]
    fn bodies_survive_edits_and_follow_removals() {
        let mut dashboard = Dashboard::default();
        let mut notices = NoticeQueue::default();
        let before = body_addr(&dashboard, "1");

        let mut edited = dashboard.store.get(&WidgetId::from("1")).unwrap().clone();
        edited.content = WidgetContent::Chart {
            chart_type: ChartType::Area,
        };
        dashboard.handle(DashboardEvent::UpdateWidget(edited), &mut notices);
        assert_eq!(body_addr(&dashboard, "1"), before);

        dashboard.handle(DashboardEvent::RemoveWidget(WidgetId::from("1")), &mut notices);
        assert_eq!(dashboard.runtime_len(), 4);
        assert_eq!(notices.texts(), vec!["Widget updated", "Widget removed"]);
    }

    #[test]
    fn settings_save_applies_update() {
        let mut dashboard = Dashboard::default();
        let mut notices = NoticeQueue::default();
        dashboard.handle(DashboardEvent::OpenSettings(WidgetId::from("3")), &mut notices);
        dashboard.settings_panel.form_mut().unwrap().widget.title = "Best Sellers".into();
        let saved = dashboard.settings_panel.save().unwrap();
        dashboard.handle(DashboardEvent::UpdateWidget(saved), &mut notices);
        assert_eq!(dashboard.store.widgets()[2].title, "Best Sellers");
        assert!(!dashboard.settings_panel.is_open());
    }

    #[test]
    fn widget_menu_export_is_a_stub() {
        let mut dashboard = Dashboard::default();
        let mut notices = NoticeQueue::default();
        dashboard.handle(DashboardEvent::ExportWidget(WidgetId::from("2")), &mut notices);
        assert_eq!(notices.texts(), vec!["Export functionality coming soon"]);
        assert!(!dashboard.export_dialog.open);
    }

    fn frame(ctx: &egui::Context, dashboard: &mut Dashboard, notices: &mut NoticeQueue, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1200.0, 1400.0))),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| dashboard.ui(ui, notices));
        });
    }

    fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn dragging_a_card_onto_another_swaps_them() {
        let ctx = egui::Context::default();
        let mut dashboard = Dashboard::default();
        let mut notices = NoticeQueue::default();
        frame(&ctx, &mut dashboard, &mut notices, Vec::new());
        frame(&ctx, &mut dashboard, &mut notices, Vec::new());

        let from = dashboard.handle_rect(&WidgetId::from("1")).unwrap().center();
        let to = dashboard.handle_rect(&WidgetId::from("2")).unwrap().center();
        let steps = [
            vec![egui::Event::PointerMoved(from)],
            vec![button(from, true)],
            vec![egui::Event::PointerMoved(from + egui::vec2(20.0, 20.0))],
            vec![egui::Event::PointerMoved(to)],
            vec![egui::Event::PointerMoved(to)],
        ];
        for events in steps {
            frame(&ctx, &mut dashboard, &mut notices, events);
        }
        assert!(dashboard.is_dragging());
        assert!(notices.is_empty());

        frame(&ctx, &mut dashboard, &mut notices, vec![button(to, false)]);
        frame(&ctx, &mut dashboard, &mut notices, Vec::new());

        let order: Vec<&str> = dashboard.store.widgets().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1", "3", "4", "5"]);
        assert_eq!(notices.texts(), vec!["Widget position updated"]);
        assert!(!dashboard.is_dragging());
    }

    #[test]
    fn releasing_without_a_drag_changes_nothing() {
        let ctx = egui::Context::default();
        let mut dashboard = Dashboard::default();
        let mut notices = NoticeQueue::default();
        frame(&ctx, &mut dashboard, &mut notices, Vec::new());
        frame(&ctx, &mut dashboard, &mut notices, Vec::new());

        let over = dashboard.handle_rect(&WidgetId::from("2")).unwrap().center();
        frame(&ctx, &mut dashboard, &mut notices, vec![egui::Event::PointerMoved(over)]);
        frame(&ctx, &mut dashboard, &mut notices, vec![button(over, false)]);

        let order: Vec<&str> = dashboard.store.widgets().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["1", "2", "3", "4", "5"]);
        assert!(notices.is_empty());
    }

    #[test]
    fn reset_closes_settings_and_restores_seeds() {
        let mut dashboard = Dashboard::default();
        let mut notices = NoticeQueue::default();
        dashboard.handle(DashboardEvent::RemoveWidget(WidgetId::from("4")), &mut notices);
        dashboard.handle(DashboardEvent::OpenSettings(WidgetId::from("1")), &mut notices);
        dashboard.handle(DashboardEvent::Reset, &mut notices);
        assert!(!dashboard.settings_panel.is_open());
        assert_eq!(dashboard.store.len(), 5);
        assert_eq!(dashboard.runtime_len(), 5);
    }
}
