use crate::dashboard::drag::{DragPayload, DropTargetId};
use crate::dashboard::widget::{seed_widgets, WidgetDescriptor, WidgetId};
use crate::notice::NoticeQueue;

/// Clock used to mint widget ids, in unix milliseconds.
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Ordered, in-memory list of widget descriptors.
///
/// List order is grid placement order. Nothing here is persisted.
pub struct WidgetStore {
    widgets: Vec<WidgetDescriptor>,
    clock: Clock,
    last_stamp: i64,
}

impl Default for WidgetStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl WidgetStore {
    pub fn new(widgets: Vec<WidgetDescriptor>) -> Self {
        Self {
            widgets,
            clock: system_clock,
            last_stamp: 0,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_widgets())
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn widgets(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetDescriptor> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| &w.id == id)
    }

    fn mint_id(&mut self) -> WidgetId {
        let mut stamp = (self.clock)().max(self.last_stamp + 1);
        loop {
            let id = WidgetId::new(format!("widget-{stamp}"));
            if !self.contains(&id) {
                self.last_stamp = stamp;
                return id;
            }
            stamp += 1;
        }
    }

    /// Append a new widget. The caller-supplied id is replaced.
    ///
    /// Returns `None` without touching the list when the trimmed title is empty.
    pub fn add(
        &mut self,
        mut descriptor: WidgetDescriptor,
        notices: &mut NoticeQueue,
    ) -> Option<WidgetId> {
        if descriptor.title.trim().is_empty() {
            tracing::debug!("rejected widget with empty title");
            return None;
        }
        let id = self.mint_id();
        descriptor.id = id.clone();
        tracing::info!(id = %id, kind = descriptor.kind().as_str(), "widget added");
        self.widgets.push(descriptor);
        notices.success("New widget added");
        Some(id)
    }

    /// Replace the widget with the same id in place.
    pub fn update(&mut self, descriptor: WidgetDescriptor, notices: &mut NoticeQueue) -> bool {
        match self.position(&descriptor.id) {
            Some(idx) => {
                tracing::info!(id = %descriptor.id, "widget updated");
                self.widgets[idx] = descriptor;
                notices.success("Widget updated");
                true
            }
            None => {
                tracing::warn!(id = %descriptor.id, "update for unknown widget ignored");
                notices.error("Widget no longer exists");
                false
            }
        }
    }

    pub fn remove(&mut self, id: &WidgetId, notices: &mut NoticeQueue) {
        if let Some(idx) = self.position(id) {
            self.widgets.remove(idx);
            tracing::info!(id = %id, "widget removed");
        } else {
            tracing::debug!(id = %id, "remove for unknown widget");
        }
        notices.info("Widget removed");
    }

    /// Apply a drop. Dropping on another widget swaps the two entries; dropping
    /// on the grid background keeps the order.
    pub fn reorder(
        &mut self,
        payload: &DragPayload,
        target: &DropTargetId,
        notices: &mut NoticeQueue,
    ) -> bool {
        let moved = match (self.position(&payload.source_id), target.widget()) {
            (Some(from), Some(target_id)) => match self.position(target_id) {
                Some(to) if to != from => {
                    self.widgets.swap(from, to);
                    tracing::info!(source = %payload.source_id, target = %target_id, "widgets swapped");
                    true
                }
                _ => false,
            },
            _ => false,
        };
        notices.info("Widget position updated");
        moved
    }

    /// Restore the seeded widgets.
    pub fn reset(&mut self, notices: &mut NoticeQueue) {
        self.widgets = seed_widgets();
        tracing::info!("dashboard reset to defaults");
        notices.info("Dashboard reset");
    }

    /// JSON snapshot of the current layout.
    pub fn snapshot_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.widgets)?)
    }

    /// Simulated save: the snapshot only goes to the debug log.
    pub fn save(&self, notices: &mut NoticeQueue) {
        match self.snapshot_json() {
            Ok(json) => {
                tracing::debug!(bytes = json.len(), widgets = self.widgets.len(), "dashboard snapshot");
                notices.success("Dashboard saved");
            }
            Err(e) => {
                tracing::error!("failed to serialize dashboard: {e}");
                notices.error(format!("Failed to save dashboard: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::widget::{WidgetContent, WidgetSize};

    fn frozen_clock() -> i64 {
        1_700_000_000_000
    }

    fn table(title: &str) -> WidgetDescriptor {
        WidgetDescriptor::new("", title, WidgetContent::Table, WidgetSize::Sm)
    }

    #[test]
    fn ids_stay_unique_when_clock_does_not_advance() {
        let mut store = WidgetStore::seeded().with_clock(frozen_clock);
        let mut notices = NoticeQueue::default();
        let a = store.add(table("A"), &mut notices).unwrap();
        let b = store.add(table("B"), &mut notices).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "widget-1700000000000");
        assert_eq!(b.as_str(), "widget-1700000000001");
    }

    #[test]
    fn minted_id_skips_existing_entries() {
        let mut existing = table("Taken");
        existing.id = WidgetId::from("widget-1700000000000");
        let mut store = WidgetStore::new(vec![existing]).with_clock(frozen_clock);
        let mut notices = NoticeQueue::default();
        let id = store.add(table("Fresh"), &mut notices).unwrap();
        assert_eq!(id.as_str(), "widget-1700000000001");
    }

    #[test]
    fn reorder_onto_self_keeps_order() {
        let mut store = WidgetStore::seeded();
        let mut notices = NoticeQueue::default();
        let payload = DragPayload::widget(WidgetId::from("2"));
        let moved = store.reorder(&payload, &DropTargetId::Widget(WidgetId::from("2")), &mut notices);
        assert!(!moved);
        assert_eq!(notices.texts(), vec!["Widget position updated"]);
    }

    #[test]
    fn save_does_not_touch_widgets() {
        let store = WidgetStore::seeded();
        let mut notices = NoticeQueue::default();
        store.save(&mut notices);
        assert_eq!(store.len(), 5);
        assert_eq!(notices.texts(), vec!["Dashboard saved"]);
    }
}
