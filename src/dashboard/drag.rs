use crate::dashboard::widget::WidgetId;
use std::collections::HashMap;
use std::fmt;

/// What kind of object a drag carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSourceKind {
    Widget,
}

/// Typed transfer envelope attached to a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub source_id: WidgetId,
    pub source_kind: DragSourceKind,
}

impl DragPayload {
    pub fn widget(id: WidgetId) -> Self {
        Self {
            source_id: id,
            source_kind: DragSourceKind::Widget,
        }
    }
}

/// Where a payload was released.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DropTargetId {
    Grid,
    Widget(WidgetId),
}

impl DropTargetId {
    pub fn widget(&self) -> Option<&WidgetId> {
        match self {
            DropTargetId::Grid => None,
            DropTargetId::Widget(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejected {
    MissingPayload,
    UnknownWidget(WidgetId),
}

impl fmt::Display for DropRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropRejected::MissingPayload => write!(f, "drop carried no payload"),
            DropRejected::UnknownWidget(id) => write!(f, "dropped widget '{id}' no longer exists"),
        }
    }
}

impl std::error::Error for DropRejected {}

/// Drag source half: a widget that can be lifted.
#[derive(Debug, Default, Clone)]
pub struct DragSource {
    lifted: bool,
}

impl DragSource {
    pub fn start(&mut self, id: &WidgetId) -> DragPayload {
        self.lifted = true;
        DragPayload::widget(id.clone())
    }

    /// Clears the lifted flag whether or not a drop happened.
    pub fn end(&mut self) {
        self.lifted = false;
    }

    pub fn is_lifted(&self) -> bool {
        self.lifted
    }
}

/// Drop target half: a region that highlights while a payload hovers.
#[derive(Debug, Default, Clone)]
pub struct DropTarget {
    over: bool,
}

impl DropTarget {
    pub fn drag_over(&mut self) {
        self.over = true;
    }

    pub fn drag_leave(&mut self) {
        self.over = false;
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Clear the highlight and validate the released payload.
    pub fn drop(
        &mut self,
        payload: Option<&DragPayload>,
        known: impl Fn(&WidgetId) -> bool,
    ) -> Result<DragPayload, DropRejected> {
        self.over = false;
        let payload = payload.ok_or(DropRejected::MissingPayload)?;
        match payload.source_kind {
            DragSourceKind::Widget => {
                if !known(&payload.source_id) {
                    return Err(DropRejected::UnknownWidget(payload.source_id.clone()));
                }
            }
        }
        Ok(payload.clone())
    }
}

/// Transient drag state for every source and target on the grid.
#[derive(Debug, Default)]
pub struct DragTracker {
    sources: HashMap<WidgetId, DragSource>,
    targets: HashMap<DropTargetId, DropTarget>,
}

impl DragTracker {
    pub fn start_drag(&mut self, id: &WidgetId) -> DragPayload {
        self.sources.entry(id.clone()).or_default().start(id)
    }

    pub fn end_drag(&mut self, id: &WidgetId) {
        if let Some(source) = self.sources.get_mut(id) {
            source.end();
        }
    }

    pub fn is_lifted(&self, id: &WidgetId) -> bool {
        self.sources.get(id).map_or(false, DragSource::is_lifted)
    }

    /// Update the hover flag of `target` for this frame.
    pub fn set_hovered(&mut self, target: &DropTargetId, hovered: bool) {
        let entry = self.targets.entry(target.clone()).or_default();
        if hovered {
            entry.drag_over();
        } else {
            entry.drag_leave();
        }
    }

    pub fn is_over(&self, target: &DropTargetId) -> bool {
        self.targets.get(target).map_or(false, DropTarget::is_over)
    }

    pub fn drop_on(
        &mut self,
        target: &DropTargetId,
        payload: Option<&DragPayload>,
        known: impl Fn(&WidgetId) -> bool,
    ) -> Result<DragPayload, DropRejected> {
        let result = self
            .targets
            .entry(target.clone())
            .or_default()
            .drop(payload, known);
        if let Ok(payload) = &result {
            self.end_drag(&payload.source_id);
        }
        result
    }

    /// Forget state belonging to widgets that are gone.
    pub fn retain_widgets(&mut self, keep: impl Fn(&WidgetId) -> bool) {
        self.sources.retain(|id, _| keep(id));
        self.targets.retain(|target, _| match target {
            DropTargetId::Grid => true,
            DropTargetId::Widget(id) => keep(id),
        });
    }

    /// True while any widget is lifted.
    pub fn dragging(&self) -> bool {
        self.sources.values().any(DragSource::is_lifted)
    }
}
