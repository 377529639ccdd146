pub mod card;
pub mod dashboard;
pub mod drag;
pub mod layout;
pub mod store;
pub mod widget;
pub mod widgets;

pub use dashboard::{Dashboard, DashboardEvent};
pub use drag::{DragPayload, DragTracker, DropRejected, DropTargetId};
pub use store::WidgetStore;
pub use widget::{
    seed_widgets, ChartType, DataSourceKind, WidgetContent, WidgetDescriptor, WidgetId, WidgetKind,
    WidgetSize,
};
