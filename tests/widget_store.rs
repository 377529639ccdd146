use dash_forge::dashboard::{
    seed_widgets, ChartType, DataSourceKind, DragPayload, DropTargetId, WidgetContent,
    WidgetDescriptor, WidgetId, WidgetKind, WidgetSize, WidgetStore,
};
use dash_forge::notice::{NoticeKind, NoticeQueue};

fn ids(store: &WidgetStore) -> Vec<String> {
    store.widgets().iter().map(|w| w.id.to_string()).collect()
}

fn draft(title: &str, content: WidgetContent, size: WidgetSize) -> WidgetDescriptor {
    WidgetDescriptor::new(WidgetId::default(), title, content, size)
}

#[test]
fn add_appends_with_fresh_id() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    let before = ids(&store);

    let id = store
        .add(draft("Test", WidgetContent::Table, WidgetSize::Sm), &mut notices)
        .unwrap();

    assert_eq!(store.len(), 6);
    assert!(!before.contains(&id.to_string()));
    assert!(id.as_str().starts_with("widget-"));
    let added = store.widgets().last().unwrap();
    assert_eq!(added.id, id);
    assert_eq!(added.kind(), WidgetKind::Table);
    assert_eq!(added.size, WidgetSize::Sm);
    assert_eq!(added.data_source, DataSourceKind::Mock);
    assert_eq!(added.chart_type(), None);
    assert_eq!(notices.last().unwrap().kind, NoticeKind::Success);
    assert_eq!(notices.texts(), vec!["New widget added"]);
}

#[test]
fn ids_stay_unique_across_rapid_adds() {
    let mut store = WidgetStore::seeded().with_clock(|| 42);
    let mut notices = NoticeQueue::default();
    for i in 0..20 {
        let content = WidgetContent::Chart {
            chart_type: ChartType::Line,
        };
        store.add(draft(&format!("Chart {i}"), content, WidgetSize::Md), &mut notices);
    }
    let mut all = ids(&store);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 25);
}

#[test]
fn blank_titles_are_rejected() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    for title in ["", "   ", "\t\n"] {
        assert!(store
            .add(draft(title, WidgetContent::Metric, WidgetSize::Lg), &mut notices)
            .is_none());
    }
    assert_eq!(store.widgets(), seed_widgets().as_slice());
    assert!(notices.is_empty());
}

#[test]
fn remove_unknown_id_keeps_list() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    store.remove(&WidgetId::from("missing"), &mut notices);
    assert_eq!(store.widgets(), seed_widgets().as_slice());
    assert_eq!(notices.texts(), vec!["Widget removed"]);
}

#[test]
fn remove_preserves_order_of_the_rest() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    store.remove(&WidgetId::from("3"), &mut notices);
    assert_eq!(ids(&store), vec!["1", "2", "4", "5"]);
}

#[test]
fn update_replaces_in_place() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    let mut edited = store.get(&WidgetId::from("2")).unwrap().clone();
    edited.title = "Weekly Visitors".into();
    edited.size = WidgetSize::Lg;

    assert!(store.update(edited.clone(), &mut notices));

    assert_eq!(store.len(), 5);
    assert_eq!(store.position(&edited.id), Some(1));
    let seeds = seed_widgets();
    for (i, (now, seed)) in store.widgets().iter().zip(&seeds).enumerate() {
        if i == 1 {
            assert_eq!(now, &edited);
            assert_eq!(now.content, seed.content);
            assert_eq!(now.data_source, seed.data_source);
        } else {
            assert_eq!(now, seed);
        }
    }
    assert_eq!(notices.texts(), vec!["Widget updated"]);
}

#[test]
fn update_of_removed_widget_reports_error() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    let stale = store.get(&WidgetId::from("4")).unwrap().clone();
    store.remove(&stale.id, &mut notices);
    assert!(!store.update(stale, &mut notices));
    assert_eq!(store.len(), 4);
    assert_eq!(notices.last().unwrap().kind, NoticeKind::Error);
}

#[test]
fn drop_on_widget_swaps_positions() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    let payload = DragPayload::widget(WidgetId::from("1"));
    assert!(store.reorder(
        &payload,
        &DropTargetId::Widget(WidgetId::from("4")),
        &mut notices
    ));
    assert_eq!(ids(&store), vec!["4", "2", "3", "1", "5"]);
    assert_eq!(notices.texts(), vec!["Widget position updated"]);
}

#[test]
fn drop_on_grid_keeps_order_but_notifies() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    let payload = DragPayload::widget(WidgetId::from("2"));
    assert!(!store.reorder(&payload, &DropTargetId::Grid, &mut notices));
    assert_eq!(ids(&store), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(notices.texts(), vec!["Widget position updated"]);
}

#[test]
fn reset_restores_seeds() {
    let mut store = WidgetStore::seeded();
    let mut notices = NoticeQueue::default();
    store.remove(&WidgetId::from("1"), &mut notices);
    store.add(draft("Extra", WidgetContent::Metric, WidgetSize::Sm), &mut notices);
    store.reset(&mut notices);
    assert_eq!(store.widgets(), seed_widgets().as_slice());
    assert_eq!(notices.texts().last(), Some(&"Dashboard reset"));
}

#[test]
fn snapshot_uses_wire_field_names() {
    let store = WidgetStore::seeded();
    let json = store.snapshot_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["type"], "chart");
    assert_eq!(value[0]["chartType"], "bar");
    assert_eq!(value[0]["dataSource"], "mock");
    assert!(value[2].get("chartType").is_none());
}
