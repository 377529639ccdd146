use dash_forge::dashboard::layout::{
    grid_height, place_widgets, placement_rect, row_count, GRID_GAP, ROW_HEIGHT,
};
use dash_forge::dashboard::{
    seed_widgets, ChartType, DataSourceKind, WidgetContent, WidgetDescriptor, WidgetSize,
};
use eframe::egui;

#[test]
fn span_depends_only_on_size() {
    let contents = [
        WidgetContent::Chart {
            chart_type: ChartType::Pie,
        },
        WidgetContent::Table,
        WidgetContent::Metric,
    ];
    for size in WidgetSize::ALL {
        let expected = match size {
            WidgetSize::Sm => 1,
            WidgetSize::Md => 2,
            WidgetSize::Lg => 3,
        };
        for content in contents {
            for source in DataSourceKind::ALL {
                let mut widget = WidgetDescriptor::new("x", "Any", content, size);
                widget.data_source = source;
                let placements = place_widgets(std::slice::from_ref(&widget));
                assert_eq!(placements[0].col_span, expected);
            }
        }
    }
}

#[test]
fn large_widgets_fill_a_row() {
    let widgets: Vec<_> = (0..3)
        .map(|i| WidgetDescriptor::new(format!("{i}"), "Wide", WidgetContent::Table, WidgetSize::Lg))
        .collect();
    let placements = place_widgets(&widgets);
    let rows: Vec<_> = placements.iter().map(|p| (p.row, p.col)).collect();
    assert_eq!(rows, vec![(0, 0), (1, 0), (2, 0)]);
}

#[test]
fn seeded_grid_height() {
    let placements = place_widgets(&seed_widgets());
    let rows = row_count(&placements);
    assert_eq!(rows, 4);
    assert_eq!(grid_height(rows), 4.0 * ROW_HEIGHT + 3.0 * GRID_GAP);
    assert_eq!(grid_height(0), 0.0);
}

#[test]
fn rects_of_one_row_do_not_overlap() {
    let placements = place_widgets(&seed_widgets());
    let origin = egui::pos2(0.0, 0.0);
    let table = placement_rect(origin, 900.0, &placements[2]);
    let metric = placement_rect(origin, 900.0, &placements[3]);
    assert_eq!(table.top(), metric.top());
    assert!(table.right() + GRID_GAP <= metric.left() + 0.001);
    assert!((metric.right() - 900.0).abs() < 0.001);
}
