use crate::dashboard::widget::WidgetDescriptor;
use eframe::egui;

pub const GRID_COLUMNS: usize = 3;
/// Card height. Identical for every widget size.
pub const ROW_HEIGHT: f32 = 256.0;
pub const GRID_GAP: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    /// Index of the widget in the store.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub col_span: usize,
}

/// Row-major auto placement of widgets on a `cols` wide grid.
///
/// A widget that does not fit in the rest of the current row starts the next
/// row; the cursor never moves back to fill earlier gaps.
pub fn place_widgets_in(widgets: &[WidgetDescriptor], cols: usize) -> Vec<GridPlacement> {
    let cols = cols.max(1);
    let mut placements = Vec::with_capacity(widgets.len());
    let mut row = 0;
    let mut col = 0;
    for (index, widget) in widgets.iter().enumerate() {
        let col_span = widget.size.column_span().clamp(1, cols);
        if col + col_span > cols {
            row += 1;
            col = 0;
        }
        placements.push(GridPlacement {
            index,
            row,
            col,
            col_span,
        });
        col += col_span;
        if col >= cols {
            row += 1;
            col = 0;
        }
    }
    placements
}

pub fn place_widgets(widgets: &[WidgetDescriptor]) -> Vec<GridPlacement> {
    place_widgets_in(widgets, GRID_COLUMNS)
}

pub fn row_count(placements: &[GridPlacement]) -> usize {
    placements.iter().map(|p| p.row + 1).max().unwrap_or(0)
}

/// Total height of a grid with `rows` rows.
pub fn grid_height(rows: usize) -> f32 {
    if rows == 0 {
        return 0.0;
    }
    rows as f32 * ROW_HEIGHT + (rows - 1) as f32 * GRID_GAP
}

/// Screen rectangle of `placement` inside a grid starting at `origin`.
pub fn placement_rect(origin: egui::Pos2, width: f32, placement: &GridPlacement) -> egui::Rect {
    let cols = GRID_COLUMNS as f32;
    let col_width = ((width - GRID_GAP * (cols - 1.0)) / cols).max(0.0);
    let min = origin
        + egui::vec2(
            placement.col as f32 * (col_width + GRID_GAP),
            placement.row as f32 * (ROW_HEIGHT + GRID_GAP),
        );
    let span = placement.col_span as f32;
    let size = egui::vec2(col_width * span + GRID_GAP * (span - 1.0), ROW_HEIGHT);
    egui::Rect::from_min_size(min, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::widget::{seed_widgets, WidgetContent, WidgetSize};

    fn sized(size: WidgetSize) -> WidgetDescriptor {
        WidgetDescriptor::new("x", "x", WidgetContent::Metric, size)
    }

    #[test]
    fn seeded_widgets_wrap_rows() {
        let placements = place_widgets(&seed_widgets());
        let cells: Vec<_> = placements.iter().map(|p| (p.row, p.col, p.col_span)).collect();
        // md + md cannot share a row; md + sm can.
        assert_eq!(cells, vec![(0, 0, 2), (1, 0, 2), (2, 0, 2), (2, 2, 1), (3, 0, 2)]);
        assert_eq!(row_count(&placements), 4);
    }

    #[test]
    fn span_is_clamped_to_narrow_grids() {
        let placements = place_widgets_in(&[sized(WidgetSize::Lg)], 2);
        assert_eq!(placements[0].col_span, 2);
    }

    #[test]
    fn placement_rect_spans_gaps() {
        let p = GridPlacement {
            index: 0,
            row: 1,
            col: 1,
            col_span: 2,
        };
        let rect = placement_rect(egui::Pos2::ZERO, 332.0, &p);
        // three 100px columns with 16px gaps
        assert_eq!(rect.min, egui::pos2(116.0, ROW_HEIGHT + GRID_GAP));
        assert_eq!(rect.width(), 216.0);
        assert_eq!(rect.height(), ROW_HEIGHT);
    }
}
