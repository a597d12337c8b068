use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

/// Fractional arc per slice: (label, value, start, end) with start/end in
/// [0, 1] turns. Zero-value slices are skipped.
fn slice_arcs(slices: &[(String, u64)]) -> Vec<(String, u64, f64, f64)> {
    let total: u64 = slices.iter().map(|(_, v)| v).sum();
    if total == 0 {
        return Vec::new();
    }
    let mut arcs = Vec::new();
    let mut cursor = 0.0;
    for (label, value) in slices {
        if *value == 0 {
            continue;
        }
        let span = *value as f64 / total as f64;
        arcs.push((label.clone(), *value, cursor, cursor + span));
        cursor += span;
    }
    arcs
}

/// Unit-circle sector polygon for the arc [start, end] (in turns),
/// starting at 12 o'clock and sweeping clockwise.
fn sector_points(start: f64, end: f64) -> PlotPoints<'static> {
    const SEGMENTS_PER_TURN: usize = 128;
    let n = ((end - start) * SEGMENTS_PER_TURN as f64).ceil().max(2.0) as usize;

    let mut points = Vec::with_capacity(n + 2);
    points.push([0.0, 0.0]);
    for i in 0..=n {
        let turn = start + (end - start) * (i as f64 / n as f64);
        let angle = TAU * (0.25 - turn);
        points.push([angle.cos(), angle.sin()]);
    }
    PlotPoints::new(points)
}

/// Render the proportion chart for the current site selection.
pub fn success_pie(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(pie) = state.pie() else {
        return;
    };
    ui.strong(&pie.title);

    if pie.total() == 0 {
        ui.label("No launches match the current selection.");
        return;
    }

    Plot::new("success_pie")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (label, value, start, end) in slice_arcs(&pie.slices) {
                let color = state.site_colors.color_for(&label);
                let sector = Polygon::new(sector_points(start, end))
                    .name(format!("{label} ({value})"))
                    .fill_color(color.gamma_multiply(0.85))
                    .stroke(Stroke::new(1.0, color));
                plot_ui.polygon(sector);
            }
        });
}

// ---------------------------------------------------------------------------
// Payload scatter chart
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter for the current selection.
pub fn payload_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let Some(scatter) = state.scatter() else {
        return;
    };
    ui.strong(&scatter.title);

    // Group by booster category so each category is one legend entry.
    let mut groups: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for p in &scatter.points {
        groups
            .entry(p.booster_category.as_str())
            .or_default()
            .push([p.payload_mass_kg, p.class]);
    }

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(&scatter.x_label)
        .y_axis_label(&scatter.y_label)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, coords) in groups {
                let color = state.booster_colors.color_for(category);
                let points = Points::new(PlotPoints::new(coords))
                    .name(category)
                    .color(color)
                    .radius(4.0);
                plot_ui.points(points);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcs_partition_the_full_turn() {
        let slices = vec![
            ("siteA".to_string(), 1),
            ("siteB".to_string(), 3),
        ];
        let arcs = slice_arcs(&slices);
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].2, 0.0);
        assert_eq!(arcs[0].3, 0.25);
        assert_eq!(arcs[1].2, 0.25);
        assert_eq!(arcs[1].3, 1.0);
    }

    #[test]
    fn zero_value_slices_are_skipped() {
        let slices = vec![
            ("Success".to_string(), 2),
            ("Failure".to_string(), 0),
        ];
        let arcs = slice_arcs(&slices);
        assert_eq!(arcs.len(), 1);
        assert_eq!(arcs[0].0, "Success");
        assert_eq!(arcs[0].3, 1.0);
    }

    #[test]
    fn all_zero_slices_yield_no_arcs() {
        let slices = vec![
            ("Success".to_string(), 0),
            ("Failure".to_string(), 0),
        ];
        assert!(slice_arcs(&slices).is_empty());
    }

    #[test]
    fn sector_starts_at_center_and_lies_on_unit_circle() {
        let points = sector_points(0.0, 0.5);
        let points = points.points();
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, 0.0);
        for p in &points[1..] {
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((r - 1.0).abs() < 1e-9);
        }
    }
}
