use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use eframe::egui::{vec2, Color32, RichText, ScrollArea, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use crate::chart::{ChartKind, ChartSlot, ChartSpec};
use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – the three charts
// ---------------------------------------------------------------------------

/// Render the central panel: the three charts, or the message state that
/// replaces them when the data is unusable.
pub fn charts_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| match &state.status_message {
            Some(msg) => {
                ui.heading(RichText::new(msg).color(Color32::RED));
            }
            None => {
                ui.heading("Open a data file to view charts  (File → Open…)");
            }
        });
        return;
    };

    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(RichText::new("Data ISPA kosong.").color(Color32::RED));
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.columns(2, |cols| {
                cols[0].strong("Total Kasus per Kategori ISPA");
                if let Some(handle) = state.charts.get(ChartSlot::Category) {
                    draw_chart(&mut cols[0], "category_chart", &handle.spec);
                }

                cols[1].strong("Proporsi Jenis Kelamin");
                if let Some(handle) = state.charts.get(ChartSlot::Gender) {
                    draw_chart(&mut cols[1], "gender_chart", &handle.spec);
                }
            });

            ui.add_space(12.0);

            if let Some(handle) = state.charts.get(ChartSlot::Age) {
                if let Some(title) = &handle.spec.title {
                    ui.strong(title);
                }
                draw_chart(ui, "age_chart", &handle.spec);
            }
        });
}

/// Dispatch on the chart-kind tag carried by the spec.
fn draw_chart(ui: &mut Ui, id: &str, spec: &ChartSpec) {
    match spec.kind {
        ChartKind::Bar => draw_bar_chart(ui, id, spec),
        ChartKind::Pie => draw_pie_chart(ui, spec),
    }
}

// ---------------------------------------------------------------------------
// Bar charts (category totals, age distribution)
// ---------------------------------------------------------------------------

fn draw_bar_chart(ui: &mut Ui, id: &str, spec: &ChartSpec) {
    let bars: Vec<Bar> = spec
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let fill = spec.colors.get(i).copied().unwrap_or(color::NEUTRAL_GRAY);
            let mut bar = Bar::new(i as f64, value as f64)
                .width(0.6)
                .name(&spec.labels[i])
                .fill(fill);
            if let Some(border) = spec.bar_border {
                bar = bar.stroke(Stroke::new(1.0, border));
            }
            bar
        })
        .collect();

    let labels = spec.labels.clone();
    let mut plot = Plot::new(id.to_string())
        .height(280.0)
        .include_y(0.0)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            // Grid positions are bar indices; only whole indices get a label.
            let idx = mark.value.round();
            if (mark.value - idx).abs() < 1e-6 && idx >= 0.0 && (idx as usize) < labels.len() {
                labels[idx as usize].clone()
            } else {
                String::new()
            }
        });
    if let Some(label) = &spec.x_axis_label {
        plot = plot.x_axis_label(label);
    }
    if let Some(label) = &spec.y_axis_label {
        plot = plot.y_axis_label(label);
    }

    let mut bar_chart = BarChart::new(bars);
    if let Some(series) = &spec.series_label {
        bar_chart = bar_chart.name(series);
    }
    if spec.index_tooltips {
        let series = spec.series_label.clone().unwrap_or_default();
        bar_chart = bar_chart.element_formatter(Box::new(move |bar, _chart| {
            format!("{}\n{series}: {:.0}", bar.name, bar.value)
        }));
    }

    plot.show(ui, |plot_ui| {
        plot_ui.bar_chart(bar_chart);
    });
}

// ---------------------------------------------------------------------------
// Pie chart (gender share)
// ---------------------------------------------------------------------------

/// egui_plot has no pie primitive, so the gender chart is painter-drawn:
/// one triangle fan per slice, a legend row below, hover shows the share.
fn draw_pie_chart(ui: &mut Ui, spec: &ChartSpec) {
    let total = spec.total();

    let size = ui.available_width().min(280.0);
    let (rect, response) = ui.allocate_exact_size(vec2(ui.available_width(), size), Sense::hover());

    if total == 0 {
        return;
    }

    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.45;

    // Slices start at 12 o'clock and sweep clockwise (screen y grows down).
    let start_angle = -TAU / 4.0;
    let mut angle = start_angle;
    let mut cumulative = 0.0_f32;
    let mut boundaries = Vec::with_capacity(spec.values.len());
    let point_at = |a: f32| center + radius * vec2(a.cos(), a.sin());

    for (i, &value) in spec.values.iter().enumerate() {
        let sweep = TAU * value as f32 / total as f32;
        let fill = spec.colors.get(i).copied().unwrap_or(color::NEUTRAL_GRAY);

        // Approximate the arc with short triangle fans.
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        for step in 0..steps {
            let a0 = angle + sweep * step as f32 / steps as f32;
            let a1 = angle + sweep * (step + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![center, point_at(a0), point_at(a1)],
                fill,
                Stroke::NONE,
            ));
        }

        angle += sweep;
        cumulative += sweep;
        boundaries.push(cumulative);
    }

    // Hover: report the slice under the pointer.
    if let Some(pos) = response.hover_pos() {
        let offset = pos - center;
        if offset.length() <= radius {
            let pointer_angle = (offset.y.atan2(offset.x) - start_angle).rem_euclid(TAU);
            let slice = boundaries
                .iter()
                .position(|&end| pointer_angle <= end)
                .unwrap_or(spec.values.len() - 1);
            let value = spec.values[slice];
            let share = 100.0 * value as f64 / total as f64;
            response.on_hover_text(format!("{}: {value} ({share:.1}%)", spec.labels[slice]));
        }
    }

    // Legend row.
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (i, label) in spec.labels.iter().enumerate() {
            let swatch_color = spec.colors.get(i).copied().unwrap_or(color::NEUTRAL_GRAY);
            let (swatch, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, swatch_color);
            ui.label(format!("{label} ({})", spec.values[i]));
            ui.add_space(8.0);
        }
    });
}
