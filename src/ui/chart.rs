use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::SeriesColors;
use crate::data::view::ChartSpec;

/// Fraction of each category slot covered by its group of bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Grouped bar chart
// ---------------------------------------------------------------------------

/// X position of `series` within the group at `category`.
fn bar_position(category: usize, series: usize, n_series: usize) -> f64 {
    let bar_width = GROUP_WIDTH / n_series as f64;
    category as f64 - GROUP_WIDTH / 2.0 + bar_width * (series as f64 + 0.5)
}

/// Build one `BarChart` per series, bars grouped side by side per category.
fn bar_charts(spec: &ChartSpec, colors: &SeriesColors) -> Vec<BarChart> {
    let n_series = spec.series.len().max(1);
    let bar_width = GROUP_WIDTH / n_series as f64;

    spec.series
        .iter()
        .enumerate()
        .map(|(s, series)| {
            let bars: Vec<Bar> = series
                .values
                .iter()
                .enumerate()
                .map(|(c, &value)| {
                    let category = spec.categories.get(c).copied().unwrap_or_default();
                    Bar::new(bar_position(c, s, n_series), value)
                        .width(bar_width * 0.95)
                        .name(format!("{} ({category})", series.name))
                })
                .collect();
            BarChart::new(bars)
                .name(series.name)
                .color(colors.color_for(s))
        })
        .collect()
}

/// Render the chart title, the legend caption and the plot itself.
pub fn worker_chart(ui: &mut Ui, spec: &ChartSpec, colors: &SeriesColors, height: f32) {
    ui.heading(&spec.title);

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(spec.legend_title);
        for (s, series) in spec.series.iter().enumerate() {
            ui.label(RichText::new(format!("■ {}", series.name)).color(colors.color_for(s)));
        }
    });

    let categories = spec.categories.clone();
    let charts = bar_charts(spec, colors);

    Plot::new("worker_chart")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Area")
        .y_axis_label(spec.value_axis_label)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            categories
                .get(idx as usize)
                .map(|c| c.to_string())
                .unwrap_or_default()
        })
        .include_x(-0.5)
        .include_x(spec.categories.len() as f64 - 0.5)
        .include_y(0.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_grouped_around_category_centres() {
        let a = bar_position(0, 0, 2);
        let b = bar_position(0, 1, 2);
        assert!(a < 0.0 && b > 0.0);
        assert!((a + b).abs() < 1e-12);
        assert!((bar_position(1, 0, 2) - (1.0 + a)).abs() < 1e-12);
    }
}
