//! The pure dashboard pipeline: filter → aggregate → presentable view.
//!
//! [`render`] checks the schema and builds the view in one call. The app
//! checks the schema once per loaded table and then calls [`build_view`] on
//! every selection change. Nothing here touches egui.

use super::aggregate::{aggregate, check_required_columns, WorkerAggregate};
use super::filter::{filtered_indices, FilterSelection};
use super::model::WorkerTable;
use crate::error::DashboardError;

pub const VALUE_AXIS_LABEL: &str = "Worker Count";
pub const LEGEND_TITLE: &str = "Worker Type";
pub const MAIN_SERIES: &str = "Main Workers";
pub const MARGINAL_SERIES: &str = "Marginal Workers";

/// One bar series; `values[i]` belongs to `ChartSpec::categories[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// Grouped bar chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub categories: Vec<&'static str>,
    pub series: Vec<Series>,
    pub value_axis_label: &'static str,
    pub legend_title: &'static str,
}

impl ChartSpec {
    fn grouped(selection: &FilterSelection, aggregate: &WorkerAggregate) -> Self {
        let rows = aggregate.rows();
        ChartSpec {
            title: format!(
                "Main and Marginal Workers in {} - {}",
                selection.state, selection.industry
            ),
            categories: rows.iter().map(|r| r.area.label()).collect(),
            series: vec![
                Series {
                    name: MAIN_SERIES,
                    values: rows.iter().map(|r| r.main_workers).collect(),
                },
                Series {
                    name: MARGINAL_SERIES,
                    values: rows.iter().map(|r| r.marginal_workers).collect(),
                },
            ],
            value_axis_label: VALUE_AXIS_LABEL,
            legend_title: LEGEND_TITLE,
        }
    }
}

/// Everything the presenter draws for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub chart: ChartSpec,
    pub aggregate: WorkerAggregate,
    pub total_main: f64,
    pub total_marginal: f64,
    /// Indices into the table of the matching rows, in file order.
    pub rows: Vec<usize>,
}

/// Run the pipeline for one selection. A schema failure yields no view.
pub fn render(
    table: &WorkerTable,
    selection: &FilterSelection,
) -> Result<DashboardView, DashboardError> {
    check_required_columns(table)?;
    Ok(build_view(table, selection))
}

/// Filter and aggregate for a table that already passed the schema check.
pub fn build_view(table: &WorkerTable, selection: &FilterSelection) -> DashboardView {
    let rows = filtered_indices(table, selection);
    let aggregate = aggregate(table, &rows);
    DashboardView {
        chart: ChartSpec::grouped(selection, &aggregate),
        total_main: aggregate.total_main(),
        total_marginal: aggregate.total_marginal(),
        aggregate,
        rows,
    }
}

/// Count formatting for the summary lines: integral sums print without a
/// fractional part.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
