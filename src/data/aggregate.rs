use super::model::{
    WorkerTable, INDUSTRY_COLUMN, MAIN_RURAL_COLUMN, MAIN_URBAN_COLUMN, MARGINAL_RURAL_COLUMN,
    MARGINAL_URBAN_COLUMN, REQUIRED_COUNT_COLUMNS, STATE_COLUMN,
};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Aggregate types
// ---------------------------------------------------------------------------

/// Geographic split of the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    Rural,
    Urban,
}

impl Area {
    pub fn label(self) -> &'static str {
        match self {
            Area::Rural => "Rural",
            Area::Urban => "Urban",
        }
    }
}

/// Main / marginal sums for one area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateRow {
    pub area: Area,
    pub main_workers: f64,
    pub marginal_workers: f64,
}

/// The `Rural` and `Urban` rows for one selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerAggregate {
    pub rural: AggregateRow,
    pub urban: AggregateRow,
}

impl WorkerAggregate {
    pub fn rows(&self) -> [AggregateRow; 2] {
        [self.rural, self.urban]
    }

    pub fn total_main(&self) -> f64 {
        self.rural.main_workers + self.urban.main_workers
    }

    pub fn total_marginal(&self) -> f64 {
        self.rural.marginal_workers + self.urban.marginal_workers
    }
}

// ---------------------------------------------------------------------------
// Schema check and summation
// ---------------------------------------------------------------------------

/// Verify the full table carries the filter columns and the four count
/// columns. Reports the first one missing.
pub fn check_required_columns(table: &WorkerTable) -> Result<(), DashboardError> {
    let required = [STATE_COLUMN, INDUSTRY_COLUMN]
        .into_iter()
        .chain(REQUIRED_COUNT_COLUMNS);
    for col in required {
        if !table.has_column(col) {
            return Err(DashboardError::MissingColumn(col.to_string()));
        }
    }
    Ok(())
}

/// Sum a column over the given rows; absent columns sum to zero.
fn column_sum(table: &WorkerTable, column: &str, rows: &[usize]) -> f64 {
    let Some(col) = table.column_index(column) else {
        return 0.0;
    };
    rows.iter().map(|&r| table.cell(r, col).as_count()).sum()
}

/// Sum the four count columns over `rows`. The table is expected to have
/// passed [`check_required_columns`].
pub fn aggregate(table: &WorkerTable, rows: &[usize]) -> WorkerAggregate {
    WorkerAggregate {
        rural: AggregateRow {
            area: Area::Rural,
            main_workers: column_sum(table, MAIN_RURAL_COLUMN, rows),
            marginal_workers: column_sum(table, MARGINAL_RURAL_COLUMN, rows),
        },
        urban: AggregateRow {
            area: Area::Urban,
            main_workers: column_sum(table, MAIN_URBAN_COLUMN, rows),
            marginal_workers: column_sum(table, MARGINAL_URBAN_COLUMN, rows),
        },
    }
}
