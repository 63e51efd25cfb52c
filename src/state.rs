use std::path::Path;
use std::sync::Arc;

use crate::color::SeriesColors;
use crate::data::aggregate::check_required_columns;
use crate::data::filter::{FilterOptions, FilterSelection};
use crate::data::loader::load_dataset;
use crate::data::model::{CellValue, WorkerTable};
use crate::data::view::{build_view, DashboardView};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, shared read-only.
    pub table: Arc<WorkerTable>,

    /// Dropdown choices derived from `table`.
    pub options: FilterOptions,

    /// Current (state, industry); `None` when either column has no values.
    pub selection: Option<FilterSelection>,

    /// Whether `table` passed the required-column check.
    pub schema_valid: bool,

    /// Result of the last pipeline run, or the schema error for `table`.
    pub view: Option<Result<DashboardView, DashboardError>>,

    /// One colour per chart series.
    pub series_colors: SeriesColors,

    /// Status / error message from a runtime reload.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build state around an already-loaded table and run the pipeline once.
    pub fn new(table: Arc<WorkerTable>) -> Self {
        let mut state = Self {
            table: Arc::new(WorkerTable::default()),
            options: FilterOptions::default(),
            selection: None,
            schema_valid: false,
            view: None,
            series_colors: SeriesColors::new(2),
            status_message: None,
        };
        state.set_table(table);
        state
    }

    /// Ingest a table: check its columns once, rebuild options, reset to the
    /// default selection.
    pub fn set_table(&mut self, table: Arc<WorkerTable>) {
        self.options = FilterOptions::from_table(&table);
        self.selection = self.options.default_selection();
        self.status_message = None;
        self.table = table;

        match check_required_columns(&self.table) {
            Ok(()) => {
                self.schema_valid = true;
                self.refresh();
            }
            Err(e) => {
                log::warn!("{e}");
                self.schema_valid = false;
                self.view = Some(Err(e));
            }
        }
    }

    /// Re-run the pipeline for the current selection. A schema error stays
    /// in place until a new table is loaded.
    pub fn refresh(&mut self) {
        if !self.schema_valid {
            return;
        }
        self.view = self
            .selection
            .as_ref()
            .map(|sel| Ok(build_view(&self.table, sel)));
    }

    pub fn set_state(&mut self, state: CellValue) {
        if let Some(sel) = &mut self.selection {
            if sel.state != state {
                sel.state = state;
                self.refresh();
            }
        }
    }

    pub fn set_industry(&mut self, industry: CellValue) {
        if let Some(sel) = &mut self.selection {
            if sel.industry != industry {
                sel.industry = industry;
                self.refresh();
            }
        }
    }

    /// Number of rows matching the current selection, if a view exists.
    pub fn matching_rows(&self) -> Option<usize> {
        match &self.view {
            Some(Ok(view)) => Some(view.rows.len()),
            _ => None,
        }
    }

    /// Replace the dataset from a user-picked file. A failed load keeps the
    /// current table and reports through `status_message`.
    pub fn reload_from(&mut self, path: &Path) {
        match load_dataset(path) {
            Ok(table) => self.set_table(Arc::new(table)),
            Err(e) => {
                log::error!("{e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::loader::read_csv;

    const DATA: &str = "\
STATE,Industry  Classification,Main Workers - Rural - Persons,Main Workers - Urban - Persons,Marginal Workers - Rural - Persons,Marginal Workers - Urban - Persons
Goa,Mining,5,3,1,2
Assam,Tea,10,20,30,40
Goa,Tea,1,1,1,1
";

    fn state() -> AppState {
        AppState::new(Arc::new(read_csv(DATA.as_bytes()).unwrap()))
    }

    fn text(s: &str) -> CellValue {
        CellValue::String(s.to_string())
    }

    #[test]
    fn starts_on_first_sorted_values() {
        let st = state();
        let sel = st.selection.clone().unwrap();
        assert_eq!(sel.state, text("Assam"));
        assert_eq!(sel.industry, text("Mining"));
        // Independent filters: (Assam, Mining) has no rows.
        assert_eq!(st.matching_rows(), Some(0));
    }

    #[test]
    fn changing_selection_reruns_pipeline() {
        let mut st = state();
        st.set_state(text("Goa"));
        assert_eq!(st.matching_rows(), Some(1));
        st.set_industry(text("Tea"));
        match &st.view {
            Some(Ok(view)) => {
                assert_eq!(view.rows, vec![2]);
                assert_eq!(view.total_main, 2.0);
            }
            other => panic!("expected a view, got {other:?}"),
        }
    }

    #[test]
    fn schema_failure_is_kept_in_view() {
        let csv = "STATE,Industry Classification\nGoa,Mining\n";
        let st = AppState::new(Arc::new(read_csv(csv.as_bytes()).unwrap()));
        assert!(matches!(
            st.view,
            Some(Err(DashboardError::MissingColumn(ref c))) if c == "Main Workers - Rural - Persons"
        ));
    }

    fn assert_missing(st: &AppState, column: &str) {
        match &st.view {
            Some(Err(DashboardError::MissingColumn(c))) => assert_eq!(c, column),
            other => panic!("expected missing {column}, got {other:?}"),
        }
    }

    #[test]
    fn headers_only_table_reports_missing_column() {
        let csv = "STATE,Industry Classification\n";
        let st = AppState::new(Arc::new(read_csv(csv.as_bytes()).unwrap()));
        assert!(st.selection.is_none());
        assert_missing(&st, "Main Workers - Rural - Persons");
    }

    #[test]
    fn table_without_state_reports_state() {
        let csv = DATA.replacen("STATE,", "REGION,", 1);
        let st = AppState::new(Arc::new(read_csv(csv.as_bytes()).unwrap()));
        assert!(st.selection.is_none());
        assert_missing(&st, "STATE");
    }

    #[test]
    fn schema_error_survives_selection_changes() {
        let csv = "STATE,Industry Classification\nGoa,Mining\nAssam,Tea\n";
        let mut st = AppState::new(Arc::new(read_csv(csv.as_bytes()).unwrap()));
        st.set_state(text("Goa"));
        st.set_industry(text("Tea"));
        assert_missing(&st, "Main Workers - Rural - Persons");
    }

    #[test]
    fn loading_a_valid_table_clears_schema_error() {
        let bad = "STATE,Industry Classification\nGoa,Mining\n";
        let mut st = AppState::new(Arc::new(read_csv(bad.as_bytes()).unwrap()));
        assert!(!st.schema_valid);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATA.as_bytes()).unwrap();
        st.reload_from(file.path());
        assert!(st.schema_valid);
        assert_eq!(st.matching_rows(), Some(0));
    }

    #[test]
    fn failed_reload_keeps_current_table() {
        let mut st = state();
        let dir = tempfile::tempdir().unwrap();
        st.reload_from(&dir.path().join("absent.csv"));
        assert_eq!(st.table.len(), 3);
        assert!(st.status_message.as_deref().unwrap().starts_with("Error:"));
    }
}
