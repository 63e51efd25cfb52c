use super::model::{CellValue, WorkerTable, INDUSTRY_COLUMN, STATE_COLUMN};

// ---------------------------------------------------------------------------
// Filter options and selection
// ---------------------------------------------------------------------------

/// The choices offered by the two dropdowns: sorted distinct non-null values.
/// The lists are independent; picking a state does not narrow industries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub states: Vec<CellValue>,
    pub industries: Vec<CellValue>,
}

impl FilterOptions {
    pub fn from_table(table: &WorkerTable) -> Self {
        FilterOptions {
            states: table.distinct_values(STATE_COLUMN).into_iter().collect(),
            industries: table.distinct_values(INDUSTRY_COLUMN).into_iter().collect(),
        }
    }

    /// Default selection: the first sorted value of each list. `None` when
    /// either list is empty.
    pub fn default_selection(&self) -> Option<FilterSelection> {
        Some(FilterSelection {
            state: self.states.first()?.clone(),
            industry: self.industries.first()?.clone(),
        })
    }
}

/// The current (state, industry) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub state: CellValue,
    pub industry: CellValue,
}

/// Indices of rows whose `STATE` and `Industry Classification` both equal the
/// selection exactly. Empty when either column is absent.
pub fn filtered_indices(table: &WorkerTable, selection: &FilterSelection) -> Vec<usize> {
    let (Some(state_col), Some(industry_col)) = (
        table.column_index(STATE_COLUMN),
        table.column_index(INDUSTRY_COLUMN),
    ) else {
        return Vec::new();
    };

    (0..table.len())
        .filter(|&row| {
            *table.cell(row, state_col) == selection.state
                && *table.cell(row, industry_col) == selection.industry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::WorkerRecord;

    fn table(rows: &[(&str, &str)]) -> WorkerTable {
        let rows = rows
            .iter()
            .map(|(s, i)| WorkerRecord {
                cells: vec![CellValue::parse(s), CellValue::parse(i)],
            })
            .collect();
        WorkerTable::new(&[STATE_COLUMN, INDUSTRY_COLUMN], rows)
    }

    fn text(s: &str) -> CellValue {
        CellValue::String(s.to_string())
    }

    #[test]
    fn options_are_sorted_distinct_and_independent() {
        let t = table(&[("Goa", "Mining"), ("Assam", "Tea"), ("Goa", ""), ("", "Agriculture")]);
        let opts = FilterOptions::from_table(&t);
        assert_eq!(opts.states, vec![text("Assam"), text("Goa")]);
        assert_eq!(
            opts.industries,
            vec![text("Agriculture"), text("Mining"), text("Tea")]
        );
        assert_eq!(
            opts.default_selection(),
            Some(FilterSelection {
                state: text("Assam"),
                industry: text("Agriculture"),
            })
        );
    }

    #[test]
    fn no_default_selection_without_values() {
        let opts = FilterOptions::from_table(&table(&[]));
        assert_eq!(opts.default_selection(), None);
    }

    #[test]
    fn filter_matches_exactly_both_conditions() {
        let t = table(&[
            ("Goa", "Mining"),
            ("Goa", "Tea"),
            ("Assam", "Mining"),
            ("Goa", "Mining"),
            ("goa", "Mining"),
        ]);
        let sel = FilterSelection {
            state: text("Goa"),
            industry: text("Mining"),
        };
        let rows = filtered_indices(&t, &sel);
        assert_eq!(rows, vec![0, 3]);

        // Every row is either selected or fails one of the equalities.
        for row in 0..t.len() {
            let matches = *t.cell(row, 0) == sel.state && *t.cell(row, 1) == sel.industry;
            assert_eq!(matches, rows.contains(&row));
        }
    }

    #[test]
    fn missing_filter_column_selects_nothing() {
        let t = WorkerTable::new(
            &[STATE_COLUMN],
            vec![WorkerRecord {
                cells: vec![text("Goa")],
            }],
        );
        let sel = FilterSelection {
            state: text("Goa"),
            industry: text("Mining"),
        };
        assert!(filtered_indices(&t, &sel).is_empty());
    }
}
