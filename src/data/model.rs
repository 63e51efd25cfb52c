use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Column names used by the dashboard
// ---------------------------------------------------------------------------

pub const STATE_COLUMN: &str = "STATE";
pub const INDUSTRY_COLUMN: &str = "Industry Classification";

pub const MAIN_RURAL_COLUMN: &str = "Main Workers - Rural - Persons";
pub const MAIN_URBAN_COLUMN: &str = "Main Workers - Urban - Persons";
pub const MARGINAL_RURAL_COLUMN: &str = "Marginal Workers - Rural - Persons";
pub const MARGINAL_URBAN_COLUMN: &str = "Marginal Workers - Urban - Persons";

/// Numeric columns that must be present before aggregation, in check order.
pub const REQUIRED_COUNT_COLUMNS: [&str; 4] = [
    MAIN_RURAL_COLUMN,
    MAIN_URBAN_COLUMN,
    MARGINAL_RURAL_COLUMN,
    MARGINAL_URBAN_COLUMN,
];

/// Canonical spelling of a header: edges trimmed, runs of interior spaces
/// collapsed to a single space.
pub fn normalize_column_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for ch in raw.trim().chars() {
        if ch == ' ' {
            if !prev_space {
                out.push(ch);
            }
            prev_space = true;
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the worker table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, inferred from its CSV text.
/// Distinct values go through `BTreeSet`, so `CellValue` must be `Ord`, and
/// equality must agree with that ordering.
#[derive(Debug, Clone)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn rank(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                // Integers and floats interleave numerically.
                Integer(_) | Float(_) => 2,
                String(_) => 3,
            }
        }
        let ra = rank(self);
        let rb = rank(other);
        if ra != rb {
            return ra.cmp(&rb);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Integer(a), Float(b)) => (*a as f64).total_cmp(b).then(std::cmp::Ordering::Less),
            (Float(a), Integer(b)) => a.total_cmp(&(*b as f64)).then(std::cmp::Ordering::Greater),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Infer the type of a raw CSV field. Empty text is null.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            if f.is_nan() {
                return CellValue::Null;
            }
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    /// Numeric contribution to a column sum. Null and non-numeric cells
    /// count as zero.
    pub fn as_count(&self) -> f64 {
        match self {
            CellValue::Integer(i) => *i as f64,
            CellValue::Float(v) => *v,
            _ => 0.0,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// WorkerRecord / WorkerTable
// ---------------------------------------------------------------------------

/// One row of the source file, cells in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerRecord {
    pub cells: Vec<CellValue>,
}

/// The loaded dataset. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct WorkerTable {
    /// Normalized column names, in file order.
    pub columns: Vec<String>,
    pub rows: Vec<WorkerRecord>,
}

impl WorkerTable {
    /// Build a table, normalizing every header.
    pub fn new<S: AsRef<str>>(columns: &[S], rows: Vec<WorkerRecord>) -> Self {
        let columns = columns
            .iter()
            .map(|c| normalize_column_name(c.as_ref()))
            .collect();
        WorkerTable { columns, rows }
    }

    /// Position of a column by its normalized name. Duplicate names resolve to
    /// the first occurrence.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell at (`row`, `col`); rows shorter than the header yield null.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        static NULL: CellValue = CellValue::Null;
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(col))
            .unwrap_or(&NULL)
    }

    /// Sorted distinct non-null values of a column; empty if it is absent.
    pub fn distinct_values(&self, name: &str) -> BTreeSet<CellValue> {
        let Some(col) = self.column_index(name) else {
            return BTreeSet::new();
        };
        self.rows
            .iter()
            .filter_map(|r| r.cells.get(col))
            .filter(|v| !v.is_null())
            .cloned()
            .collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_collapses_spaces() {
        assert_eq!(
            normalize_column_name("  Main Workers  -   Rural - Persons "),
            "Main Workers - Rural - Persons"
        );
        assert_eq!(normalize_column_name("STATE"), "STATE");
        assert_eq!(normalize_column_name("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = [
            " STATE",
            "Industry  Classification ",
            "Marginal Workers -  Urban - Persons",
            "\tMain Workers - Urban - Persons\t",
        ];
        for h in raw {
            let once = normalize_column_name(h);
            assert_eq!(normalize_column_name(&once), once);
        }
    }

    #[test]
    fn parse_infers_cell_types() {
        assert_eq!(CellValue::parse(""), CellValue::Null);
        assert_eq!(CellValue::parse("42"), CellValue::Integer(42));
        assert_eq!(CellValue::parse("4.5"), CellValue::Float(4.5));
        assert_eq!(CellValue::parse("NaN"), CellValue::Null);
        assert_eq!(CellValue::parse("true"), CellValue::Bool(true));
        assert_eq!(
            CellValue::parse("Kerala"),
            CellValue::String("Kerala".to_string())
        );
    }

    #[test]
    fn non_numeric_cells_count_as_zero() {
        assert_eq!(CellValue::Null.as_count(), 0.0);
        assert_eq!(CellValue::String("n/a".into()).as_count(), 0.0);
        assert_eq!(CellValue::Integer(7).as_count(), 7.0);
        assert_eq!(CellValue::Float(2.5).as_count(), 2.5);
    }

    #[test]
    fn equality_agrees_with_ordering() {
        let pos = CellValue::Float(0.0);
        let neg = CellValue::Float(-0.0);
        assert_ne!(pos, neg);
        assert_eq!(pos.cmp(&neg), std::cmp::Ordering::Greater);
        assert_ne!(CellValue::Integer(1), CellValue::Float(1.0));
        assert_eq!(CellValue::Float(2.5), CellValue::Float(2.5));

        let set: BTreeSet<CellValue> = [pos.clone(), neg.clone(), pos.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn distinct_values_are_sorted_and_skip_nulls() {
        let row = |s: &str| WorkerRecord {
            cells: vec![CellValue::parse(s)],
        };
        let table = WorkerTable::new(&["STATE"], vec![row("b"), row(""), row("a"), row("b")]);
        let values: Vec<String> = table
            .distinct_values("STATE")
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
        assert!(table.distinct_values("missing").is_empty());
    }

    #[test]
    fn new_normalizes_headers_and_first_duplicate_wins() {
        let table = WorkerTable::new(&[" STATE ", "STATE"], Vec::new());
        assert_eq!(table.columns, vec!["STATE", "STATE"]);
        assert_eq!(table.column_index("STATE"), Some(0));
    }
}
