use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{CellValue, WorkerRecord, WorkerTable};
use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the worker dataset from a CSV file, wrapping any failure as
/// [`DashboardError::Load`].
pub fn load_dataset(path: &Path) -> Result<WorkerTable, DashboardError> {
    let table = load_csv(path).map_err(|reason| DashboardError::Load {
        path: path.to_path_buf(),
        reason,
    })?;
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.columns,
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: one header row, then one record per row.
/// Header names are normalized; every field is type-inferred.
pub fn load_csv(path: &Path) -> Result<WorkerTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_csv(file)
}

/// Parse CSV from any reader. Records with a different field count than the
/// header are rejected.
pub fn read_csv<R: Read>(source: R) -> Result<WorkerTable> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cells = record.iter().map(CellValue::parse).collect();
        rows.push(WorkerRecord { cells });
    }

    Ok(WorkerTable::new(&headers, rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::{MAIN_RURAL_COLUMN, STATE_COLUMN};

    const SAMPLE: &str = "\
 STATE ,Industry  Classification,Main Workers  - Rural - Persons
Kerala,Agriculture,120
Goa,Mining,
";

    #[test]
    fn headers_are_normalized_on_load() {
        let table = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            table.columns,
            vec![STATE_COLUMN, "Industry Classification", MAIN_RURAL_COLUMN]
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_fields_load_as_null() {
        let table = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(*table.cell(0, 2), CellValue::Integer(120));
        assert_eq!(*table.cell(1, 2), CellValue::Null);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let ragged = "STATE,Industry Classification\nKerala\n";
        assert!(read_csv(ragged.as_bytes()).is_err());
    }

    #[test]
    fn load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = load_dataset(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("structured_classified.csv");
        match load_dataset(&path) {
            Err(DashboardError::Load { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected load error, got {other:?}"),
        }
    }
}
