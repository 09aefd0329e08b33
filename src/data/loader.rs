//! CSV Data Loader Module
//! Handles CSV file loading using Polars, keeping every cell as raw text.

use super::dataset::{Dataset, Record};
use polars::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Loads CSV files into string-valued datasets.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file. The header row becomes the column schema.
    pub fn load_csv(path: &Path) -> Result<Dataset, LoaderError> {
        if !path.is_file() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        // Schema inference disabled: every column is read as String.
        // Cells past the header width are dropped.
        let read = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .map_parse_options(|o| o.with_truncate_ragged_lines(true))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish();

        let df = match read {
            Ok(df) => df,
            Err(PolarsError::NoData(_)) => {
                log::warn!("{} has no header or rows", path.display());
                return Ok(Dataset::empty());
            }
            Err(e) => return Err(e.into()),
        };

        let dataset = Self::from_dataframe(&df)?;
        log::info!(
            "Loaded {} rows x {} columns from {}",
            dataset.len(),
            dataset.columns().len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Convert a DataFrame into records. Null cells become "".
    pub fn from_dataframe(df: &DataFrame) -> Result<Dataset, LoaderError> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows: Vec<HashMap<String, String>> = vec![HashMap::new(); df.height()];

        for column in df.get_columns() {
            let name = column.name().to_string();
            let text = column.cast(&DataType::String)?;
            let values = text.as_materialized_series().str()?;

            for (row, value) in rows.iter_mut().zip(values.into_iter()) {
                row.insert(name.clone(), value.unwrap_or_default().to_string());
            }
        }

        let records = rows.into_iter().map(Record::new).collect();
        Ok(Dataset::new(columns, records))
    }
}
