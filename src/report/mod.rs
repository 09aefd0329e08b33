//! Report module - Text rendering and JSON export

mod text;

pub use text::{rank_label, render_contest, render_survey};

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a structured report as pretty-printed JSON.
pub fn write_json<T: Serialize>(report: &T, output_path: &Path) -> Result<(), ReportError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    log::info!("Report written: {}", output_path.display());
    Ok(())
}
