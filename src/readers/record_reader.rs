use crate::error::{ProcessingError, Result};
use crate::models::{StationRecord, WeatherRecord};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use validator::Validate;

/// A record type that can be loaded from a headered CSV source.
pub trait SourceRecord: DeserializeOwned + Send {
    const KIND: &'static str;

    fn check(&self) -> Result<()>;
}

impl SourceRecord for StationRecord {
    const KIND: &'static str = "station";

    fn check(&self) -> Result<()> {
        self.validate()?;
        Ok(())
    }
}

impl SourceRecord for WeatherRecord {
    const KIND: &'static str = "weather";

    fn check(&self) -> Result<()> {
        self.validate_readings()
    }
}

/// Reads already-parsed station or weather records from CSV.
pub struct RecordReader;

impl RecordReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every record under `path`, which may be a file or a directory.
    /// Directory entries are read in parallel and concatenated in name order.
    pub fn read_path<T: SourceRecord>(&self, path: &Path) -> Result<Vec<T>> {
        let files = list_input_files(path)?;
        debug!(kind = T::KIND, files = files.len(), path = %path.display(), "reading input");

        let per_file: Vec<Vec<T>> = files
            .par_iter()
            .map(|file| self.read_file(file))
            .collect::<Result<Vec<_>>>()?;

        Ok(per_file.into_iter().flatten().collect())
    }

    pub fn read_file<T: SourceRecord>(&self, path: &Path) -> Result<Vec<T>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .buffer_capacity(DEFAULT_BUFFER_SIZE)
            .from_path(path)?;

        let mut records = Vec::new();
        for (index, result) in reader.deserialize::<T>().enumerate() {
            let record = result?;
            record.check().map_err(|e| {
                ProcessingError::InvalidFormat(format!(
                    "{}: {} record {}: {}",
                    path.display(),
                    T::KIND,
                    index + 1,
                    e
                ))
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand an input location into the files to read.
///
/// A directory yields its regular files, skipping names that start with `.`
/// or `_` (hidden files and job markers), sorted by name.
pub fn list_input_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(ProcessingError::MissingData(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }

        let skipped = entry_path
            .file_name()
            .and_then(|name| name.to_str())
            .map_or(true, |name| name.starts_with('.') || name.starts_with('_'));
        if !skipped {
            files.push(entry_path);
        }
    }

    files.sort();
    Ok(files)
}
