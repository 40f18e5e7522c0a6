use crate::error::Result;
use crate::models::AggregationResult;
use crate::utils::constants::{
    DEFAULT_BUFFER_SIZE, DEFAULT_OUTPUT_PARTITIONS, PART_FILE_PREFIX, SUCCESS_MARKER,
};
use crate::writers::formatter::ResultFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes formatted results into an output directory as `part-NNNNN` files
/// followed by an empty `_SUCCESS` marker.
pub struct TextWriter {
    partitions: usize,
    formatter: ResultFormatter,
}

impl TextWriter {
    pub fn new() -> Self {
        Self {
            partitions: DEFAULT_OUTPUT_PARTITIONS,
            formatter: ResultFormatter::new(),
        }
    }

    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    /// Replace any previous output in `dir` with `results`, split into
    /// contiguous chunks, one per partition file.
    pub fn write_results(&self, results: &[AggregationResult], dir: &Path) -> Result<OutputInfo> {
        fs::create_dir_all(dir)?;
        let removed = clear_previous_output(dir)?;
        if removed > 0 {
            debug!(removed, dir = %dir.display(), "removed previous output files");
        }

        let chunk_size = results.len().div_ceil(self.partitions).max(1);
        let mut chunks = results.chunks(chunk_size);

        let mut files = Vec::with_capacity(self.partitions);
        let mut bytes_written = 0u64;
        for index in 0..self.partitions {
            let path = dir.join(part_file_name(index));
            let chunk = chunks.next().unwrap_or(&[]);
            bytes_written += self.write_part(chunk, &path)?;
            files.push(path);
        }

        File::create(dir.join(SUCCESS_MARKER))?;

        info!(
            results = results.len(),
            files = files.len(),
            dir = %dir.display(),
            "output written"
        );

        Ok(OutputInfo {
            directory: dir.to_path_buf(),
            files,
            total_lines: results.len(),
            bytes_written,
        })
    }

    fn write_part(&self, results: &[AggregationResult], path: &Path) -> Result<u64> {
        let file = File::create(path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut bytes = 0u64;

        for result in results {
            let line = self.formatter.format(result);
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            bytes += line.len() as u64 + 1;
        }

        writer.flush()?;
        Ok(bytes)
    }
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn part_file_name(index: usize) -> String {
    format!("{}{:05}", PART_FILE_PREFIX, index)
}

/// Remove `part-*` files and the success marker left by an earlier run.
fn clear_previous_output(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let stale = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(PART_FILE_PREFIX) || name == SUCCESS_MARKER);
        if stale {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[derive(Debug, Clone)]
pub struct OutputInfo {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
    pub total_lines: usize,
    pub bytes_written: u64,
}

impl OutputInfo {
    pub fn summary(&self) -> String {
        format!(
            "Output Summary:\n\
            - Directory: {}\n\
            - Part files: {}\n\
            - Result lines: {}\n\
            - Size: {:.2} KB",
            self.directory.display(),
            self.files.len(),
            self.total_lines,
            self.bytes_written as f64 / 1024.0
        )
    }
}
