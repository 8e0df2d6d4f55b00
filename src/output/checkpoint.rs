//! Periodic checkpointing of the in-flight accumulator
//!
//! The checkpoint exists purely for crash recovery: if the process dies
//! mid-run, the last saved snapshot is the only recoverable artifact. A
//! failed checkpoint write is logged and ignored; only the final output
//! write may fail the run.

use crate::output::write_records;
use crate::records::PoemRecord;
use std::path::{Path, PathBuf};

/// Writes the full pre-dedup accumulator whenever its size hits an exact
/// positive multiple of the configured interval.
#[derive(Debug)]
pub struct CheckpointWriter {
    path: PathBuf,
    interval: usize,
}

impl CheckpointWriter {
    pub fn new(path: &Path, interval: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            interval,
        }
    }

    /// Saves a checkpoint if the accumulator size is due
    ///
    /// Returns whether a checkpoint file was written.
    pub fn maybe_save(&self, records: &[PoemRecord]) -> bool {
        if records.is_empty() || self.interval == 0 || records.len() % self.interval != 0 {
            return false;
        }

        match write_records(&self.path, records) {
            Ok(()) => {
                tracing::info!(
                    count = records.len(),
                    path = %self.path.display(),
                    "checkpoint saved"
                );
                true
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "checkpoint write failed: {}",
                    error
                );
                false
            }
        }
    }
}
