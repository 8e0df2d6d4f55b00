//! Record persistence
//!
//! Both the final collection and the checkpoint use the same on-disk
//! shape: a pretty-printed JSON array of poem records with non-ASCII
//! preserved. Only the paths differ; the checkpoint is overwritten
//! wholesale on each save and is not an authoritative artifact.

mod checkpoint;

pub use checkpoint::CheckpointWriter;

use crate::records::PoemRecord;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes a record collection as pretty-printed JSON
///
/// # Arguments
///
/// * `path` - Destination file, created or truncated
/// * `records` - The records to persist, in order
///
/// # Returns
///
/// * `Ok(())` - The file was written and flushed
/// * `Err(ScrapeError)` - The file could not be created or encoded
pub fn write_records(path: &Path, records: &[PoemRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PoemRecord {
        PoemRecord {
            author: "Rubén Darío — Poemas".to_string(),
            title: "Canción de otoño en primavera".to_string(),
            body: "Juventud, divino tesoro,\n¡ya te vas para no volver!".to_string(),
            source: "https://amediavoz.com/dario.htm".to_string(),
        }
    }

    #[test]
    fn test_write_records_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.json");

        let records = vec![sample_record()];
        write_records(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<PoemRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_write_records_preserves_non_ascii() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.json");

        write_records(&path, &[sample_record()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Accented characters are stored raw, not \u-escaped
        assert!(content.contains("Rubén Darío"));
        assert!(content.contains("¡ya te vas para no volver!"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn test_write_records_uses_exact_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.json");

        write_records(&path, &[sample_record()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        for field in ["\"author\"", "\"title\"", "\"body\"", "\"source\""] {
            assert!(content.contains(field), "missing field {}", field);
        }
    }

    #[test]
    fn test_write_records_is_indented() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.json");

        write_records(&path, &[sample_record()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  "));
    }

    #[test]
    fn test_write_records_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poems.json");

        write_records(&path, &[]).unwrap();
        let parsed: Vec<PoemRecord> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_write_records_unwritable_path_errors() {
        let result = write_records(Path::new("/nonexistent/dir/poems.json"), &[]);
        assert!(result.is_err());
    }
}
