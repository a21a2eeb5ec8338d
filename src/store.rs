//! Input validation and artifact storage.
//!
//! The boundary around the core: checks an input file before it is parsed,
//! and writes, lists, and reads the produced triangle reports ("artifacts")
//! under an output directory.

use crate::error::{Result, TriangleError};
use log::debug;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem to name its artifact.
const ARTIFACT_SUFFIX: &str = "_CumulativeData.txt";

/// Checks that `path` names a usable claims file: the extension must be
/// exactly `.txt` or `.csv` (case-sensitive) and the file must exist and
/// contain at least one byte.
pub fn validate_input(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("txt") | Some("csv") => {}
        _ => {
            return Err(TriangleError::UnsupportedExtension {
                path: path.to_path_buf(),
            })
        }
    }

    let metadata = fs::metadata(path)?;
    if metadata.len() == 0 {
        return Err(TriangleError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Derives the artifact name for an input file:
/// `{input file stem}_CumulativeData.txt`.
pub fn artifact_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    format!("{}{}", stem, ARTIFACT_SUFFIX)
}

/// Writes the report lines to `out_dir/name`, one per text line with a
/// trailing newline, creating the directory if it does not exist. Returns
/// the path of the written artifact.
pub fn write_artifact(out_dir: &Path, name: &str, lines: &[String]) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(name);
    let mut writer = BufWriter::new(File::create(&path)?);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    debug!("wrote {} line(s) to {}", lines.len(), path.display());
    Ok(path)
}

/// Lists the names of stored artifacts, sorted for deterministic output.
/// A missing output directory lists as empty.
pub fn list_artifacts(out_dir: &Path) -> Result<Vec<String>> {
    if !out_dir.exists() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(out_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Reads a stored artifact by name. Only the file-name component of `name`
/// is honored, so a caller cannot escape the output directory.
pub fn read_artifact(out_dir: &Path, name: &str) -> Result<String> {
    let file_name = Path::new(name)
        .file_name()
        .ok_or_else(|| TriangleError::InvalidArtifactName {
            name: name.to_string(),
        })?;

    Ok(fs::read_to_string(out_dir.join(file_name))?)
}
