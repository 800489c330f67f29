use crate::error::{Result, ScanError};
use std::fs;
use std::io;
use std::path::Path;

/// Read the whole input file into newline-stripped lines, preserving order
/// and blank lines.
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScanError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    Ok(contents.lines().map(str::to_string).collect())
}
