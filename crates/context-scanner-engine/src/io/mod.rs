use std::fs;
use std::path::{Path, PathBuf};

/// File extensions ConTeXt sources use across MkII, MkIV and LMTX.
pub const CONTEXT_EXTENSIONS: &[&str] = &["tex", "mkii", "mkiv", "mkvi", "mkxl", "mklx"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a ConTeXt source file: {0}")]
    NotContextSource(PathBuf),
}

/// Returns true if the path has one of the [`CONTEXT_EXTENSIONS`].
pub fn is_context_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTEXT_EXTENSIONS.contains(&ext))
}

/// Read a ConTeXt source file and return its content
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !is_context_source(path) {
        return Err(IoError::NotContextSource(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for ConTeXt sources under `root`, sorted by path
pub fn scan_context_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::NotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_context_source(&path) {
            files.push(path);
        }
    }

    Ok(())
}
