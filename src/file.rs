// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not serialize providers: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not write delimited output: {0}")]
    Delimited(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write `bytes` to `path`, creating parent directories as needed.
/// Returns the path written to.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<PathBuf, OutputError> {
    let path = PathBuf::from(normalize_separators(&path.to_string_lossy()));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, bytes).map_err(|source| OutputError::Write { path: path.clone(), source })?;
    logf!("Output: wrote {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), OutputError> {
    if dir.exists() && !dir.is_dir() {
        return Err(OutputError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| OutputError::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_output_creates_parents() {
        let base = std::env::temp_dir().join(format!("provider_dir_file_{}", std::process::id()));
        let target = base.join("nested").join("out.txt");
        let written = write_output(&target, b"hello").unwrap();
        assert_eq!(fs::read_to_string(&written).unwrap(), "hello");
        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn file_where_directory_expected() {
        let base = std::env::temp_dir().join(format!("provider_dir_notdir_{}", std::process::id()));
        fs::create_dir_all(&base).unwrap();
        let blocker = base.join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let err = write_output(&blocker.join("out.txt"), b"y").unwrap_err();
        assert!(matches!(err, OutputError::NotADirectory(_)));
        let _ = fs::remove_dir_all(&base);
    }
}
