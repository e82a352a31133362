use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory {path}: {reason}")]
    InvalidDir { path: PathBuf, reason: String },
    #[error("Path {path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
    #[error("Cannot map path {path}: {reason}")]
    InvalidPath { path: PathBuf, reason: String },
}

/// Read a text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a text file, creating parent directories if they don't exist
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Delete a directory tree if it exists. Returns whether anything was removed.
pub fn reset_dir(path: &Path) -> Result<bool, IoError> {
    if !path.exists() {
        return Ok(false);
    }
    log::info!("Deleting {}...", path.display());
    fs::remove_dir_all(path).map_err(IoError::Io)?;
    Ok(true)
}

/// Recursively copy every file under `src` into `dst`.
///
/// Returns the destination paths of copied files, in visit order.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(src)?;

    let mut copied = Vec::new();
    copy_directory_recursive(src, dst, &mut copied)?;
    Ok(copied)
}

fn copy_directory_recursive(
    src: &Path,
    dst: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    fs::create_dir_all(dst).map_err(IoError::Io)?;

    for src_path in sorted_entries(src)? {
        let Some(name) = src_path.file_name() else {
            continue;
        };
        let dst_path = dst.join(name);

        if src_path.is_dir() {
            copy_directory_recursive(&src_path, &dst_path, copied)?;
        } else {
            log::info!(" * {} -> {}", src_path.display(), dst_path.display());
            fs::copy(&src_path, &dst_path).map_err(IoError::Io)?;
            copied.push(dst_path);
        }
    }

    Ok(())
}

/// Scan for markdown files under `root`, sorted by path
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for path in sorted_entries(dir)? {
        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        } else {
            log::debug!("Skipping non-markdown file {}", path.display());
        }
    }

    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut paths = fs::read_dir(dir)
        .map_err(IoError::Io)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(IoError::Io)?;
    paths.sort();
    Ok(paths)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir {
            path: path.to_path_buf(),
            reason: "directory does not exist".to_string(),
        });
    }

    Ok(())
}
