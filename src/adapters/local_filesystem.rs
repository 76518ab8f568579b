//! `FileStore` implementation backed by the local filesystem.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::FileStore;

/// Reads and writes paths as given, relative to the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl FileStore for LocalFilesystem {
    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(path, content).map_err(AppError::from)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
