use crate::ports::FileStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: FileStore> {
    files: F,
}

impl<F: FileStore> AppContext<F> {
    /// Create a new application context.
    pub fn new(files: F) -> Self {
        Self { files }
    }

    /// Get a reference to the file store.
    pub fn files(&self) -> &F {
        &self.files
    }
}
