//! Shared testing utilities for kubeadm-config CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for CLI invocations.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `kubeadm-config` binary.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("kubeadm-config").expect("Failed to locate kubeadm-config binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write a file relative to the working directory.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the working directory.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir().join(relative)).expect("Failed to read test file")
    }
}

/// Expected output for cluster `kind` at `v1.18.2` without a unified image.
pub const DEFAULT_CONFIG_GOLDEN: &str = include_str!("../fixtures/default_config.golden");

/// Expected output for image `myimage` at `v1.18.2+abc`.
pub const UNIFIED_IMAGE_CONFIG_GOLDEN: &str =
    include_str!("../fixtures/unified_image_config.golden");
