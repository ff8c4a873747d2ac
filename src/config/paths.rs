//! Path management for the binder
//!
//! Provides platform-appropriate path resolution for the single plan record.
//!
//! ## Path Resolution Order
//!
//! 1. `BINDER_DATA_DIR` environment variable (if set)
//! 2. Platform config directory (`~/.config/binder-cli` on Linux,
//!    `Library/Application Support` on macOS, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BinderError;

/// Manages all paths used by the binder
#[derive(Debug, Clone)]
pub struct BinderPaths {
    /// Base directory for all binder data
    base_dir: PathBuf,
}

impl BinderPaths {
    /// Create a new BinderPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BinderError> {
        let base_dir = if let Ok(custom) = std::env::var("BINDER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BinderPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the single plan record
    pub fn plan_file(&self) -> PathBuf {
        self.data_dir().join("plan.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BinderError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BinderError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BinderError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory from the platform config location
fn resolve_default_path() -> Result<PathBuf, BinderError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| BinderError::Io("Could not determine home directory".to_string()))?;
    Ok(dirs.config_dir().join("binder-cli"))
}
