//! Encrypted backup export/import
//!
//! The portable interchange format: a versioned wrapper around an
//! encrypted blob. Imports are structurally validated before any data can
//! replace the live plan.

pub mod export;
pub mod import;
pub mod validation;

pub use export::{export_encrypted, suggested_filename, write_backup_file, BackupFile,
    BACKUP_FORMAT_VERSION};
pub use import::{import_encrypted, read_backup_file};
pub use validation::validate_plan_shape;
