//! Artifact persistence.
//!
//! Mappings and reports are stored as pretty-printed JSON files, one file per
//! run, named after the client and the artifact's timestamp unless the caller
//! picks a name.

mod files;

// Re-export public API
pub use files::{default_filename, load_mapping, save_mapping, save_report, ArtifactKind};
