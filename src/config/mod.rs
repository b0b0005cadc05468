//! Configuration for tilify runs.
//!
//! Options come from the command line, a `tilify.yaml` manifest, and the
//! built-in defaults, in that order of precedence.

mod manifest;
mod settings;

use std::path::Path;

use crate::error::{Result, TilifyError};

pub use manifest::{Manifest, ShadowSection};
pub use settings::{resolve, Overrides, Settings};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "tilify.yaml";

/// Load the manifest for a run.
///
/// An explicit path must exist. Otherwise `tilify.yaml` in `dir` is used
/// when present, and the empty manifest when not.
pub fn load_manifest(explicit: Option<&Path>, dir: &Path) -> Result<Manifest> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(TilifyError::Io {
                path: path.to_path_buf(),
                message: "Manifest not found".to_string(),
            });
        }
        return Manifest::load(path);
    }

    let path = dir.join(MANIFEST_FILENAME);
    if path.exists() {
        Manifest::load(&path)
    } else {
        Ok(Manifest::default())
    }
}
