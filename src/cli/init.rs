//! Init command implementation.
//!
//! Generates a `tilify.yaml` manifest spelling out the default options.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Manifest, MANIFEST_FILENAME};
use crate::error::{Result, TilifyError};
use crate::output::{display_path, Printer};

/// Initialize a tilify project (generates tilify.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the manifest to (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing tilify.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(TilifyError::config(
            format!("{} already exists", MANIFEST_FILENAME),
            Some("Use --force to overwrite"),
        ));
    }

    let yaml = Manifest::with_defaults().to_yaml()?;

    fs::write(&manifest_path, &yaml).map_err(|e| TilifyError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success("Created", &display_path(&manifest_path));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let manifest_path = dir.path().join(MANIFEST_FILENAME);
        let manifest = Manifest::load(&manifest_path).unwrap();
        assert_eq!(manifest, Manifest::with_defaults());

        let content = fs::read_to_string(&manifest_path).unwrap();
        assert!(content.contains("width: 100"));
        assert!(content.contains("shadow:"));
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "width: 8").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &Printer::new());
        assert!(result.is_err());

        // Untouched
        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(content, "width: 8");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "width: 8").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("width: 100"));
    }
}
