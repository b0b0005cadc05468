//! Project manifest (tilify.yaml) parsing.
//!
//! The manifest holds project defaults for every tileset option plus the
//! output directory. Every field is optional; unset fields fall through to
//! the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TilifyError};
use crate::types::{
    Colour, Pattern, DEFAULT_SHADOW_INTENSITY, DEFAULT_SHADOW_THICKNESS, DEFAULT_WALL_THICKNESS,
};

/// Project manifest loaded from tilify.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Directory derived output paths are placed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    /// Tile width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Tile height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Tiles per source block, horizontally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,

    /// Tiles per source block, vertically.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    /// Wall thickness as a fraction of the half tile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural: Option<f64>,

    #[serde(skip_serializing_if = "ShadowSection::is_empty")]
    pub shadow: ShadowSection,
}

/// Undershadow settings of the manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,

    /// Shadow colour as a 6-digit hex string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Colour>,
}

impl ShadowSection {
    pub fn is_empty(&self) -> bool {
        self.thickness.is_none() && self.intensity.is_none() && self.color.is_none()
    }
}

impl Manifest {
    /// A manifest spelling out every built-in default.
    pub fn with_defaults() -> Self {
        let pattern = Pattern::default();
        let (width, height) = pattern.default_tile_size();
        Self {
            output: None,
            pattern: Some(pattern),
            width: Some(width),
            height: Some(height),
            columns: Some(1),
            rows: Some(1),
            thickness: Some(DEFAULT_WALL_THICKNESS),
            natural: Some(0.0),
            shadow: ShadowSection {
                thickness: Some(DEFAULT_SHADOW_THICKNESS),
                intensity: Some(DEFAULT_SHADOW_INTENSITY),
                color: Some(Colour::BLACK),
            },
        }
    }

    /// Load manifest from a tilify.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TilifyError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| {
            TilifyError::config(
                format!("Invalid manifest: {}", e),
                Some("Check tilify.yaml syntax; colours must be quoted hex strings"),
            )
        })
    }

    /// Serialize the manifest as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TilifyError::config(format!("Failed to serialize manifest: {}", e), None)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, Some(PathBuf::from("build")));
        assert!(manifest.pattern.is_none());
        assert!(manifest.shadow.is_empty());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: dist/tiles
pattern: orthogonal
width: 32
height: 24
columns: 2
rows: 3
thickness: 0.25
natural: 0.1
shadow:
  thickness: 0.2
  intensity: 0.75
  color: "1a1a2e"
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, Some(PathBuf::from("dist/tiles")));
        assert_eq!(manifest.pattern, Some(Pattern::Orthogonal));
        assert_eq!((manifest.width, manifest.height), (Some(32), Some(24)));
        assert_eq!((manifest.columns, manifest.rows), (Some(2), Some(3)));
        assert_eq!(manifest.thickness, Some(0.25));
        assert_eq!(manifest.natural, Some(0.1));
        assert_eq!(manifest.shadow.thickness, Some(0.2));
        assert_eq!(manifest.shadow.intensity, Some(0.75));
        assert_eq!(manifest.shadow.color, Some(Colour::rgb(0x1a, 0x1a, 0x2e)));
    }

    #[test]
    fn test_parse_hex_pattern() {
        let manifest = Manifest::parse("pattern: hexv").unwrap();
        assert_eq!(manifest.pattern, Some(Pattern::HexVertical));
    }

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(Manifest::parse("").unwrap(), Manifest::default());
        assert_eq!(Manifest::parse("\n  \n").unwrap(), Manifest::default());
    }

    #[test]
    fn test_parse_invalid_colour() {
        let err = Manifest::parse("shadow:\n  color: \"zzzzzz\"").unwrap_err();
        assert!(matches!(err, TilifyError::Config { .. }));
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = Manifest::parse("thicknes: 0.3").unwrap_err();
        assert!(matches!(err, TilifyError::Config { .. }));
    }

    #[test]
    fn test_defaults_roundtrip() {
        let defaults = Manifest::with_defaults();
        let yaml = defaults.to_yaml().unwrap();
        assert!(yaml.contains("pattern: orthogonal"));
        assert!(yaml.contains("thickness: 0.5"));
        assert!(!yaml.contains("output"));

        assert_eq!(Manifest::parse(&yaml).unwrap(), defaults);
    }

    #[test]
    fn test_default_manifest_serializes_empty() {
        let yaml = Manifest::default().to_yaml().unwrap();
        assert_eq!(yaml.trim(), "{}");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Manifest::load(Path::new("/nonexistent/tilify.yaml")).unwrap_err();
        assert!(matches!(err, TilifyError::Io { .. }));
    }
}
