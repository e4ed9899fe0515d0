//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"           # Output directory for generated HTML (relative to site root)
//! assets = "assets"           # Static assets directory (relative to site root)
//! clean = false               # Remove the output directory before building
//!
//! [build.images]
//! modern = "webp"             # Preferred format tried first: webp | avif | png | jpg | jpeg
//! placeholder = "/placeholder.svg"
//! verify = true               # Decode headers, not just check existence
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::image::MODERN_EXT;

/// Formats accepted as `build.images.modern`.
const MODERN_FORMATS: &[&str] = &["webp", "avif", "png", "jpg", "jpeg"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Build output directory.
    pub output: PathBuf,

    /// Static assets copied verbatim into the output.
    pub assets: PathBuf,

    /// Clean output directory before building.
    pub clean: bool,

    pub images: ImagesConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            assets: "assets".into(),
            clean: false,
            images: ImagesConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const ASSETS: FieldPath = FieldPath::new("build.assets");

    /// Validate raw paths before they are joined with the project root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [(Self::OUTPUT, &self.output), (Self::ASSETS, &self.assets)] {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("'{}' must be relative to the project root", path.display()),
                    "remove the leading '/'",
                );
            }
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.output == self.assets {
            diag.error(
                Self::OUTPUT,
                format!("{} and {} must be different directories", Self::OUTPUT, Self::ASSETS),
            );
        }
        self.images.validate(diag);
    }
}

/// `[build.images]`: image candidate resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    /// Extension tried before the original one.
    pub modern: String,

    /// Site-root URL shown when no candidate loads.
    pub placeholder: String,

    /// Decode image headers instead of only checking that files exist.
    pub verify: bool,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            modern: MODERN_EXT.into(),
            placeholder: "/placeholder.svg".into(),
            verify: true,
        }
    }
}

impl ImagesConfig {
    pub const MODERN: FieldPath = FieldPath::new("build.images.modern");
    pub const PLACEHOLDER: FieldPath = FieldPath::new("build.images.placeholder");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !MODERN_FORMATS.contains(&self.modern.as_str()) {
            diag.error_with_hint(
                Self::MODERN,
                format!("unsupported format '{}'", self.modern),
                format!("use one of: {}", MODERN_FORMATS.join(", ")),
            );
        }

        if !self.placeholder.starts_with('/') {
            diag.error_with_hint(
                Self::PLACEHOLDER,
                format!("'{}' is not a site-root URL", self.placeholder),
                format!("e.g. \"/{}\"", self.placeholder.trim_start_matches("./")),
            );
        }
    }
}
