//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build], [build.images]
//! │   ├── serve      # [serve]
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional: every field has a default, and without a
//! file the project root is the working directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, ServeConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, clear_clean_flag, init_config};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Running under `serve` (internal use only)
    #[serde(skip)]
    pub serving: bool,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildSectionConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory, or cwd when there is none.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                let mut config = Self::default();
                config.config_path = cwd.join(&cli.config);
                config
            }
        };

        config.build.validate_paths_or_bail()?;
        config.finalize(cli, &cwd);
        config.validate()?;
        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());

        self.apply_command_options(cli);
        self.normalize_paths(&root);
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    ///
    /// Shorthand for `config.root.join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Where the theme preference and other local state live.
    pub fn state_dir(&self) -> PathBuf {
        self.root_join(".folio")
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
                self.serving = true;
            }
            Commands::Query { .. } | Commands::Resolve { .. } | Commands::Theme { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        self.build.clean |= args.clean;
        Self::update_option(&mut self.build.output, args.output.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Make the root and build directories absolute.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.set_root(&root);
        self.config_path = normalize_path(&self.config_path);
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.assets = normalize_path(&root.join(&self.build.assets));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        self.serve.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

impl BuildSectionConfig {
    /// Relative-path check, run before paths are made absolute.
    fn validate_paths_or_bail(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.validate_paths(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root`, as `load` would produce.
#[cfg(test)]
pub fn test_config_at(root: &Path) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.config_path = root.join("folio.toml");
    config.normalize_paths(root);
    config
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_invalid_toml() {
        assert!(SiteConfig::parse_with_ignored("[site\ntitle = \"x\"").is_err());
    }

    #[test]
    fn test_parse_full() {
        let (config, ignored) = SiteConfig::parse_with_ignored(
            r#"
            [site]
            title = "Portfolio"
            url = "https://example.com"

            [build]
            output = "dist"

            [build.images]
            modern = "avif"

            [serve]
            port = 8000
            "#,
        )
        .unwrap();
        assert!(ignored.is_empty());
        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.images.modern, "avif");
        assert_eq!(config.serve.port, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        assert_eq!(config.root, Path::new(""));
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.root, Path::new("/custom/path"));
        assert_eq!(config.root_join("assets"), PathBuf::from("/custom/path/assets"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_cli_overrides() {
        let cli =
            Cli::try_parse_from(["folio", "serve", "--port", "9000", "--clean", "-o", "out"])
                .unwrap();
        let mut config = SiteConfig::default();
        config.apply_command_options(&cli);

        assert!(config.serving);
        assert!(config.build.clean);
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.build.output, PathBuf::from("out"));
    }

    #[test]
    fn test_paths_normalized_against_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.root, root);
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.build.assets, root.join("assets"));
        assert_eq!(config.state_dir(), root.join(".folio"));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = test_parse_config(
            "[site]\nurl = \"ftp://x\"\n[serve]\nport = 0\n[build.images]\nmodern = \"bmp\"",
        );
        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 3);
    }
}
