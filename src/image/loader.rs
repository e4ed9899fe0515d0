//! Loading candidates from the asset directory.

use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;
use thiserror::Error;

use super::attempt::{AttemptState, attempt_load};
use super::candidates::split_ext;

/// Raster formats whose headers the `image` crate can check.
const DECODABLE: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Why a single candidate failed to load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("`{0}` not found")]
    Missing(String),

    #[error("`{0}` resolves outside the asset directory")]
    Outside(String),

    #[error("`{0}` is not a decodable image")]
    Undecodable(String, #[source] image::ImageError),

    #[error("IO error when reading `{0}`")]
    Io(String, #[source] std::io::Error),
}

/// Something that can tell whether a candidate URL loads.
///
/// The real platform signals success or failure asynchronously; at build
/// time the answer is available immediately.
pub trait ImageLoader {
    fn load(&self, url: &str) -> Result<(), LoadError>;
}

/// Loads site-root URLs (`/images/a.jpg`) from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
    verify: bool,
}

impl FsLoader {
    /// `verify` additionally reads image headers for known raster formats.
    pub fn new(root: impl Into<PathBuf>, verify: bool) -> Self {
        Self {
            root: root.into(),
            verify,
        }
    }

    /// Map a URL to a file under the root, refusing anything that escapes it.
    fn locate(&self, url: &str) -> Result<PathBuf, LoadError> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let decoded = percent_decode_str(path).decode_utf8_lossy();
        let relative = Path::new(decoded.trim_start_matches('/'));

        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(LoadError::Outside(url.to_string()));
        }
        Ok(self.root.join(relative))
    }

    fn check_decodable(url: &str, path: &Path) -> Result<(), LoadError> {
        let io_err = |e| LoadError::Io(url.to_string(), e);
        image::ImageReader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?
            .into_dimensions()
            .map_err(|e| LoadError::Undecodable(url.to_string(), e))?;
        Ok(())
    }
}

impl ImageLoader for FsLoader {
    fn load(&self, url: &str) -> Result<(), LoadError> {
        let path = self.locate(url)?;
        if !path.is_file() {
            return Err(LoadError::Missing(url.to_string()));
        }

        let decodable = split_ext(url)
            .is_some_and(|(_, ext)| DECODABLE.contains(&ext.to_ascii_lowercase().as_str()));
        if self.verify && decodable {
            Self::check_decodable(url, &path)?;
        }
        Ok(())
    }
}

/// Modern-format availability check.
///
/// A one-candidate sequence of its own over the modern variant, run once
/// per path and independent of the main attempt sequence. A `true` result
/// only means a format hint may be offered next to the image; it says
/// nothing about which candidate ends up displayed.
pub fn modern_available<L: ImageLoader + ?Sized>(
    path: &str,
    candidates: &[String],
    loader: &L,
) -> bool {
    if split_ext(path).is_none() {
        return false;
    }
    let modern = &candidates[..candidates.len().min(1)];
    attempt_load(modern, loader, |_| {}, || {}) == AttemptState::Succeeded(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::candidates::{MODERN_EXT, resolve_candidates};
    use std::fs;
    use tempfile::TempDir;

    fn write_png(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image::RgbImage::new(2, 2).save(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let loader = FsLoader::new(temp.path(), true);
        assert!(matches!(loader.load("/nope.png"), Err(LoadError::Missing(_))));
    }

    #[test]
    fn test_valid_png_loads() {
        let temp = TempDir::new().unwrap();
        write_png(&temp.path().join("images/a.png"));
        let loader = FsLoader::new(temp.path(), true);
        assert!(loader.load("/images/a.png").is_ok());
        assert!(loader.load("/images/a.png?v=2").is_ok());
    }

    #[test]
    fn test_corrupt_raster_rejected_only_when_verifying() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.jpg"), b"not a jpeg").unwrap();

        let strict = FsLoader::new(temp.path(), true);
        assert!(strict.load("/broken.jpg").is_err());

        let lenient = FsLoader::new(temp.path(), false);
        assert!(lenient.load("/broken.jpg").is_ok());
    }

    #[test]
    fn test_svg_only_needs_to_exist() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("placeholder.svg"), "<svg/>").unwrap();
        let loader = FsLoader::new(temp.path(), true);
        assert!(loader.load("/placeholder.svg").is_ok());
    }

    #[test]
    fn test_traversal_rejected() {
        let temp = TempDir::new().unwrap();
        let loader = FsLoader::new(temp.path().join("assets"), false);
        assert!(matches!(
            loader.load("/../secret.png"),
            Err(LoadError::Outside(_))
        ));
        assert!(matches!(
            loader.load("/%2E%2E/secret.png"),
            Err(LoadError::Outside(_))
        ));
    }

    #[test]
    fn test_modern_check_is_independent_of_original() {
        let temp = TempDir::new().unwrap();
        write_png(&temp.path().join("a.png"));
        let loader = FsLoader::new(temp.path(), true);

        let candidates = resolve_candidates("/a.png", MODERN_EXT);
        assert!(!modern_available("/a.png", &candidates, &loader));

        image::RgbImage::new(1, 1)
            .save_with_format(temp.path().join("a.webp"), image::ImageFormat::WebP)
            .unwrap();
        assert!(modern_available("/a.png", &candidates, &loader));
    }

    #[test]
    fn test_modern_check_skipped_without_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("logo"), b"x").unwrap();
        let loader = FsLoader::new(temp.path(), false);
        assert!(!modern_available("/logo", &resolve_candidates("/logo", MODERN_EXT), &loader));
    }
}
