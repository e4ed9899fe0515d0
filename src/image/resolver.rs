//! Resolve a logical image reference to something displayable.

use std::path::PathBuf;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::attempt::{AttemptState, LoadAttempt};
use super::loader::{FsLoader, ImageLoader, modern_available};
use crate::config::SiteConfig;
use crate::debug;

/// Outcome of resolving one image path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImage {
    /// URL for the `<img src>`; the placeholder when every candidate failed.
    pub src: String,
    /// Modern-format URL to offer as a `<source>` hint, if the check found it.
    pub modern_hint: Option<String>,
    /// Whether the placeholder was substituted.
    pub exhausted: bool,
}

/// Candidate resolution plus load attempts, memoized per path.
///
/// Rendering runs on rayon workers and the same image (the placeholder in
/// particular) shows up on many pages, so results are cached.
pub struct ImageResolver<L = FsLoader> {
    loader: L,
    modern: String,
    placeholder: String,
    cache: Mutex<FxHashMap<String, ResolvedImage>>,
}

impl ImageResolver<FsLoader> {
    /// Resolver backed by the configured asset directory.
    pub fn from_config(config: &SiteConfig) -> Self {
        let images = &config.build.images;
        Self::new(
            FsLoader::new(assets_root(config), images.verify),
            &images.modern,
            &images.placeholder,
        )
    }
}

impl<L: ImageLoader> ImageResolver<L> {
    pub fn new(loader: L, modern: &str, placeholder: &str) -> Self {
        Self {
            loader,
            modern: modern.to_string(),
            placeholder: placeholder.to_string(),
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Resolve `path`, trying candidates in order and falling back to the
    /// placeholder.
    pub fn resolve(&self, path: &str) -> ResolvedImage {
        if let Some(hit) = self.cache.lock().get(path) {
            return hit.clone();
        }

        let resolved = self.resolve_uncached(path);
        self.cache
            .lock()
            .insert(path.to_string(), resolved.clone());
        resolved
    }

    fn resolve_uncached(&self, path: &str) -> ResolvedImage {
        let mut attempt = LoadAttempt::new(path, &self.modern);
        let candidates = attempt.candidates();
        let modern_hint =
            modern_available(path, candidates, &self.loader).then(|| candidates[0].clone());

        let state = attempt.run(
            &self.loader,
            |_| {},
            || debug!("image"; "no candidate of {} loads, using placeholder", path),
        );

        ResolvedImage {
            src: attempt.display_src(&self.placeholder).to_string(),
            modern_hint,
            exhausted: state == AttemptState::Exhausted,
        }
    }
}

/// Absolute asset directory for a config.
pub fn assets_root(config: &SiteConfig) -> PathBuf {
    config.root_join(&config.build.assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::loader::LoadError;
    use std::cell::Cell;

    struct Only(&'static [&'static str], Cell<usize>);

    impl ImageLoader for Only {
        fn load(&self, url: &str) -> Result<(), LoadError> {
            self.1.set(self.1.get() + 1);
            if self.0.contains(&url) {
                Ok(())
            } else {
                Err(LoadError::Missing(url.into()))
            }
        }
    }

    #[test]
    fn test_falls_back_to_sibling() {
        let resolver = ImageResolver::new(Only(&["/a.png"], Cell::new(0)), "webp", "/p.svg");
        let resolved = resolver.resolve("/a.jpg");
        assert_eq!(resolved.src, "/a.png");
        assert_eq!(resolved.modern_hint, None);
        assert!(!resolved.exhausted);
    }

    #[test]
    fn test_modern_preferred_and_hinted() {
        let resolver = ImageResolver::new(Only(&["/a.webp", "/a.jpg"], Cell::new(0)), "webp", "/p.svg");
        let resolved = resolver.resolve("/a.jpg");
        assert_eq!(resolved.src, "/a.webp");
        assert_eq!(resolved.modern_hint.as_deref(), Some("/a.webp"));
    }

    #[test]
    fn test_exhausted_uses_placeholder() {
        let resolver = ImageResolver::new(Only(&[], Cell::new(0)), "webp", "/p.svg");
        let resolved = resolver.resolve("/missing.jpg");
        assert_eq!(resolved.src, "/p.svg");
        assert!(resolved.exhausted);
    }

    #[test]
    fn test_results_are_memoized() {
        let resolver = ImageResolver::new(Only(&["/a.jpg"], Cell::new(0)), "webp", "/p.svg");
        resolver.resolve("/a.jpg");
        let calls = resolver.loader.1.get();
        resolver.resolve("/a.jpg");
        assert_eq!(resolver.loader.1.get(), calls);
    }
}
