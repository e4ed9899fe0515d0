//! URL to output file resolution.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Map a request URL to a file under `root`.
///
/// Directories resolve to their `index.html`. Anything that does not exist
/// or escapes `root` (`..`, symlinks) gives `None`.
pub fn resolve_path(url: &str, root: &Path) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    let relative = decoded.trim_matches('/');
    if relative.split('/').any(|segment| segment == "..") {
        return None;
    }

    let root = root.canonicalize().ok()?;
    let local = root.join(relative).canonicalize().ok()?;
    if !local.starts_with(&root) {
        return None;
    }

    if local.is_dir() {
        let index = local.join("index.html");
        return index.is_file().then_some(index);
    }
    local.is_file().then_some(local)
}
