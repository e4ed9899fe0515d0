//! Candidate URLs for one logical image reference.
//!
//! `/images/hero.jpg` expands to:
//!
//! ```text
//! /images/hero.webp    preferred modern format
//! /images/hero.jpg     the path as written
//! /images/hero.jpeg    sibling formats, fixed order
//! /images/hero.png
//! ```
//!
//! The placeholder is never part of the list; the attempt state machine
//! substitutes it once every candidate has failed.

/// Modern format tried before anything else.
pub const MODERN_EXT: &str = "webp";

/// Ordered candidates for `path`. `modern` is the preferred extension
/// without the dot, [`MODERN_EXT`] unless configured otherwise.
///
/// Paths without an extension resolve to exactly `[path]`.
pub fn resolve_candidates(path: &str, modern: &str) -> Vec<String> {
    let Some((base, ext)) = split_ext(path) else {
        return vec![path.to_string()];
    };

    let mut candidates = Vec::with_capacity(5);
    push_unique(&mut candidates, format!("{base}.{modern}"));
    push_unique(&mut candidates, path.to_string());
    for sibling in siblings(&ext.to_ascii_lowercase()) {
        push_unique(&mut candidates, format!("{base}.{sibling}"));
    }
    candidates
}

/// Split `path` into `(base, ext)` at the last dot of the final segment.
///
/// Returns `None` when the final segment has no usable extension:
/// no dot, a leading dot (`.hidden`), or a trailing dot (`photo.`).
pub fn split_ext(path: &str) -> Option<(&str, &str)> {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    let name = &path[name_start..];
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    let split = name_start + dot;
    Some((&path[..split], &path[split + 1..]))
}

/// Declared sibling formats for a lowercased source extension.
fn siblings(ext: &str) -> &'static [&'static str] {
    match ext {
        "jpeg" => &["jpg", "png"],
        "jpg" => &["jpeg", "png"],
        "png" => &["jpg", "jpeg"],
        _ => &["jpg", "jpeg", "png"],
    }
}

fn push_unique(list: &mut Vec<String>, url: String) {
    if !list.contains(&url) {
        list.push(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpg_candidates() {
        assert_eq!(
            resolve_candidates("/images/hero.jpg", MODERN_EXT),
            vec![
                "/images/hero.webp",
                "/images/hero.jpg",
                "/images/hero.jpeg",
                "/images/hero.png",
            ]
        );
    }

    #[test]
    fn test_jpeg_and_png_siblings() {
        assert_eq!(
            resolve_candidates("a.jpeg", MODERN_EXT),
            vec!["a.webp", "a.jpeg", "a.jpg", "a.png"]
        );
        assert_eq!(
            resolve_candidates("a.png", MODERN_EXT),
            vec!["a.webp", "a.png", "a.jpg", "a.jpeg"]
        );
    }

    #[test]
    fn test_unknown_extension_offers_all_raster_siblings() {
        assert_eq!(
            resolve_candidates("/placeholder.svg", MODERN_EXT),
            vec![
                "/placeholder.webp",
                "/placeholder.svg",
                "/placeholder.jpg",
                "/placeholder.jpeg",
                "/placeholder.png",
            ]
        );
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(
            resolve_candidates("/img/Photo.JPG", MODERN_EXT),
            vec!["/img/Photo.webp", "/img/Photo.JPG", "/img/Photo.jpeg", "/img/Photo.png"]
        );
    }

    #[test]
    fn test_webp_source_not_listed_twice() {
        let candidates = resolve_candidates("/img/a.webp", MODERN_EXT);
        assert_eq!(candidates, vec!["/img/a.webp", "/img/a.jpg", "/img/a.jpeg", "/img/a.png"]);
    }

    #[test]
    fn test_no_extension_is_sole_candidate() {
        for path in ["/images/hero", "/img.v2/hero", "/images/.hidden", "photo.", ""] {
            assert_eq!(resolve_candidates(path, MODERN_EXT), vec![path.to_string()], "{path}");
        }
    }

    #[test]
    fn test_first_candidate_is_modern_with_same_base() {
        for path in ["/a/b.jpg", "c.png", "/x.y/z.gif", "rel/pic.JPEG", "/m.webp"] {
            let candidates = resolve_candidates(path, MODERN_EXT);
            let (base, _) = split_ext(path).unwrap();
            assert!(!candidates.is_empty());
            assert_eq!(candidates[0], format!("{base}.webp"));
            assert!(candidates.contains(&path.to_string()));
        }
    }

    #[test]
    fn test_custom_modern_format() {
        assert_eq!(
            resolve_candidates("/a.png", "avif"),
            vec!["/a.avif", "/a.png", "/a.jpg", "/a.jpeg"]
        );
    }

    #[test]
    fn test_split_ext() {
        assert_eq!(split_ext("/a/b.c.jpg"), Some(("/a/b.c", "jpg")));
        assert_eq!(split_ext("/a.b/c"), None);
        assert_eq!(split_ext("file.png"), Some(("file", "png")));
    }
}
