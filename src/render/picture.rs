//! `<picture>` markup for resolved images.

use std::fmt::Write;

use crate::image::{ImageResolver, SizePreset, candidates::split_ext};
use crate::utils::{html::escape_attr, mime};

/// Resolve `path` and emit a `<picture>` with an optional modern `<source>`.
pub fn picture(images: &ImageResolver, path: &str, alt: &str, size: SizePreset) -> String {
    let resolved = images.resolve(path);
    let mut html = String::from("<picture>");

    if let Some(hint) = &resolved.modern_hint {
        let _ = write!(html, "<source srcset=\"{}\"", escape_attr(hint));
        if let Some(ty) = split_ext(hint).and_then(|(_, ext)| mime::image_type(ext)) {
            let _ = write!(html, " type=\"{ty}\"");
        }
        html.push('>');
    }

    let _ = write!(
        html,
        "<img src=\"{}\" alt=\"{}\" sizes=\"{}\" loading=\"{}\" decoding=\"async\"",
        escape_attr(&resolved.src),
        escape_attr(alt),
        size.as_str(),
        size.loading(),
    );
    if resolved.exhausted {
        html.push_str(" class=\"placeholder\"");
    }
    html.push_str("></picture>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::resolver;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_image_uses_placeholder() {
        let dir = TempDir::new().unwrap();
        let html = picture(&resolver(dir.path()), "/images/a.jpeg", "A \"quote\"", SizePreset::Card);

        assert!(html.contains(r#"src="/placeholder.svg""#));
        assert!(html.contains(r#"alt="A &quot;quote&quot;""#));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(r#"class="placeholder""#));
        assert!(!html.contains("<source"));
    }

    #[test]
    fn test_modern_sibling_becomes_source() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/a.webp"), b"x").unwrap();
        fs::write(dir.path().join("images/a.jpeg"), b"x").unwrap();

        let html = picture(&resolver(dir.path()), "/images/a.jpeg", "a", SizePreset::Hero);
        assert!(html.contains(r#"<source srcset="/images/a.webp" type="image/webp">"#));
        assert!(html.contains(r#"loading="eager""#));
        assert!(!html.contains("placeholder"));
    }
}
