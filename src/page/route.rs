//! Route table: URL <-> page <-> output file.
//!
//! ```text
//! /                      Home
//! /writing/              WritingsIndex (same view as Home)
//! /writings/{category}/  Writings
//! /writing/{id}/         Writing
//! /books/                Books
//! /journey/              Journey
//! /impact/               Impact
//! /speaker/              Speaker
//! /events/gallery/       Gallery
//! /events/awards/        Awards
//! anything else          NotFound (emitted as /404.html)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::content::{Catalog, Category};

const NOT_FOUND_FILE: &str = "404.html";

/// One addressable page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    WritingsIndex,
    /// Raw category id from the URL; may name no known category.
    Writings(String),
    /// Raw writing id from the URL; may name no known writing.
    Writing(String),
    Books,
    Journey,
    Impact,
    Speaker,
    Gallery,
    Awards,
    NotFound,
}

impl Route {
    /// Match a site-root URL.
    ///
    /// Query string, fragment and trailing slash are ignored; segments are
    /// percent-decoded.
    pub fn parse(url: &str) -> Self {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
            .collect();
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["writing"] => Self::WritingsIndex,
            ["writings", category] => Self::Writings((*category).to_string()),
            ["writing", id] => Self::Writing((*id).to_string()),
            ["books"] => Self::Books,
            ["journey"] => Self::Journey,
            ["impact"] => Self::Impact,
            ["speaker"] => Self::Speaker,
            ["events", "gallery"] => Self::Gallery,
            ["events", "awards"] => Self::Awards,
            _ => Self::NotFound,
        }
    }

    /// Canonical URL, always with a trailing slash except for the 404 file.
    pub fn permalink(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::WritingsIndex => "/writing/".into(),
            Self::Writings(category) => format!("/writings/{category}/"),
            Self::Writing(id) => format!("/writing/{id}/"),
            Self::Books => "/books/".into(),
            Self::Journey => "/journey/".into(),
            Self::Impact => "/impact/".into(),
            Self::Speaker => "/speaker/".into(),
            Self::Gallery => "/events/gallery/".into(),
            Self::Awards => "/events/awards/".into(),
            Self::NotFound => format!("/{NOT_FOUND_FILE}"),
        }
    }

    /// HTML file this route is written to under `output_dir`.
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        if *self == Self::NotFound {
            return output_dir.join(NOT_FOUND_FILE);
        }
        let relative = self.permalink();
        let relative = relative.trim_matches('/');
        if relative.is_empty() {
            output_dir.join("index.html")
        } else {
            output_dir.join(relative).join("index.html")
        }
    }

    /// Every page the build emits, the 404 page last.
    pub fn static_routes(catalog: &Catalog) -> Vec<Self> {
        let mut routes = vec![Self::Home, Self::WritingsIndex];
        routes.extend(
            Category::ALL
                .into_iter()
                .map(|c| Self::Writings(c.id().to_string())),
        );
        routes.extend(catalog.writings.iter().map(|w| Self::Writing(w.id.clone())));
        routes.extend([
            Self::Books,
            Self::Journey,
            Self::Impact,
            Self::Speaker,
            Self::Gallery,
            Self::Awards,
            Self::NotFound,
        ]);
        routes
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::WritingsIndex => "writing-index",
            Self::Writings(_) => "writings",
            Self::Writing(_) => "writing",
            Self::Books => "books",
            Self::Journey => "journey",
            Self::Impact => "impact",
            Self::Speaker => "speaker",
            Self::Gallery => "gallery",
            Self::Awards => "awards",
            Self::NotFound => "not-found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.permalink())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/writing"), Route::WritingsIndex);
        assert_eq!(Route::parse("/writings/poems"), Route::Writings("poems".into()));
        assert_eq!(Route::parse("/writing/poem-1/"), Route::Writing("poem-1".into()));
        assert_eq!(Route::parse("/events/gallery"), Route::Gallery);
        assert_eq!(Route::parse("/events/awards/"), Route::Awards);
        assert_eq!(Route::parse("/events"), Route::NotFound);
        assert_eq!(Route::parse("/articles"), Route::NotFound);
        assert_eq!(Route::parse("/writings/poems/extra"), Route::NotFound);
    }

    #[test]
    fn test_parse_ignores_query_and_fragment() {
        assert_eq!(Route::parse("/books?ref=nav"), Route::Books);
        assert_eq!(Route::parse("/speaker/#topics"), Route::Speaker);
        assert_eq!(Route::parse("/writings/my%20poems"), Route::Writings("my poems".into()));
    }

    #[test]
    fn test_unknown_category_still_routes() {
        assert_eq!(Route::parse("/writings/essays"), Route::Writings("essays".into()));
    }

    #[test]
    fn test_output_files() {
        let out = Path::new("/site/public");
        assert_eq!(Route::Home.output_file(out), out.join("index.html"));
        assert_eq!(
            Route::Writing("poem-1".into()).output_file(out),
            out.join("writing/poem-1/index.html")
        );
        assert_eq!(Route::Gallery.output_file(out), out.join("events/gallery/index.html"));
        assert_eq!(Route::NotFound.output_file(out), out.join("404.html"));
    }

    #[test]
    fn test_static_routes_roundtrip() {
        let catalog = Catalog::load().unwrap();
        let routes = Route::static_routes(&catalog);

        assert_eq!(routes.len(), 2 + Category::ALL.len() + catalog.writings.len() + 7);
        assert_eq!(routes.last(), Some(&Route::NotFound));
        for route in &routes {
            assert_eq!(&Route::parse(&route.permalink()), route, "{route}");
        }
    }
}
