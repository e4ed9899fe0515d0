//! `[site]` section configuration.
//!
//! Basic site information used in the page shell and footer.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Ravi Tilekar"
//! author = "Ravi Tilekar"
//! description = "Entrepreneur, writer and speaker"
//! url = "https://example.com"     # optional, http(s) with a host
//! language = "en"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, used in `<title>` and the header.
    pub title: String,

    pub author: String,

    pub description: String,

    /// Public site URL.
    pub url: Option<String>,

    /// Language code for `<html lang>`.
    pub language: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Ravi Tilekar".into(),
            author: "Ravi Tilekar".into(),
            description: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteSectionConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const LANGUAGE: FieldPath = FieldPath::new("site.language");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid URL with an http(s) scheme and a host
    /// - `language` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "title is empty, pages will have a blank <title>");
        }

        if self.language.trim().is_empty() {
            diag.error_with_hint(Self::LANGUAGE, "language must not be empty", "e.g. \"en\"");
        }

        let Some(url_str) = &self.url else {
            return;
        };
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn check(site: &SiteSectionConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.language, "en");
        assert!(config.site.url.is_none());
        assert!(check(&config.site).is_empty());
    }

    #[test]
    fn test_url_validation() {
        let config = test_parse_config("[site]\nurl = \"https://example.com/\"");
        assert!(check(&config.site).is_empty());

        let config = test_parse_config("[site]\nurl = \"ftp://example.com\"");
        assert_eq!(check(&config.site).len(), 1);

        let config = test_parse_config("[site]\nurl = \"example.com\"");
        assert_eq!(check(&config.site).len(), 1);
    }

    #[test]
    fn test_empty_title_is_warning() {
        let config = test_parse_config("[site]\ntitle = \"\"");
        let diag = check(&config.site);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }
}
