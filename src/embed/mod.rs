//! Embedded page resources.
//!
//! - `template` - Template types for typed variable injection
//! - `page` - The HTML shell, its stylesheet and scripts
//! - `build` - Files the build writes when the site does not provide them
//!
//! ```ignore
//! use embed::page::{SHELL_HTML, ShellVars};
//!
//! let html = SHELL_HTML.render(&vars);
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    /// Fallback image written to the configured placeholder path.
    pub const PLACEHOLDER_SVG: &str = include_str!("build/placeholder.svg");
}

pub mod page {
    use super::{Template, TemplateVars};
    use crate::core::theme::THEME_KEY;

    /// Minimal stylesheet inlined into every page.
    pub const STYLE_CSS: &str = include_str!("page/style.css");

    /// Variables for theme.js.
    pub struct ThemeVars;

    impl TemplateVars for ThemeVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__THEME_KEY__", THEME_KEY)
        }
    }

    /// Theme bootstrap and `toggleTheme()`, inlined into `<head>`.
    pub const THEME_JS: Template<ThemeVars> = Template::new(include_str!("page/theme.js"));

    /// Writings list filter, inlined after the list. Reads the cards'
    /// `data-title`, `data-excerpt` and `data-tags`.
    pub const FILTER_JS: &str = include_str!("page/filter.js");

    /// Variables for shell.html. Values are inserted verbatim, so text
    /// must already be escaped.
    pub struct ShellVars {
        pub lang: String,
        pub theme: &'static str,
        pub title: String,
        pub nav: String,
        pub body: String,
        pub footer: String,
    }

    impl TemplateVars for ShellVars {
        fn apply(&self, content: &str) -> String {
            // Page body last: it carries user text that must not be rescanned.
            content
                .replace("__LANG__", &self.lang)
                .replace("__THEME__", self.theme)
                .replace("__TITLE__", &self.title)
                .replace("__STYLE__", STYLE_CSS)
                .replace("__SCRIPT__", &THEME_JS.render(&ThemeVars))
                .replace("__NAV__", &self.nav)
                .replace("__FOOTER__", &self.footer)
                .replace("__BODY__", &self.body)
        }
    }

    /// Page shell template.
    pub const SHELL_HTML: Template<ShellVars> = Template::new(include_str!("page/shell.html"));
}
