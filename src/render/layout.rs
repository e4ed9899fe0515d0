//! Page shell: navigation, footer and the embedded HTML template.

use std::fmt::Write;

use super::RenderContext;
use super::views::View;
use crate::embed::page::{SHELL_HTML, ShellVars};
use crate::page::Route;
use crate::utils::html::{escape, escape_attr};

struct NavItem {
    label: &'static str,
    href: &'static str,
    children: &'static [NavItem],
}

impl NavItem {
    const fn link(label: &'static str, href: &'static str) -> Self {
        Self { label, href, children: &[] }
    }

    const fn group(label: &'static str, children: &'static [NavItem]) -> Self {
        Self { label, href: "", children }
    }

    fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

const NAV: &[NavItem] = &[
    NavItem::link("Home", "/"),
    NavItem::group(
        "Writings",
        &[
            NavItem::link("Poems", "/writings/poems/"),
            NavItem::link("Shayari", "/writings/shayari/"),
            NavItem::link("Songs", "/writings/songs/"),
            NavItem::link("Stories", "/writings/stories/"),
        ],
    ),
    NavItem::link("Books", "/books/"),
    NavItem::link("Articles", "https://startupsindia.in"),
    NavItem::link("Journey", "/journey/"),
    NavItem::link("Impact", "/impact/"),
    NavItem::link("Speaker", "/speaker/"),
    NavItem::group(
        "Events",
        &[
            NavItem::link("Gallery", "/events/gallery/"),
            NavItem::link("Awards", "/events/awards/"),
        ],
    ),
];

/// Wrap a view in the full HTML document.
pub fn page(ctx: &RenderContext<'_>, route: &Route, view: &View) -> String {
    let site = &ctx.config.site;
    let title = match &view.title {
        Some(title) => format!("{} | {}", title, site.title),
        None => site.title.clone(),
    };

    SHELL_HTML.render(&ShellVars {
        lang: escape_attr(&site.language).into_owned(),
        theme: ctx.theme.as_str(),
        title: escape(&title).into_owned(),
        nav: nav(ctx, &route.permalink()),
        body: view.body.clone(),
        footer: footer(ctx),
    })
}

fn nav(ctx: &RenderContext<'_>, current: &str) -> String {
    let mut html = String::from("<nav>\n");
    let _ = writeln!(html, "<a class=\"brand\" href=\"/\">{}</a>", escape(&ctx.config.site.title));
    html.push_str("<ul>\n");
    for item in NAV {
        html.push_str("<li>");
        if item.children.is_empty() {
            nav_link(&mut html, item, current);
        } else {
            let open = item.children.iter().any(|c| c.href == current);
            let _ = write!(
                html,
                "<details{}><summary>{}</summary><ul>",
                if open { " open" } else { "" },
                item.label
            );
            for child in item.children {
                html.push_str("<li>");
                nav_link(&mut html, child, current);
                html.push_str("</li>");
            }
            html.push_str("</ul></details>");
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
    html.push_str(
        "<button type=\"button\" onclick=\"toggleTheme()\" aria-label=\"Toggle theme\">&#9680;</button>\n",
    );
    html.push_str("</nav>");
    html
}

fn nav_link(html: &mut String, item: &NavItem, current: &str) {
    if item.is_external() {
        let _ = write!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            item.href, item.label
        );
    } else if item.href == current {
        let _ = write!(html, "<a href=\"{}\" aria-current=\"page\">{}</a>", item.href, item.label);
    } else {
        let _ = write!(html, "<a href=\"{}\">{}</a>", item.href, item.label);
    }
}

fn footer(ctx: &RenderContext<'_>) -> String {
    let site = &ctx.config.site;
    let mut html = String::from("<footer>\n<div>\n");
    let _ = writeln!(html, "<strong>{}</strong>", escape(&site.title));
    if !site.description.is_empty() {
        let _ = writeln!(html, "<p>{}</p>", escape(&site.description));
    }
    html.push_str("</div>\n<div>\n<h4>Quick Links</h4>\n<ul>");
    for item in NAV.iter().filter(|i| i.children.is_empty() && !i.is_external()) {
        let _ = write!(html, "<li><a href=\"{}\">{}</a></li>", item.href, item.label);
    }
    html.push_str("</ul>\n</div>\n<div>\n<h4>Connect</h4>\n<ul>");
    for link in &ctx.catalog.home.social {
        let _ = write!(
            html,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></li>",
            escape_attr(&link.url),
            escape(&link.label)
        );
    }
    html.push_str("</ul>\n</div>\n");
    if !site.author.is_empty() {
        let _ = writeln!(html, "<p class=\"muted\">&copy; {}</p>", escape(&site.author));
    }
    html.push_str("</footer>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::Fixture;

    #[test]
    fn test_title_and_current_link() {
        let fx = Fixture::new();
        let html = page(&fx.ctx(), &Route::Gallery, &View::titled("Gallery", "<p>body</p>"));

        assert!(html.contains("<title>Gallery | Ravi Tilekar</title>"));
        assert!(html.contains(r#"<a href="/events/gallery/" aria-current="page">Gallery</a>"#));
        assert!(html.contains("<details open><summary>Events</summary>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains(r#"target="_blank" rel="noopener noreferrer">Articles</a>"#));
    }

    #[test]
    fn test_untitled_view_uses_site_title() {
        let fx = Fixture::new();
        let html = page(&fx.ctx(), &Route::Home, &View::untitled(String::new()));

        assert!(html.contains("<title>Ravi Tilekar</title>"));
        assert!(html.contains("<h4>Quick Links</h4>"));
        assert!(html.contains("<h4>Connect</h4>"));
    }
}
