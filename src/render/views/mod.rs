//! One view per route. Views return the `<main>` content only.

mod events;
mod home;
mod profile;
mod writings;

use std::fmt::Write;

use anyhow::{Context, Result};

use super::RenderContext;
use crate::content::catalog::Stat;
use crate::content::{FilterCriteria, WritingRecord};
use crate::page::Route;
use crate::utils::date::Date;
use crate::utils::html::{escape, escape_attr};

/// Rendered `<main>` content and its page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// `None` shows the bare site title.
    pub title: Option<String>,
    pub body: String,
}

impl View {
    pub fn titled(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
        }
    }

    pub fn untitled(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }
}

/// Dispatch `route` to its view.
pub fn render(ctx: &RenderContext<'_>, route: &Route, criteria: &FilterCriteria) -> Result<View> {
    match route {
        Route::Home | Route::WritingsIndex => home::home(ctx),
        Route::Writings(category) => writings::list(ctx, category, criteria),
        Route::Writing(id) => writings::detail(ctx, id),
        Route::Books => profile::books(ctx),
        Route::Journey => profile::journey(ctx),
        Route::Impact => profile::impact(ctx),
        Route::Speaker => profile::speaker(ctx),
        Route::Gallery => events::gallery(ctx),
        Route::Awards => events::awards(ctx),
        Route::NotFound => Ok(not_found()),
    }
}

fn not_found() -> View {
    View::titled(
        "Page not found",
        "<section class=\"not-found\">\n\
         <h1>404</h1>\n\
         <p>Oops! Page not found</p>\n\
         <p><a href=\"/\">Return to Home</a></p>\n\
         </section>",
    )
}

fn page_header(html: &mut String, title: &str, subtitle: Option<&str>) -> Result<()> {
    writeln!(html, "<header>\n<h1>{}</h1>", escape(title))?;
    if let Some(subtitle) = subtitle {
        writeln!(html, "<p class=\"muted\">{}</p>", escape(subtitle))?;
    }
    html.push_str("</header>\n");
    Ok(())
}

fn stats(html: &mut String, stats: &[Stat]) -> Result<()> {
    if stats.is_empty() {
        return Ok(());
    }
    html.push_str("<dl class=\"grid stats\">\n");
    for stat in stats {
        write!(
            html,
            "<div class=\"card\"><dt>{}</dt><dd>{}</dd>",
            escape(&stat.value),
            escape(&stat.label)
        )?;
        if let Some(description) = &stat.description {
            write!(html, "<dd class=\"muted\">{}</dd>", escape(description))?;
        }
        html.push_str("</div>\n");
    }
    html.push_str("</dl>\n");
    Ok(())
}

/// Summary card used by lists, the home page and related writings.
///
/// The `data-*` attributes carry what the list filter script matches on.
fn writing_card(html: &mut String, writing: &WritingRecord, hidden: bool) -> Result<()> {
    let date = Date::parse(&writing.date)
        .with_context(|| format!("writing `{}` has an invalid date", writing.id))?;
    let tags: Vec<_> = writing.tags.iter().map(|t| t.id()).collect();

    write!(
        html,
        "<article class=\"card\" data-title=\"{}\" data-excerpt=\"{}\" data-tags=\"{}\"{}>\n\
         <h3><a href=\"{}\">{}</a></h3>\n<p>{}</p>\n\
         <p class=\"muted\">{} &middot; {} min read</p>\n",
        escape_attr(&writing.title),
        escape_attr(&writing.excerpt),
        tags.join(" "),
        if hidden { " hidden" } else { "" },
        escape_attr(&writing.permalink()),
        escape(&writing.title),
        escape(&writing.excerpt),
        date.display_short(),
        writing.read_time,
    )?;
    if !writing.tags.is_empty() {
        html.push_str("<p>");
        for tag in &writing.tags {
            write!(html, "<span class=\"tag\">{}</span> ", tag.label())?;
        }
        html.push_str("</p>\n");
    }
    html.push_str("</article>\n");
    Ok(())
}
