//! Writings list and writing detail.

use std::fmt::Write;

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;

use super::{View, page_header, writing_card};
use crate::content::{Category, FilterCriteria, Tag};
use crate::embed::page::FILTER_JS;
use crate::page::Route;
use crate::render::RenderContext;
use crate::utils::date::Date;
use crate::utils::html::{escape, escape_attr, text_block};

const RELATED_LIMIT: usize = 3;
const FALLBACK_LABEL: &str = "Writings";
const EMPTY_MESSAGE: &str = "No writings found matching your criteria.";

/// List for one category id. Unknown ids render the fallback label and an
/// empty list.
///
/// Every card of the category is emitted; cards outside `criteria` carry
/// `hidden`. The embedded filter script re-applies the criteria in the
/// browser, so a built page filters without a server.
pub fn list(ctx: &RenderContext<'_>, category_id: &str, criteria: &FilterCriteria) -> Result<View> {
    let category = Category::from_id(category_id);
    let label = category.map_or(FALLBACK_LABEL, Category::label);
    let visible: FxHashSet<&str> = criteria
        .apply(&ctx.catalog.writings, category_id)
        .into_iter()
        .map(|w| w.id.as_str())
        .collect();

    let mut html = String::new();
    page_header(&mut html, label, category.map(Category::description))?;
    filter_form(&mut html, &Route::Writings(category_id.to_string()).permalink(), criteria)?;

    html.push_str("<div class=\"grid\" data-filter-list>\n");
    let in_category = ctx.catalog.writings.iter().filter(|w| Some(w.category) == category);
    for writing in in_category {
        writing_card(&mut html, writing, !visible.contains(writing.id.as_str()))?;
    }
    html.push_str("</div>\n");
    writeln!(
        html,
        "<p class=\"muted\" data-filter-empty{}>{EMPTY_MESSAGE}</p>",
        if visible.is_empty() { "" } else { " hidden" }
    )?;
    writeln!(html, "<script>\n{FILTER_JS}</script>")?;

    Ok(View::titled(label, html))
}

/// Search box, tag chips and the Clear link.
///
/// Chips and Clear are plain links to the toggled criteria, and submitting
/// the form reloads with `?q=&tag=`; the script intercepts all three.
fn filter_form(html: &mut String, action: &str, criteria: &FilterCriteria) -> Result<()> {
    write!(
        html,
        "<form class=\"filter\" method=\"get\" action=\"{}\">\n\
         <input type=\"search\" name=\"q\" placeholder=\"Search...\" value=\"{}\">\n",
        escape_attr(action),
        escape_attr(&criteria.query)
    )?;
    for tag in Tag::ALL.into_iter().filter(|t| criteria.is_selected(*t)) {
        writeln!(html, "<input type=\"hidden\" name=\"tag\" value=\"{}\">", tag.id())?;
    }
    html.push_str("<button type=\"submit\">Filter</button>\n<p class=\"tags\">\n");

    for tag in Tag::ALL {
        let selected = criteria.is_selected(tag);
        let mut next = criteria.clone();
        next.toggle_tag(tag);
        writeln!(
            html,
            "<a class=\"tag{}\" href=\"{}\" data-tag=\"{}\" aria-pressed=\"{}\">{}</a>",
            if selected { " selected" } else { "" },
            escape_attr(&format!("{action}{}", next.to_query())),
            tag.id(),
            selected,
            tag.label()
        )?;
    }

    let mut cleared = criteria.clone();
    cleared.clear();
    writeln!(
        html,
        "</p>\n<a class=\"clear\" href=\"{}\"{}>Clear</a>\n</form>",
        escape_attr(&format!("{action}{}", cleared.to_query())),
        if *criteria == cleared { " hidden" } else { "" }
    )?;
    Ok(())
}

pub fn detail(ctx: &RenderContext<'_>, id: &str) -> Result<View> {
    let Some(writing) = ctx.catalog.writing(id) else {
        return Ok(View::titled(
            "Writing not found",
            "<section class=\"not-found\">\n<h1>Writing not found</h1>\n\
             <p><a href=\"/\">Go Home</a></p>\n</section>",
        ));
    };
    let date = Date::parse(&writing.date)
        .with_context(|| format!("writing `{}` has an invalid date", writing.id))?;
    let category = writing.category;
    let list_url = Route::Writings(category.id().to_string()).permalink();

    let mut html = String::from("<article>\n");
    write!(
        html,
        "<p><a href=\"{}\">{}</a></p>\n<h1>{}</h1>\n\
         <p class=\"muted\">{} &middot; {} min read</p>\n",
        list_url,
        category.label(),
        escape(&writing.title),
        date.display_short(),
        writing.read_time
    )?;
    if !writing.tags.is_empty() {
        html.push_str("<p>");
        for tag in &writing.tags {
            write!(html, "<span class=\"tag\">{}</span> ", tag.label())?;
        }
        html.push_str("</p>\n");
    }
    writeln!(
        html,
        "<div class=\"writing-body\">\n{}</div>\n</article>",
        text_block(&writing.content)
    )?;

    let related = ctx.catalog.related(writing, RELATED_LIMIT);
    if !related.is_empty() {
        writeln!(
            html,
            "<section class=\"related\">\n<h2>More {}</h2>\n<div class=\"grid\">",
            category.label()
        )?;
        for other in related {
            writing_card(&mut html, other, false)?;
        }
        html.push_str("</div>\n</section>\n");
    }
    writeln!(html, "<p><a href=\"{list_url}\">Back to {}</a></p>", category.label())?;

    Ok(View::titled(&writing.title, html))
}
