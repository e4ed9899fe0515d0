//! Landing page with the builder and writer personas side by side.

use std::fmt::Write;

use anyhow::Result;

use super::{View, writing_card};
use crate::content::Persona;
use crate::content::catalog::HeroCopy;
use crate::image::SizePreset;
use crate::render::RenderContext;
use crate::render::picture::picture;
use crate::utils::html::escape;

const FEATURED_LIMIT: usize = 6;

pub fn home(ctx: &RenderContext<'_>) -> Result<View> {
    let home = &ctx.catalog.home;
    let mut html = String::new();

    if let Some((first, rest)) = home.images.split_first() {
        let hero = picture(ctx.images, first, &ctx.config.site.title, SizePreset::Hero);
        writeln!(html, "<figure class=\"hero\">{hero}</figure>")?;
        if !rest.is_empty() {
            html.push_str("<div class=\"grid strip\">\n");
            for src in rest {
                writeln!(html, "{}", picture(ctx.images, src, "", SizePreset::Thumbnail))?;
            }
            html.push_str("</div>\n");
        }
    }

    html.push_str(
        "<p class=\"persona-switch\"><a href=\"#builder\">Builder</a> \
         <a href=\"#writer\">Writer</a></p>\n",
    );

    persona(&mut html, ctx, Persona::Builder, &home.hero.builder)?;
    html.push_str(
        "<p><a href=\"/journey/\">Journey</a> <a href=\"/speaker/\">Speaker</a></p>\n</section>\n",
    );

    persona(&mut html, ctx, Persona::Writer, &home.hero.writer)?;
    html.push_str("<h3>Selected Works</h3>\n<div class=\"grid\">\n");
    for writing in ctx.catalog.featured().take(FEATURED_LIMIT) {
        writing_card(&mut html, writing, false)?;
    }
    html.push_str("</div>\n<h3>Published Works</h3>\n<ul>\n");
    for book in &ctx.catalog.books {
        writeln!(
            html,
            "<li><strong>{}</strong> <span class=\"muted\">({})</span></li>",
            escape(&book.title),
            book.published_year
        )?;
    }
    html.push_str("</ul>\n<p><a href=\"/books/\">Explore Books</a></p>\n</section>\n");

    Ok(View::untitled(html))
}

/// Open a persona section with its hero copy and highlights. The caller
/// closes the `<section>`.
fn persona(
    html: &mut String,
    ctx: &RenderContext<'_>,
    persona: Persona,
    copy: &HeroCopy,
) -> Result<()> {
    write!(
        html,
        "<section id=\"{}\">\n<h1>{}</h1>\n<p class=\"muted\">{}</p>\n",
        persona.id(),
        escape(&copy.headline),
        escape(&copy.subtitle)
    )?;

    let highlights: Vec<_> = ctx
        .catalog
        .home
        .highlights
        .iter()
        .filter(|h| h.shown_for(persona))
        .collect();
    if !highlights.is_empty() {
        html.push_str("<div class=\"grid\">\n");
        for h in highlights {
            writeln!(
                html,
                "<div class=\"card\"><p class=\"badge\">{}</p><h3>{}</h3><p>{}</p></div>",
                escape(&h.value),
                escape(&h.title),
                escape(&h.description)
            )?;
        }
        html.push_str("</div>\n");
    }
    Ok(())
}
