//! Gallery and awards.

use std::fmt::Write;

use anyhow::Result;

use super::{View, page_header};
use crate::content::{GalleryCategory, GalleryFilter};
use crate::image::SizePreset;
use crate::render::RenderContext;
use crate::render::picture::picture;
use crate::utils::html::escape;

/// Gallery images grouped by category, in category order. Empty groups are
/// skipped.
pub fn gallery(ctx: &RenderContext<'_>) -> Result<View> {
    let mut html = String::new();
    page_header(
        &mut html,
        "Gallery",
        Some("Moments captured across events, workshops, and community programs."),
    )?;

    let groups: Vec<_> = GalleryCategory::ALL
        .into_iter()
        .map(|c| (c, ctx.catalog.gallery(GalleryFilter::Only(c)).collect::<Vec<_>>()))
        .filter(|(_, images)| !images.is_empty())
        .collect();

    html.push_str("<p class=\"gallery-nav\">");
    for (category, images) in &groups {
        write!(
            html,
            "<a href=\"#{}\">{} <span class=\"muted\">({})</span></a> ",
            category.id(),
            category.label(),
            images.len()
        )?;
    }
    html.push_str("</p>\n");

    for (category, images) in &groups {
        writeln!(
            html,
            "<section id=\"{}\">\n<h2>{}</h2>\n<div class=\"grid\">",
            category.id(),
            category.label()
        )?;
        for image in images {
            writeln!(
                html,
                "<figure>{}<figcaption>{}</figcaption></figure>",
                picture(ctx.images, &image.src, &image.alt, SizePreset::Card),
                escape(&image.alt)
            )?;
        }
        html.push_str("</div>\n</section>\n");
    }

    Ok(View::titled("Gallery", html))
}

pub fn awards(ctx: &RenderContext<'_>) -> Result<View> {
    let mut html = String::new();
    page_header(
        &mut html,
        "Awards & Recognition",
        Some("Humbled by the recognition received for our collective work."),
    )?;

    html.push_str("<div class=\"grid\">\n");
    for award in &ctx.catalog.awards {
        html.push_str("<article class=\"card\">\n");
        if let Some(image) = &award.image {
            writeln!(html, "{}", picture(ctx.images, image, &award.title, SizePreset::Card))?;
        }
        writeln!(
            html,
            "<h3>{}</h3>\n<p class=\"muted\">{} &middot; {}</p>",
            escape(&award.title),
            escape(&award.organization),
            award.year
        )?;
        if let Some(description) = &award.description {
            writeln!(html, "<p>{}</p>", escape(description))?;
        }
        html.push_str("</article>\n");
    }
    html.push_str("</div>\n");

    Ok(View::titled("Awards & Recognition", html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::Fixture;

    #[test]
    fn test_gallery_groups_in_category_order() {
        let fx = Fixture::new();
        let view = gallery(&fx.ctx()).unwrap();

        let mut last = 0;
        for category in GalleryCategory::ALL {
            let count = fx.catalog.gallery(GalleryFilter::Only(category)).count();
            let heading = format!("<h2>{}</h2>", category.label());
            match view.body.find(&heading) {
                Some(pos) => {
                    assert!(count > 0);
                    assert!(pos > last, "{heading} out of order");
                    last = pos;
                }
                None => assert_eq!(count, 0),
            }
        }
        assert_eq!(view.body.matches("<figure>").count(), fx.catalog.gallery.len());
    }

    #[test]
    fn test_awards_listed() {
        let fx = Fixture::new();
        let view = awards(&fx.ctx()).unwrap();

        assert_eq!(view.title.as_deref(), Some("Awards & Recognition"));
        assert_eq!(view.body.matches("<article class=\"card\">").count(), fx.catalog.awards.len());
    }
}
