//! Books, journey, impact and speaker pages.

use std::fmt::Write;

use anyhow::Result;

use super::{View, page_header, stats};
use crate::image::SizePreset;
use crate::render::RenderContext;
use crate::render::picture::picture;
use crate::utils::html::{escape, escape_attr};

pub fn books(ctx: &RenderContext<'_>) -> Result<View> {
    let mut html = String::new();
    page_header(&mut html, "Books", Some("Words bound together, stories that transform."))?;

    for book in &ctx.catalog.books {
        writeln!(html, "<article class=\"book\" id=\"{}\">", escape_attr(&book.id))?;
        if let Some(cover) = &book.cover_image {
            writeln!(html, "{}", picture(ctx.images, cover, &book.title, SizePreset::Card))?;
        }
        writeln!(html, "<h2>{}</h2>", escape(&book.title))?;
        if let Some(subtitle) = &book.subtitle {
            writeln!(html, "<p><em>{}</em></p>", escape(subtitle))?;
        }
        writeln!(
            html,
            "<p class=\"muted\">Published {}</p>\n<p>{}</p>",
            book.published_year,
            escape(&book.description)
        )?;

        if !book.highlights.is_empty() {
            html.push_str("<h3>Highlights</h3>\n<ul>\n");
            for item in &book.highlights {
                writeln!(html, "<li>{}</li>", escape(item))?;
            }
            html.push_str("</ul>\n");
        }

        if !book.testimonials.is_empty() {
            html.push_str("<h3>What Readers Say</h3>\n");
            for t in &book.testimonials {
                write!(
                    html,
                    "<blockquote><p>{}</p><footer>{}",
                    escape(&t.quote),
                    escape(&t.author)
                )?;
                if let Some(role) = &t.role {
                    write!(html, ", <span class=\"muted\">{}</span>", escape(role))?;
                }
                html.push_str("</footer></blockquote>\n");
            }
        }

        if let Some(link) = &book.buy_link {
            writeln!(
                html,
                "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Buy / Enquire</a></p>",
                escape_attr(link)
            )?;
        }
        html.push_str("</article>\n");
    }

    Ok(View::titled("Books", html))
}

pub fn journey(ctx: &RenderContext<'_>) -> Result<View> {
    let catalog = ctx.catalog;
    let mut html = String::new();
    page_header(&mut html, "Journey", None)?;
    stats(&mut html, &catalog.journey_stats)?;

    html.push_str("<ol class=\"timeline\">\n");
    for m in &catalog.milestones {
        writeln!(html, "<li class=\"card\" id=\"{}\">", escape_attr(&m.id))?;
        if let Some(logo) = &m.logo {
            writeln!(html, "{}", picture(ctx.images, logo, &m.organization, SizePreset::Thumbnail))?;
        }
        write!(html, "<h2>{}", escape(&m.organization))?;
        if m.current {
            html.push_str(" <span class=\"badge\">Current</span>");
        }
        writeln!(
            html,
            "</h2>\n<p><strong>{}</strong> <span class=\"muted\">{}</span></p>\n<p>{}</p>",
            escape(&m.role),
            escape(&m.period),
            escape(&m.description)
        )?;
        if !m.achievements.is_empty() {
            html.push_str("<ul>\n");
            for a in &m.achievements {
                writeln!(html, "<li>{}</li>", escape(a))?;
            }
            html.push_str("</ul>\n");
        }
        html.push_str("</li>\n");
    }
    html.push_str("</ol>\n");

    Ok(View::titled("Journey", html))
}

pub fn impact(ctx: &RenderContext<'_>) -> Result<View> {
    let catalog = ctx.catalog;
    let mut html = String::new();
    page_header(
        &mut html,
        "Social Impact",
        Some("Creating lasting change through IEC and community initiatives."),
    )?;
    stats(&mut html, &catalog.impact_stats)?;

    html.push_str("<h2>Impact Areas</h2>\n<div class=\"grid\">\n");
    for area in &catalog.impact_areas {
        writeln!(html, "<div class=\"card\" id=\"{}\">", escape_attr(&area.id))?;
        if let Some(image) = catalog.impact_images_for(&area.id).next() {
            writeln!(html, "{}", picture(ctx.images, &image.src, &image.alt, SizePreset::Card))?;
        }
        writeln!(
            html,
            "<h3>{}</h3>\n<p>{}</p>\n</div>",
            escape(&area.title),
            escape(&area.description)
        )?;
    }
    html.push_str("</div>\n");

    html.push_str("<h2>Key Initiatives</h2>\n");
    for area in catalog.impact_areas.iter().filter(|a| !a.initiatives.is_empty()) {
        writeln!(html, "<h3>{}</h3>\n<ul>", escape(&area.title))?;
        for initiative in &area.initiatives {
            writeln!(html, "<li>{}</li>", escape(initiative))?;
        }
        html.push_str("</ul>\n");
    }

    if !catalog.impact_images.is_empty() {
        html.push_str("<h2>Moments of Impact</h2>\n<div class=\"grid\">\n");
        for image in &catalog.impact_images {
            writeln!(
                html,
                "<figure>{}<figcaption>{}</figcaption></figure>",
                picture(ctx.images, &image.src, &image.alt, SizePreset::Card),
                escape(&image.alt)
            )?;
        }
        html.push_str("</div>\n");
    }

    Ok(View::titled("Social Impact", html))
}

pub fn speaker(ctx: &RenderContext<'_>) -> Result<View> {
    let catalog = ctx.catalog;
    let mut html = String::new();
    page_header(&mut html, "Speaker", None)?;
    stats(&mut html, &catalog.speaker_stats)?;

    html.push_str("<h2>Speaking Topics</h2>\n<div class=\"grid\">\n");
    for topic in &catalog.topics {
        writeln!(
            html,
            "<div class=\"card\" id=\"{}\">\n<h3>{}</h3>\n<p>{}</p>\n<ul>",
            escape_attr(&topic.id),
            escape(&topic.title),
            escape(&topic.description)
        )?;
        for point in &topic.key_points {
            writeln!(html, "<li>{}</li>", escape(point))?;
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<h2>Recent Appearances</h2>\n<ul class=\"events\">\n");
    for event in &catalog.events {
        html.push_str("<li>");
        if let Some(image) = &event.image {
            write!(html, "{}", picture(ctx.images, image, &event.event_name, SizePreset::Thumbnail))?;
        }
        writeln!(
            html,
            "<strong>{}</strong> <span class=\"tag\">{}</span><br>\
             <span class=\"muted\">{} &middot; {}</span></li>",
            escape(&event.event_name),
            event.kind.label(),
            escape(&event.venue),
            escape(&event.date)
        )?;
    }
    html.push_str("</ul>\n");

    Ok(View::titled("Speaker", html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_support::Fixture;

    #[test]
    fn test_books_sections() {
        let fx = Fixture::new();
        let view = books(&fx.ctx()).unwrap();

        assert!(view.body.contains("Words bound together, stories that transform."));
        assert!(view.body.contains("<h3>Highlights</h3>"));
        assert!(view.body.contains("<h3>What Readers Say</h3>"));
        for book in &fx.catalog.books {
            assert!(view.body.contains(&format!("<h2>{}</h2>", escape(&book.title))));
        }
    }

    #[test]
    fn test_journey_marks_current() {
        let fx = Fixture::new();
        let view = journey(&fx.ctx()).unwrap();

        let current = fx.catalog.milestones.iter().filter(|m| m.current).count();
        assert_eq!(view.body.matches("<span class=\"badge\">Current</span>").count(), current);
    }

    #[test]
    fn test_impact_sections() {
        let fx = Fixture::new();
        let view = impact(&fx.ctx()).unwrap();

        assert_eq!(view.title.as_deref(), Some("Social Impact"));
        for heading in ["Impact Areas", "Key Initiatives", "Moments of Impact"] {
            assert!(view.body.contains(&format!("<h2>{heading}</h2>")), "{heading}");
        }
        // Empty asset directory: every image falls back to the placeholder.
        assert!(view.body.contains(r#"src="/placeholder.svg""#));
    }

    #[test]
    fn test_speaker_lists_every_event() {
        let fx = Fixture::new();
        let view = speaker(&fx.ctx()).unwrap();

        assert!(view.body.contains("<h2>Speaking Topics</h2>"));
        assert!(view.body.contains("<h2>Recent Appearances</h2>"));
        for event in &fx.catalog.events {
            assert!(view.body.contains(&escape(&event.event_name).into_owned()));
        }
    }
}
