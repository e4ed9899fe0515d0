//! HTML rendering.
//!
//! Every page goes through the same three steps:
//!
//! ```text
//! Route ──► views::render ──► boundary::guard ──► layout::page ──► HTML
//!                 │                  │
//!                 │                  └── Err / panic ─► error view
//!                 └── images via ImageResolver
//! ```

mod boundary;
mod layout;
mod picture;
mod views;

use boundary::guard;

use crate::config::SiteConfig;
use crate::content::{Catalog, FilterCriteria};
use crate::core::Theme;
use crate::image::ImageResolver;
use crate::page::Route;

/// Everything a view may read. Shared by all rayon workers of a build.
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub images: &'a ImageResolver,
    /// Initial theme baked into the page; the page script may override it.
    pub theme: Theme,
    /// Show fault details in the error view (serve mode only).
    pub show_error_detail: bool,
}

/// A complete HTML document plus the fault that replaced its view, if any.
#[derive(Debug)]
pub struct RenderedPage {
    pub html: String,
    pub fault: Option<String>,
}

/// Render `route` with an empty writings filter.
pub fn render_page(ctx: &RenderContext<'_>, route: &Route) -> RenderedPage {
    render_page_filtered(ctx, route, &FilterCriteria::default())
}

/// Render `route`; writings lists apply `criteria`.
pub fn render_page_filtered(
    ctx: &RenderContext<'_>,
    route: &Route,
    criteria: &FilterCriteria,
) -> RenderedPage {
    let guarded = guard(route, ctx.show_error_detail, || {
        views::render(ctx, route, criteria)
    });
    RenderedPage {
        html: layout::page(ctx, route, &guarded.view),
        fault: guarded.fault,
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{Fixture, visible_cards};
    use super::*;

    #[test]
    fn test_every_static_route_renders_without_fault() {
        let fx = Fixture::new();
        let ctx = fx.ctx();

        for route in Route::static_routes(&fx.catalog) {
            let page = render_page(&ctx, &route);
            assert!(page.fault.is_none(), "{route}: {:?}", page.fault);
            assert!(page.html.starts_with("<!DOCTYPE html>"), "{route}");
            assert!(page.html.contains("</html>"), "{route}");
        }
    }

    #[test]
    fn test_filtered_render_narrows_list() {
        let fx = Fixture::new();
        let ctx = fx.ctx();
        let route = Route::Writings("poems".into());

        let all = render_page(&ctx, &route).html;
        let narrowed =
            render_page_filtered(&ctx, &route, &FilterCriteria::new().with_query("road")).html;

        assert!(visible_cards(&all).len() > 1);
        assert_eq!(visible_cards(&narrowed), ["The Road Less Traveled"]);
    }

    #[test]
    fn test_theme_is_baked_into_shell() {
        let fx = Fixture::new();
        let mut ctx = fx.ctx();
        ctx.theme = Theme::Dark;

        let html = render_page(&ctx, &Route::Books).html;
        assert!(html.contains(r#"data-theme="dark""#));
    }
}
