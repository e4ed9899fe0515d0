//! Top-level fault boundary.
//!
//! A view that returns `Err` or panics is replaced by a generic error view.
//! The fault is logged once; nothing is retried. "Try Again" reloads the
//! same permalink.

use std::any::Any;
use std::fmt::Write;
use std::panic::{AssertUnwindSafe, catch_unwind};

use anyhow::Result;

use super::views::View;
use crate::log;
use crate::page::Route;
use crate::utils::html::{escape, escape_attr};

/// Result of a guarded view: always something to show.
#[derive(Debug)]
pub struct Guarded {
    pub view: View,
    /// Fault message when `view` is the error view.
    pub fault: Option<String>,
}

/// Run `render`, substituting the error view on failure.
pub fn guard<F>(route: &Route, show_detail: bool, render: F) -> Guarded
where
    F: FnOnce() -> Result<View>,
{
    let fault = match catch_unwind(AssertUnwindSafe(render)) {
        Ok(Ok(view)) => return Guarded { view, fault: None },
        Ok(Err(e)) => format!("{e:#}"),
        Err(payload) => format!("panicked: {}", panic_message(payload.as_ref())),
    };

    log!("boundary"; "{} failed: {}", route, fault);
    Guarded {
        view: error_view(route, show_detail.then_some(fault.as_str())),
        fault: Some(fault),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}

fn error_view(route: &Route, detail: Option<&str>) -> View {
    let mut body = String::from(
        "<section class=\"error\">\n\
         <h1>Oops! Something went wrong</h1>\n\
         <p class=\"muted\">We encountered an unexpected error. \
         Please try refreshing the page or go back home.</p>\n",
    );
    if let Some(detail) = detail {
        let _ = writeln!(body, "<pre class=\"error-detail\">{}</pre>", escape(detail));
    }
    let _ = write!(
        body,
        "<p><a href=\"{}\">Try Again</a> <a href=\"/\">Home</a></p>\n</section>",
        escape_attr(&route.permalink())
    );
    View::titled("Error", body)
}
