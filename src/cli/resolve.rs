//! Resolve command: show how image paths resolve.
//!
//! ```text
//! [resolve] /images/hero.jpg (4 candidates)
//!   1. /images/hero.webp  `/images/hero.webp` not found
//!   2. /images/hero.jpg   ok
//! [resolve] displays /images/hero.jpg
//! [resolve] modern hint: none
//! ```
//!
//! Several paths share one [`LoadAttempt`], re-targeted from path to path.

use std::cell::RefCell;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::SiteConfig;
use crate::image::{
    AttemptState, FsLoader, ImageLoader, LoadAttempt, LoadError, assets_root, modern_available,
};
use crate::utils::plural_s;
use crate::{debug, log};

/// Loader wrapper that records every attempt in order.
struct Traced<'a, L> {
    inner: &'a L,
    attempts: RefCell<Vec<(String, Option<String>)>>,
}

impl<L: ImageLoader> ImageLoader for Traced<'_, L> {
    fn load(&self, url: &str) -> Result<(), LoadError> {
        let result = self.inner.load(url);
        let error = result.as_ref().err().map(ToString::to_string);
        self.attempts.borrow_mut().push((url.to_string(), error));
        result
    }
}

/// Everything the command reports for one path.
#[derive(Debug)]
struct Trace {
    path: String,
    candidates: Vec<String>,
    /// Attempted URLs in order, with the failure reason if any.
    attempts: Vec<(String, Option<String>)>,
    state: AttemptState,
    displayed: String,
    modern_hint: Option<String>,
}

/// Run the sequence `attempt` currently targets and record what happened.
fn trace<L: ImageLoader>(attempt: &mut LoadAttempt, loader: &L, placeholder: &str) -> Trace {
    let traced = Traced {
        inner: loader,
        attempts: RefCell::new(Vec::new()),
    };
    let state = attempt.run(&traced, |_| {}, || {});

    let path = attempt.path().to_string();
    let candidates = attempt.candidates().to_vec();
    let modern_hint = modern_available(&path, &candidates, loader).then(|| candidates[0].clone());

    Trace {
        displayed: attempt.display_src(placeholder).to_string(),
        attempts: traced.attempts.into_inner(),
        path,
        candidates,
        state,
        modern_hint,
    }
}

/// Trace every path in order. A path equal to the one before it keeps the
/// previous sequence and is not traced again.
fn trace_all<L: ImageLoader>(
    paths: &[String],
    loader: &L,
    modern: &str,
    placeholder: &str,
) -> Vec<Trace> {
    let Some((first, rest)) = paths.split_first() else {
        return Vec::new();
    };

    let mut attempt = LoadAttempt::new(first, modern);
    let mut traces = vec![trace(&mut attempt, loader, placeholder)];
    for path in rest {
        if attempt.retarget(path).is_none() {
            debug!("resolve"; "{} repeats the previous path", path);
            continue;
        }
        traces.push(trace(&mut attempt, loader, placeholder));
    }
    traces
}

/// Execute resolve command
pub fn run_resolve(paths: &[String], config: &SiteConfig) -> Result<()> {
    let images = &config.build.images;
    let loader = FsLoader::new(assets_root(config), images.verify);

    for trace in trace_all(paths, &loader, &images.modern, &images.placeholder) {
        report(&trace);
    }
    Ok(())
}

fn report(trace: &Trace) {
    let n = trace.candidates.len();
    log!("resolve"; "{} ({} candidate{})", trace.path, n, plural_s(n));
    let width = trace.candidates.iter().map(String::len).max().unwrap_or(0);
    for (i, candidate) in trace.candidates.iter().enumerate() {
        let status = match trace.attempts.iter().find(|(url, _)| url == candidate) {
            Some((_, None)) => "ok".green().to_string(),
            Some((_, Some(error))) => error.red().to_string(),
            None => "not tried".dimmed().to_string(),
        };
        println!("  {}. {:<width$}  {}", i + 1, candidate, status);
    }

    match trace.state {
        AttemptState::Exhausted => {
            log!("resolve"; "no candidate loads, displays placeholder {}", trace.displayed)
        }
        _ => log!("resolve"; "displays {}", trace.displayed),
    }
    log!("resolve"; "modern hint: {}", trace.modern_hint.as_deref().unwrap_or("none"));
}
