//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clear (with `--clean`) and create the output directory
//! - **Assets** - Copy the asset directory into the output, in parallel
//! - **Render** - Render every static route through the fault boundary, in parallel
//! - **Finalize** - Placeholder image, missing-image report, summary

use crate::{
    config::SiteConfig,
    content::Catalog,
    core::{PreferenceStore, is_shutdown},
    debug,
    embed::build::PLACEHOLDER_SVG,
    image::ImageResolver,
    log,
    logger::ProgressLine,
    page::Route,
    render::{RenderContext, render_page},
    utils::plural_count,
};
use anyhow::{Context, Result, anyhow};
use jwalk::WalkDir;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Files never copied from the asset directory.
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
    /// `(permalink, fault)` for pages replaced by the error view.
    pub faults: Vec<(String, String)>,
    /// Referenced images that resolved to the placeholder.
    pub missing_images: Vec<String>,
}

/// Build the entire site.
///
/// Pipeline: init -> assets -> render -> finalize
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    let catalog = Catalog::load().context("embedded content is invalid")?;
    let output = &config.build.output;

    init_output(output, config.build.clean)?;

    let assets = collect_all_files(&config.build.assets);
    let routes = Route::static_routes(&catalog);
    let progress = (!quiet)
        .then(|| ProgressLine::new(&[("pages", routes.len()), ("assets", assets.len())]));

    copy_assets(&assets, &config.build.assets, output, progress.as_ref())?;

    let images = ImageResolver::from_config(config);
    let ctx = RenderContext {
        config,
        catalog: &catalog,
        images: &images,
        theme: PreferenceStore::new(&config.state_dir()).read_theme(),
        show_error_detail: config.serving,
    };
    let faults = render_pages(&ctx, &routes, output, progress.as_ref())?;

    if let Some(p) = progress {
        p.finish();
    }

    write_placeholder(config)?;
    let missing_images = catalog
        .image_urls()
        .into_iter()
        .filter(|url| images.resolve(url).exhausted)
        .map(str::to_string)
        .collect();

    let report = BuildReport {
        pages: routes.len(),
        assets: assets.len(),
        faults,
        missing_images,
    };
    if !quiet {
        log_build_result(&report, output);
    }
    Ok(report)
}

/// Ensure the output directory exists, emptying it first when `clean`.
fn init_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Every file under `dir`; empty when `dir` does not exist.
fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        debug!("build"; "no asset directory at {}", dir.display());
        return Vec::new();
    }
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

/// Copy asset files in parallel, keeping their layout under `output`.
fn copy_assets(
    files: &[PathBuf],
    assets_root: &Path,
    output: &Path,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    files.par_iter().try_for_each(|path| {
        if is_shutdown() {
            return Err(anyhow!("Aborted"));
        }
        let relative = path.strip_prefix(assets_root).unwrap_or(path);
        let dest = output.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(path, &dest).with_context(|| {
            format!("Failed to copy {} to {}", path.display(), dest.display())
        })?;
        if let Some(p) = progress {
            p.inc("assets");
        }
        Ok(())
    })
}

/// Render and write every route. Returns the pages whose view faulted.
fn render_pages(
    ctx: &RenderContext<'_>,
    routes: &[Route],
    output: &Path,
    progress: Option<&ProgressLine>,
) -> Result<Vec<(String, String)>> {
    let faults = routes
        .par_iter()
        .map(|route| {
            if is_shutdown() {
                return Err(anyhow!("Aborted"));
            }
            debug!("render"; "{} ({})", route, route.kind());
            let page = render_page(ctx, route);
            write_file(&route.output_file(output), page.html.as_bytes())?;
            if let Some(p) = progress {
                p.inc("pages");
            }
            Ok(page.fault.map(|fault| (route.permalink(), fault)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(faults.into_iter().flatten().collect())
}

/// Write the built-in placeholder unless the assets already provide one.
fn write_placeholder(config: &SiteConfig) -> Result<()> {
    let placeholder = &config.build.images.placeholder;
    if !placeholder.ends_with(".svg") {
        return Ok(());
    }
    let dest = config.build.output.join(placeholder.trim_start_matches('/'));
    if dest.exists() {
        return Ok(());
    }
    debug!("build"; "writing built-in placeholder to {}", dest.display());
    write_file(&dest, PLACEHOLDER_SVG.as_bytes())
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn log_build_result(report: &BuildReport, output: &Path) {
    for url in &report.missing_images {
        debug!("image"; "{} is missing, pages show the placeholder", url);
    }
    if !report.missing_images.is_empty() {
        let missing = plural_count(report.missing_images.len(), "image");
        log!("image"; "{} missing, using placeholder", missing);
    }
    for (permalink, fault) in &report.faults {
        log!("error"; "{}: {}", permalink, fault);
    }

    log!(
        "build";
        "{} and {} written to {}",
        plural_count(report.pages, "page"),
        plural_count(report.assets, "asset"),
        output.display()
    );
}
