//! # Site Generation
//!
//! Drives the parser over a content tree and writes one HTML page per
//! markdown file:
//!
//! 1. Delete the output directory
//! 2. Copy the static directory into it
//! 3. Mirror the content tree, rendering `X.md` through the template into `X.html`
//!
//! Pages are independent of each other; the first failing page aborts the
//! build.

use std::path::{Path, PathBuf};

use markdown_sitegen_config::SiteConfig;
use relative_path::RelativePathBuf;

use crate::{
    error::MarkupError,
    io::{self, IoError},
    parsing::{extract_title, markdown_to_html},
};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to convert {path}: {source}")]
    Markup { path: PathBuf, source: MarkupError },
}

/// What a build produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Static files copied into the output directory.
    pub copied: Vec<PathBuf>,
    /// Generated HTML pages.
    pub pages: Vec<PathBuf>,
}

/// Fills the template placeholders and rewrites root-relative URLs.
///
/// `href="/` and `src="/` become `href="{basepath}` and `src="{basepath}`,
/// so a site can be served from a sub-path. `basepath` is expected to
/// start and end with `/`.
pub fn render_template(template: &str, title: &str, content: &str, basepath: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"))
}

/// Converts one document into a full page.
pub fn render_page(markdown: &str, template: &str, basepath: &str) -> Result<String, MarkupError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(render_template(template, &title, &content, basepath))
}

/// Reads `from`, renders it through `template_path`, and writes `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    basepath: &str,
) -> Result<(), SiteError> {
    log::info!(
        " * {} {} -> {}",
        from.display(),
        template_path.display(),
        dest.display()
    );

    let markdown = io::read_file(from)?;
    let template = io::read_file(template_path)?;

    let page = render_page(&markdown, &template, basepath).map_err(|source| SiteError::Markup {
        path: from.to_path_buf(),
        source,
    })?;

    io::write_file(dest, &page)?;
    Ok(())
}

/// Generates a page for every markdown file under `content_dir`, mirroring
/// its directory layout under `dest_dir` with `.md` swapped for `.html`.
///
/// Returns the written page paths, sorted by source path.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let mut pages = Vec::new();

    for from in io::scan_markdown_files(content_dir)? {
        let dest = output_path(content_dir, &from, dest_dir)?;
        generate_page(&from, template_path, &dest, basepath)?;
        pages.push(dest);
    }

    Ok(pages)
}

/// Maps `content_dir/a/b.md` to `dest_dir/a/b.html`.
pub fn output_path(content_dir: &Path, from: &Path, dest_dir: &Path) -> Result<PathBuf, IoError> {
    let relative = from
        .strip_prefix(content_dir)
        .map_err(|_| IoError::OutsideRoot {
            path: from.to_path_buf(),
            root: content_dir.to_path_buf(),
        })?;
    // Only fails for non-UTF-8 names; the prefix strip already made it relative
    let relative = RelativePathBuf::from_path(relative).map_err(|e| IoError::InvalidPath {
        path: from.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(relative.with_extension("html").to_path(dest_dir))
}

/// Rebuilds the whole site described by `config`.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport, SiteError> {
    let basepath = config.normalized_basepath();

    io::reset_dir(&config.output_dir)?;

    log::info!("Copying static files to {}...", config.output_dir.display());
    let copied = io::copy_dir_recursive(&config.static_dir, &config.output_dir)?;

    log::info!("Generating pages from {}...", config.content_dir.display());
    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &basepath,
    )?;

    Ok(BuildReport { copied, pages })
}
