//! Site generation: write the rendered page and its files to disk.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html        # The page: inline CSS, JSON payload, runtime script
//! ├── avatar.png        # Copied from <source>/<site.avatar>, if present
//! └── favicon.ico ...   # Everything under <source>/<site.assets_dir>/
//! ```
//!
//! A missing avatar is not an error: the page keeps its `<img>` and the
//! browser shows its default broken-image placeholder. The report records it
//! so the CLI can warn.
//!
//! Assets may not shadow generated files: an asset at `index.html`, or at the
//! avatar's path when the avatar exists, fails the build before anything is
//! written.

use crate::config::{ConfigError, SiteConfig};
use crate::content::Content;
use crate::render::{self, RenderContext};
use crate::shell::PageView;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Asset walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Asset {0} would overwrite a generated file")]
    AssetCollision(PathBuf),
}

const INDEX_FILE: &str = "index.html";

/// What happened to the avatar image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarStatus {
    Copied(String),
    Missing(String),
}

/// Summary of a generate run, for CLI output.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub index_path: PathBuf,
    pub index_bytes: usize,
    pub avatar: AvatarStatus,
    /// Asset files copied, relative to the output root.
    pub assets: Vec<PathBuf>,
}

/// Render the page and write the site into `output_dir`.
/// Validates `config` before anything is written.
pub fn generate(
    content: &Content,
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
    year: i32,
) -> Result<GenerateReport, GenerateError> {
    config.validate()?;

    let assets = collect_assets(&source_dir.join(&config.site.assets_dir))?;
    let mut reserved = vec![PathBuf::from(INDEX_FILE)];
    if source_dir.join(&config.site.avatar).is_file() {
        reserved.push(PathBuf::from(&config.site.avatar));
    }
    if let Some((_, relative)) = assets.iter().find(|(_, rel)| reserved.contains(rel)) {
        return Err(GenerateError::AssetCollision(relative.clone()));
    }

    fs::create_dir_all(output_dir)?;

    let avatar_src = url_path(&config.site.avatar);
    let ctx = RenderContext {
        year,
        avatar_src: &avatar_src,
    };
    let html = render::render_page(content, config, &PageView::default(), &ctx)?.into_string();
    let index_path = output_dir.join(INDEX_FILE);
    fs::write(&index_path, &html)?;

    let avatar = copy_avatar(&config.site.avatar, source_dir, output_dir)?;
    let assets = copy_assets(assets, output_dir)?;

    Ok(GenerateReport {
        index_path,
        index_bytes: html.len(),
        avatar,
        assets,
    })
}

/// Forward-slash form of a relative path, for use in `src` attributes.
fn url_path(relative: &str) -> String {
    relative.replace('\\', "/")
}

fn copy_avatar(
    avatar: &str,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<AvatarStatus, GenerateError> {
    let src = source_dir.join(avatar);
    if !src.is_file() {
        return Ok(AvatarStatus::Missing(avatar.to_string()));
    }
    let dst = output_dir.join(avatar);
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&src, &dst)?;
    Ok(AvatarStatus::Copied(avatar.to_string()))
}

/// Every file under `assets_dir` with its path relative to it, in name order.
fn collect_assets(assets_dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>, GenerateError> {
    let mut assets = Vec::new();
    if !assets_dir.is_dir() {
        return Ok(assets);
    }
    for entry in WalkDir::new(assets_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let relative = relative.to_path_buf();
        assets.push((entry.into_path(), relative));
    }
    Ok(assets)
}

/// Copy collected assets into the output root.
fn copy_assets(
    assets: Vec<(PathBuf, PathBuf)>,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mut copied = Vec::with_capacity(assets.len());
    for (src, relative) in assets {
        let dst = output_dir.join(&relative);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dst)?;
        copied.push(relative);
    }
    Ok(copied)
}
