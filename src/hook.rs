//! Post-build copy of the cosimulation viewer pages.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::SiteConfig;

/// Pages the generator leaves out of its output tree, as
/// `(subdirectory, filename)` relative to both roots.
const VIEWER_PAGES: &[(&str, &str)] = &[
    ("cosimulation", "symbol_gen.html"),
    ("cosimulation", "yosys_online.html"),
];

/// Errors that can occur while relocating a page.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("Failed to create directory: {0}")]
    CreateDir(String),

    #[error("Failed to copy file: {0}")]
    Copy(String),
}

/// Copy one file from the docs tree to the same relative spot in the site
/// tree.
///
/// The destination directory is created first in any case. A missing source
/// is logged and skipped; filesystem failures are returned to the caller.
pub fn copy_file_safe(config: &SiteConfig, dir: &str, filename: &str) -> Result<(), HookError> {
    let source = config.docs_dir.join(dir).join(filename);
    let dest = config.site_dir.join(dir).join(filename);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| HookError::CreateDir(format!("{}: {}", parent.display(), e)))?;
    }

    if source.exists() {
        copy_with_times(&source, &dest).map_err(|e| {
            HookError::Copy(format!(
                "{} to {}: {}",
                source.display(),
                dest.display(),
                e
            ))
        })?;
        tracing::info!("Copied {} to {}", source.display(), dest.display());
    } else {
        tracing::warn!("{} not found", source.display());
    }

    Ok(())
}

/// `fs::copy` carries bytes and permission bits but not the modification
/// time; set it on the destination explicitly.
fn copy_with_times(source: &Path, dest: &Path) -> io::Result<()> {
    fs::copy(source, dest)?;

    let modified = fs::metadata(source)?.modified()?;
    let file = fs::OpenOptions::new().write(true).open(dest)?;
    file.set_modified(modified)?;

    Ok(())
}

/// Run once after the generator has written the site.
///
/// Copies each viewer page in a fixed order; the first filesystem failure
/// aborts the remaining copies.
pub fn on_post_build(config: &SiteConfig) -> Result<(), HookError> {
    for &(dir, filename) in VIEWER_PAGES {
        copy_file_safe(config, dir, filename)?;
    }

    Ok(())
}
