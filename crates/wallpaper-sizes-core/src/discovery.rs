use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{Orientation, TemplateFile};

/// Lazily find files under `root` whose basename is exactly one of `names`
///
/// Yields paths in directory traversal order. Unreadable entries are logged
/// and skipped.
pub fn find_templates<'a>(
    root: &Path,
    names: &'a [String],
    max_depth: Option<usize>,
) -> Result<impl Iterator<Item = PathBuf> + 'a> {
    // Check if directory exists
    if !root.exists() {
        return Err(Error::FileNotFound(root.to_path_buf()));
    }

    let max_depth = max_depth.unwrap_or(usize::MAX);

    let matches = WalkDir::new(root)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(move |entry| is_template_name(entry.path(), names))
        .map(|entry| entry.into_path());

    Ok(matches)
}

/// Discover the templates of every orientation configured in `config`
pub fn discover_templates(config: &Config) -> Result<Vec<TemplateFile>> {
    let mut templates = Vec::new();

    for orientation in Orientation::ALL {
        let names = config.templates.get(orientation);
        for path in find_templates(&config.root, names, config.max_depth)? {
            debug!("Found {} template {}", orientation, path.display());
            templates.push(TemplateFile { path, orientation });
        }
    }

    Ok(templates)
}

/// Returns if the basename of `path` is one of `names`
pub fn is_template_name(path: &Path, names: &[String]) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(file_name) => names.iter().any(|name| name == file_name),
        None => false,
    }
}

// -- Tests --
