use crate::error::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PAGE_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^page-(\d+)\.png$").expect("page file pattern is valid"));

/// The file name for a 1-based page number, e.g. `page-007.png`.
///
/// Numbers past 999 widen the field instead of being truncated.
pub fn page_file_name(page_number: usize) -> String {
    format!("page-{page_number:03}.png")
}

/// Collect the page images in `dir`, ordered by page number.
///
/// A directory that does not exist holds no pages.
pub fn list_page_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
        Err(source) => {
            return Err(Error::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut pages: Vec<(u64, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let captures = PAGE_FILE_PATTERN.captures(name)?;
            let num: u64 = captures.get(1)?.as_str().parse().ok()?;
            Some((num, path))
        })
        .collect();

    pages.sort_by_key(|e| e.0);

    Ok(pages.into_iter().map(|e| e.1).collect())
}
