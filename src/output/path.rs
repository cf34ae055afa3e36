//! Output path selection

use std::path::{Path, PathBuf};

/// Picks a path for the output file that does not exist yet
///
/// Returns `base` itself when it is free, otherwise `<stem>_<N><ext>` in the
/// same directory with the lowest free `N` starting at 1. An existing file is
/// never returned.
///
/// # Example
///
/// ```no_run
/// use brochure_scraper::output::choose_output_path;
/// use std::path::Path;
///
/// // prices.xlsx exists, prices_1.xlsx does not
/// let path = choose_output_path(Path::new("prices.xlsx"));
/// assert_eq!(path, Path::new("prices_1.xlsx"));
/// ```
pub fn choose_output_path(base: &Path) -> PathBuf {
    if !base.exists() {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = base
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let parent = base.parent().unwrap_or_else(|| Path::new(""));

    let mut counter: u64 = 1;
    loop {
        let candidate = parent.join(format!("{}_{}{}", stem, counter, extension));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
