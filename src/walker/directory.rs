use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collect every JSON file reachable from the root, at any
/// depth. The order is whatever the underlying walk yields.
pub fn find_json_files(root: &Path, follow_links: bool) -> Result<Vec<PathBuf>, io::Error> {
    let mut json_files = Vec::new();

    for entry in WalkDir::new(root).follow_links(follow_links) {
        let entry = entry?;
        let path = entry.path();
        if crate::walker::filter::is_json_file(path) {
            json_files.push(path.to_path_buf());
        }
    }

    Ok(json_files)
}
