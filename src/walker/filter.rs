use std::path::Path;

/// Return true if the file name ends with the literal `.json` suffix.
/// The match is case-sensitive, so `data.JSON` is not a candidate.
pub fn is_json_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    path.is_file() && name.ends_with(".json")
}
