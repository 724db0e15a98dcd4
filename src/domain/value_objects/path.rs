//! Path decomposition
//!
//! Pure slice arithmetic over `/`-separated relative paths. Nothing here
//! allocates except [`normalize_separators`], and a missing separator is a
//! regular result (`None` or the input itself), never an error.

use std::borrow::Cow;

/// Separator every path is normalized to before decomposition.
pub const SEPARATOR: char = '/';

/// Replace host-native `\` separators with `/`.
///
/// Borrows when the path is already normalized.
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Everything before the last `/`, or `None` for a root-level file.
pub fn folder(path: &str) -> Option<&str> {
    path.rfind(SEPARATOR).map(|idx| &path[..idx])
}

/// The last path segment with its extension removed.
pub fn file_name_without_extension(path: &str) -> &str {
    let stem = remove_extension(path);
    match stem.rfind(SEPARATOR) {
        Some(idx) => &stem[idx + 1..],
        None => stem,
    }
}

/// The extension including its leading `.`, or `None` if there is no `.`.
pub fn extension(path: &str) -> Option<&str> {
    path.rfind('.').map(|idx| &path[idx..])
}

/// Everything before the last `.`; the whole input when there is no `.`.
pub fn remove_extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Case-insensitive (ASCII) suffix test that never slices inside a char.
pub fn ends_with_ignore_case(path: &str, suffix: &str) -> bool {
    let (path, suffix) = (path.as_bytes(), suffix.as_bytes());
    path.len() >= suffix.len() && path[path.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Non-empty `/`-separated segments of a folder path.
pub fn segments(folder: &str) -> impl Iterator<Item = &str> {
    folder.split(SEPARATOR).filter(|s| !s.is_empty())
}
