// Path normalization for registry files
// Paths are `/`-separated on every platform since they end up in JSON.

use crate::entities::RegistryFile;
use crate::value_objects::RegistryItemType;

fn split_segments(path: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(out.last(), Some(last) if last != "..") {
                    out.pop();
                } else {
                    out.push("..".to_string());
                }
            }
            other => out.push(other.to_string()),
        }
    }
    out
}

/// Drops empty and `.` segments and folds `..` where possible.
pub fn normalize_path(path: &str) -> String {
    split_segments(path).join("/")
}

/// True when the normalized path climbs above its starting directory.
pub fn escapes_root(path: &str) -> bool {
    split_segments(path)
        .first()
        .map(|segment| segment == "..")
        .unwrap_or(false)
}

pub fn parent_dir(path: &str) -> String {
    let mut segments = split_segments(path);
    segments.pop();
    segments.join("/")
}

pub fn file_name(path: &str) -> Option<String> {
    split_segments(path)
        .pop()
        .filter(|segment| segment != "..")
}

/// Path of `to` as seen from the directory `from_dir`.
pub fn relative_path(from_dir: &str, to: &str) -> String {
    let from = split_segments(from_dir);
    let to = split_segments(to);
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let mut parts: Vec<&str> = Vec::with_capacity(from.len() - common + to.len() - common);
    parts.extend(std::iter::repeat("..").take(from.len() - common));
    parts.extend(to[common..].iter().map(String::as_str));
    parts.join("/")
}

/// Default install destination for a file of the given type, or `""` when
/// the path has no file name.
pub fn install_target(file_type: RegistryItemType, path: &str) -> String {
    file_name(path)
        .map(|name| format!("{}/{}", file_type.install_dir(), name))
        .unwrap_or_default()
}

/// Explicit target when set and non-blank, otherwise the type default.
pub fn resolve_target(file: &RegistryFile) -> String {
    match file.target.as_deref().map(str::trim) {
        Some(target) if !target.is_empty() => target.to_string(),
        _ => install_target(file.file_type, &file.path),
    }
}

/// Rewrites every path relative to the first file's directory and fills in
/// install targets.
pub fn fix_file_paths(files: Vec<RegistryFile>) -> Vec<RegistryFile> {
    let Some(first) = files.first() else {
        return Vec::new();
    };
    let anchor = parent_dir(&first.path);
    files
        .into_iter()
        .map(|file| {
            let target = resolve_target(&file);
            let path = relative_path(&anchor, &file.path);
            RegistryFile {
                path,
                target: Some(target),
                ..file
            }
        })
        .collect()
}
