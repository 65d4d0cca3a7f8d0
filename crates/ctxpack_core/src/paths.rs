use log::trace;
use std::path::{Component, Path, PathBuf};

/// Create a relative path from `base` to `target`
pub fn make_relative(target: &Path, base: &Path) -> Option<PathBuf> {
    let mut target_components = target.components();
    let mut base_components = base.components();

    let mut common_prefix_len = 0;
    let mut target_parts = Vec::new();
    let mut base_parts = Vec::new();

    loop {
        match (target_components.next(), base_components.next()) {
            (Some(t), Some(b)) if t == b => {
                common_prefix_len += 1;
            }
            (Some(t), Some(b)) => {
                target_parts.push(t);
                base_parts.push(b);
                break;
            }
            (Some(t), None) => {
                target_parts.push(t);
                break;
            }
            (None, Some(b)) => {
                base_parts.push(b);
                break;
            }
            (None, None) => return Some(PathBuf::from(".")),
        }
    }

    target_parts.extend(target_components);
    base_parts.extend(base_components);

    if common_prefix_len == 0 && target.components().next() != base.components().next() {
        return None;
    }

    let mut result = PathBuf::new();
    for _ in &base_parts {
        result.push("..");
    }
    for component in target_parts {
        match component {
            Component::Normal(p) => result.push(p),
            Component::ParentDir => result.push(".."),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() { Some(PathBuf::from(".")) } else { Some(result) }
}

/// Path of `path` relative to the project root, as written into reports.
///
/// Falls back to the path as given when no relative form exists
/// (e.g. different drive prefixes on Windows).
pub fn display_path(root: &Path, path: &Path) -> String {
    let rel = make_relative(path, root).unwrap_or_else(|| path.to_path_buf());
    let shown = rel.to_string_lossy().to_string();
    trace!("Display path for {} is '{}'", path.display(), shown);
    shown
}
