use std::path::{Component, Path};

/// Produce the destination directory inside the bundle for a file found in `relative_dir`.
///
/// Files directly under the source root land in `output_root` itself; files in nested
/// directories keep their structure below it. The result always uses forward slashes so the
/// mapping reads the same on every platform. Returns `None` when a component of
/// `relative_dir` is not valid UTF-8.
pub fn destination_dir(output_root: &str, relative_dir: &Path) -> Option<String> {
    let relative = relative_to_slash(relative_dir)?;
    if relative.is_empty() {
        Some(output_root.to_string())
    } else {
        Some(format!("{}/{}", output_root.trim_end_matches('/'), relative))
    }
}

/// Join the normal components of a relative path with `/`.
///
/// `.` components are dropped, which makes `Path::new("")` and `Path::new(".")` both map to
/// an empty string. Returns `None` when any component is not valid UTF-8.
pub fn relative_to_slash(path: &Path) -> Option<String> {
    let parts = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    Some(parts.join("/"))
}
