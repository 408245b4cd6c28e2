//! String and path helpers shared by linter adapters

use std::path::Path;

/// Remove a single trailing period from a linter message
pub fn remove_trailing_period(message: &str) -> &str {
    message.strip_suffix('.').unwrap_or(message)
}

/// Express `file_path` relative to `dir` by removing the directory prefix and
/// one path separator. Paths that do not live under `dir` are returned as-is.
pub fn relative_path(dir: &Path, file_path: &str) -> String {
    const SEPARATORS: &[char] = &['/', '\\'];

    let dir = dir.to_string_lossy();
    if dir.is_empty() {
        return file_path.to_string();
    }
    match file_path.strip_prefix(&*dir) {
        // The prefix must end on a component boundary: `/repo/proj` is not
        // a parent of `/repo/project/a.js`
        Some(rest) if dir.ends_with(SEPARATORS) => rest.to_string(),
        Some("") => String::new(),
        Some(rest) => match rest.strip_prefix(SEPARATORS) {
            Some(relative) => relative.to_string(),
            None => file_path.to_string(),
        },
        None => file_path.to_string(),
    }
}

/// Build the `--ext` value: dot-prefixed extensions joined by commas
pub fn extensions_arg<S: AsRef<str>>(extensions: &[S]) -> String {
    extensions
        .iter()
        .map(|ext| {
            let ext = ext.as_ref();
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Split free-form extra arguments into argv words
pub fn split_args(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}
