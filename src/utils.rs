/// Convert a page path to the slug used for its output files
///
/// Every `/` becomes `_` and leading/trailing underscores are trimmed; the
/// site root maps to `home`.
pub fn slug(path: &str) -> String {
    let name = path.replace('/', "_");
    let name = name.trim_matches('_');
    if name.is_empty() {
        "home".to_string()
    } else {
        name.to_string()
    }
}

/// Replace every character outside `[A-Za-z0-9_.-]` with an underscore
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
