//! Whitespace handling for text pulled out of parsed markup.

/// Joins text runs into one string with a run per line
///
/// Each run is trimmed and empty runs are dropped, so block boundaries,
/// indentation and blank lines in the source all collapse into single line
/// breaks.
pub fn join_lines<'a, I>(runs: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    runs.into_iter()
        .map(str::trim)
        .filter(|run| !run.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Joins text runs into a single line
///
/// Runs are separated by a space and every whitespace sequence is then
/// collapsed to one space.
pub fn join_inline<'a, I>(runs: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = runs.into_iter().collect::<Vec<_>>().join(" ");
    normalize_whitespace(&joined)
}

/// Collapse whitespace sequences into single spaces and trim the ends
pub fn normalize_whitespace(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}
