/// Splits a catch-all slug into its non-empty segments.
pub fn path_segments(slug: &str) -> Vec<String> {
    slug.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// A project id must fit into a single URL path segment.
pub fn is_valid_project(project: &str) -> bool {
    !matches!(project, "" | "." | "..")
        && project
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
