//! Breadcrumb trail for the dashboard header.

/// Path the dashboard frame is mounted at.
pub const DASHBOARD_ROOT: &str = "/dashboard";

/// Label of the first breadcrumb, regardless of path.
pub const DASHBOARD_LABEL: &str = "Dashboard";

/// One entry of the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub target: String,
}

impl Crumb {
    fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// Split a path on `/`, dropping empty tokens.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Turn a slug like `my-learning` into a display label like `My Learning`.
///
/// Dashes become spaces and the first character of every word is
/// upper-cased. Runs of dashes leave empty words in place, so spacing is
/// preserved rather than collapsed.
pub fn pretty_label(segment: &str) -> String {
    segment
        .replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build the breadcrumb trail for `path`.
///
/// The first segment is assumed to be the dashboard root and is always
/// rendered as [`DASHBOARD_LABEL`]; each following segment adds one entry
/// whose target accumulates the segments seen so far.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let segments = path_segments(path);

    let mut trail = Vec::with_capacity(segments.len().max(1));
    trail.push(Crumb::new(DASHBOARD_LABEL, DASHBOARD_ROOT));

    let mut target = String::from(DASHBOARD_ROOT);
    for segment in segments.iter().skip(1) {
        target.push('/');
        target.push_str(segment);
        trail.push(Crumb::new(pretty_label(segment), target.clone()));
    }

    trail
}

/// A chevron follows every crumb except the last.
pub fn separator_after(index: usize, len: usize) -> bool {
    index + 1 < len
}

/// The current page is bold; ancestors tint on hover.
pub fn crumb_class(is_current: bool) -> &'static str {
    if is_current {
        "transition-colors duration-200 font-semibold text-gray-900"
    } else {
        "transition-colors duration-200 hover:text-blue-600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_label() {
        assert_eq!(pretty_label("manage-content"), "Manage Content");
        assert_eq!(pretty_label("my-learning"), "My Learning");
        assert_eq!(pretty_label("profile"), "Profile");
    }

    #[test]
    fn test_pretty_label_keeps_empty_words() {
        assert_eq!(pretty_label("a--b"), "A  B");
        assert_eq!(pretty_label("-x"), " X");
        assert_eq!(pretty_label(""), "");
    }

    #[test]
    fn test_path_segments_drops_empty_tokens() {
        assert_eq!(path_segments("/dashboard//profile/"), vec!["dashboard", "profile"]);
        assert!(path_segments("/").is_empty());
    }

    #[test]
    fn test_dashboard_root_has_single_crumb() {
        let trail = breadcrumbs("/dashboard");
        assert_eq!(trail, vec![Crumb::new("Dashboard", "/dashboard")]);

        // Trailing slash renders the same trail
        assert_eq!(breadcrumbs("/dashboard/"), trail);
    }

    #[test]
    fn test_manage_content_trail() {
        assert_eq!(
            breadcrumbs("/dashboard/manage-content"),
            vec![
                Crumb::new("Dashboard", "/dashboard"),
                Crumb::new("Manage Content", "/dashboard/manage-content"),
            ]
        );
    }

    #[test]
    fn test_targets_accumulate() {
        let trail = breadcrumbs("/dashboard/courses/rust-basics/week-two");
        let targets: Vec<_> = trail.iter().map(|c| c.target.as_str()).collect();
        assert_eq!(
            targets,
            vec![
                "/dashboard",
                "/dashboard/courses",
                "/dashboard/courses/rust-basics",
                "/dashboard/courses/rust-basics/week-two",
            ]
        );
        assert_eq!(trail[2].label, "Rust Basics");
        assert_eq!(trail[3].label, "Week Two");
    }

    #[test]
    fn test_trail_length_matches_segments() {
        for path in [
            "/",
            "",
            "/dashboard",
            "/dashboard/profile",
            "/dashboard/a/b",
            "/dashboard/a/b/c/d",
        ] {
            let after_root = path_segments(path).len().saturating_sub(1);
            assert_eq!(breadcrumbs(path).len(), 1 + after_root, "path {path:?}");
        }
    }

    fn separators(path: &str) -> Vec<bool> {
        let len = breadcrumbs(path).len();
        (0..len).map(|idx| separator_after(idx, len)).collect()
    }

    #[test]
    fn test_dashboard_root_has_no_separator() {
        assert_eq!(separators("/dashboard"), vec![false]);
    }

    #[test]
    fn test_separators_only_between_crumbs() {
        assert_eq!(separators("/dashboard/manage-content"), vec![true, false]);
        assert_eq!(separators("/dashboard/a/b"), vec![true, true, false]);
    }

    #[test]
    fn test_only_last_crumb_is_bold() {
        let trail = breadcrumbs("/dashboard/courses/rust-basics");
        let len = trail.len();
        let bold: Vec<_> = (0..len)
            .map(|idx| crumb_class(!separator_after(idx, len)).contains("font-semibold"))
            .collect();
        assert_eq!(bold, vec![false, false, true]);
        assert!(crumb_class(false).contains("hover:text-blue-600"));
    }
}
