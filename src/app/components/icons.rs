//! Inline SVG icons (Lucide outlines).

use dioxus::prelude::*;

use crate::navigation::NavIcon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    User,
    BookOpen,
    Folder,
    LogOut,
    ChevronLeft,
    ChevronRight,
    Menu,
    Close,
}

impl IconKind {
    /// Path data on a 24x24 grid.
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
            ],
            IconKind::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            IconKind::Folder => &[
                "M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z",
            ],
            IconKind::LogOut => &[
                "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
                "m16 17 5-5-5-5",
                "M21 12H9",
            ],
            IconKind::ChevronLeft => &["m15 18-6-6 6-6"],
            IconKind::ChevronRight => &["m9 18 6-6-6-6"],
            IconKind::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

impl From<NavIcon> for IconKind {
    fn from(icon: NavIcon) -> Self {
        match icon {
            NavIcon::User => IconKind::User,
            NavIcon::BookOpen => IconKind::BookOpen,
            NavIcon::Folder => IconKind::Folder,
            NavIcon::LogOut => IconKind::LogOut,
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[props(into)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            "stroke-width": "2",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            for d in kind.paths() {
                path { d: *d }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NAV_ENTRIES;

    #[test]
    fn test_nav_icons_have_paths() {
        for entry in NAV_ENTRIES {
            assert!(!IconKind::from(entry.icon).paths().is_empty());
        }
    }
}
