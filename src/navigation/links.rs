//! Sidebar navigation entries and active-link styling.
//!
//! Class strings are spelled out in full (never assembled with `format!`)
//! so the Tailwind scanner can see every utility that may be emitted.

/// Target of the logout entry. No route matches it, so it falls through to
/// the home redirect.
pub const LOGOUT_PATH: &str = "/logout";

/// Accent colour used when an entry is highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Amber,
    Red,
}

impl Accent {
    /// Link classes when the entry matches the current path.
    pub fn active_link(self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-50 text-blue-700 font-medium",
            Accent::Green => "bg-green-50 text-green-700 font-medium",
            Accent::Amber => "bg-amber-50 text-amber-700 font-medium",
            Accent::Red => "bg-red-50 text-red-700 font-medium",
        }
    }

    /// Icon container classes when the entry matches the current path.
    pub fn active_icon(self) -> &'static str {
        match self {
            Accent::Blue => "bg-blue-100 text-blue-600",
            Accent::Green => "bg-green-100 text-green-600",
            Accent::Amber => "bg-amber-100 text-amber-600",
            Accent::Red => "bg-red-100 text-red-600",
        }
    }

    /// Icon container classes when inactive (accent only on hover).
    pub fn idle_icon(self) -> &'static str {
        match self {
            Accent::Blue => "bg-gray-100 text-gray-500 group-hover:bg-blue-100 group-hover:text-blue-600",
            Accent::Green => "bg-gray-100 text-gray-500 group-hover:bg-green-100 group-hover:text-green-600",
            Accent::Amber => "bg-gray-100 text-gray-500 group-hover:bg-amber-100 group-hover:text-amber-600",
            Accent::Red => "bg-gray-100 text-gray-500 group-hover:bg-red-100 group-hover:text-red-600",
        }
    }
}

const IDLE_LINK: &str = "text-gray-600 hover:bg-gray-50 hover:text-gray-800";

/// Icon drawn in front of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    User,
    BookOpen,
    Folder,
    LogOut,
}

/// A static sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub target: &'static str,
    pub accent: Accent,
    pub icon: NavIcon,
}

/// Sidebar entries, top to bottom.
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Profile",
        target: "/dashboard/profile",
        accent: Accent::Blue,
        icon: NavIcon::User,
    },
    NavEntry {
        label: "My Learning",
        target: "/dashboard/my-learning",
        accent: Accent::Green,
        icon: NavIcon::BookOpen,
    },
    NavEntry {
        label: "Manage Content",
        target: "/dashboard/manage-content",
        accent: Accent::Amber,
        icon: NavIcon::Folder,
    },
    NavEntry {
        label: "Logout",
        target: LOGOUT_PATH,
        accent: Accent::Red,
        icon: NavIcon::LogOut,
    },
];

impl NavEntry {
    /// Exact match only: nested paths below the target do not count.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.target == current_path
    }

    pub fn link_class(&self, active: bool, minimized: bool) -> String {
        let layout = if minimized { "justify-center" } else { "gap-3" };
        let tone = if active {
            self.accent.active_link()
        } else {
            IDLE_LINK
        };
        format!("group py-2.5 px-3 rounded-lg flex items-center {layout} transition-all duration-200 {tone}")
    }

    pub fn icon_class(&self, active: bool) -> String {
        let tone = if active {
            self.accent.active_icon()
        } else {
            self.accent.idle_icon()
        };
        format!("p-1.5 rounded-md transition-colors duration-200 {tone}")
    }

    /// Hover title; only set while labels are hidden.
    pub fn title(&self, minimized: bool) -> &'static str {
        if minimized {
            self.label
        } else {
            ""
        }
    }
}
