//! Renderer-independent navigation logic for the dashboard frame.
//!
//! Everything here is a pure function of the current path or of the
//! sidebar flags, so it can be tested without mounting any component.
//! - [`breadcrumb`] - breadcrumb trail derived from the current path
//! - [`links`] - static sidebar entries and their active-highlight styling
//! - [`sidebar`] - responsive sidebar state machine

pub mod breadcrumb;
pub mod links;
pub mod sidebar;

pub use breadcrumb::{
    breadcrumbs, crumb_class, path_segments, pretty_label, separator_after, Crumb, DASHBOARD_ROOT,
};
pub use links::{Accent, NavEntry, NavIcon, LOGOUT_PATH, NAV_ENTRIES};
pub use sidebar::{SidebarState, MOBILE_BREAKPOINT_PX};
