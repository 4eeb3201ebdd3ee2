//! Components of the dashboard frame.

pub mod frame;
pub mod header;
pub mod icons;
pub mod sidebar;
mod viewport;

pub use frame::DashboardFrame;
pub use header::DashboardHeader;
pub use icons::{Icon, IconKind};
pub use sidebar::Sidebar;
