//! Page components.
//!
//! `Home` and `About` render full screen; the rest are panes inside the
//! dashboard frame. `NotFound` renders nothing and redirects home.

mod about;
mod content;
mod home;
mod learning;
mod not_found;
mod profile;

pub use about::About;
pub use content::ManageContent;
pub use home::Home;
pub use learning::MyLearning;
pub use not_found::NotFound;
pub use profile::{DashboardIndex, Profile};
