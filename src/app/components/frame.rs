//! Dashboard frame: sidebar, header and the nested pane.

use dioxus::prelude::*;

use super::{DashboardHeader, Sidebar};
use crate::app::Route;
use crate::navigation::SidebarState;

/// Layout wrapping every `/dashboard` route.
///
/// Owns the sidebar state for as long as the frame is mounted; leaving the
/// dashboard and coming back starts from a closed, expanded sidebar.
#[component]
pub fn DashboardFrame() -> Element {
    let sidebar = use_signal(SidebarState::default);

    rsx! {
        div { class: "h-screen flex bg-gray-50",
            Sidebar { state: sidebar }

            div { class: "flex flex-col flex-1 overflow-auto transition-all duration-300",
                DashboardHeader { state: sidebar }
                main { class: "flex-1 p-6 overflow-auto",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
