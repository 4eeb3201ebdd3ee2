//! Dashboard header: mobile menu button, breadcrumbs and profile link.

use dioxus::prelude::*;

use super::icons::{Icon, IconKind};
use crate::app::{use_shell_settings, Route};
use crate::navigation::{breadcrumbs, crumb_class, separator_after, SidebarState};

#[component]
pub fn DashboardHeader(mut state: Signal<SidebarState>) -> Element {
    let settings = use_shell_settings();
    let trail = breadcrumbs(&use_route::<Route>().to_string());
    let len = trail.len();

    rsx! {
        header { class: "sticky top-0 h-16 bg-white border-b border-gray-200/60 flex items-center justify-between px-6 z-10",
            div { class: "flex items-center",
                // Mobile menu button
                button {
                    class: "md:hidden mr-3 hover:bg-gray-100 rounded-lg transition-all duration-200",
                    aria_label: "Toggle Sidebar",
                    onclick: move |_| state.write().show(),
                    Icon { kind: IconKind::Menu, class: "h-5 w-5 text-gray-600" }
                }

                // Breadcrumbs
                nav { class: "text-sm flex items-center gap-2 text-gray-600",
                    for (idx, crumb) in trail.into_iter().enumerate() {
                        span { key: "{crumb.target}-{idx}", class: "flex items-center gap-2",
                            Link {
                                to: crumb.target.clone(),
                                class: crumb_class(!separator_after(idx, len)),
                                "{crumb.label}"
                            }
                            if separator_after(idx, len) {
                                Icon { kind: IconKind::ChevronRight, class: "h-3 w-3 opacity-60" }
                            }
                        }
                    }
                }
            }

            // User profile link
            Link {
                to: Route::Profile {},
                class: "flex items-center gap-2 text-sm text-gray-700 hover:text-blue-600 transition-colors duration-200 group",
                div { class: "w-8 h-8 rounded-full bg-gradient-to-r from-blue-500 to-indigo-600 flex items-center justify-center shadow-sm",
                    Icon { kind: IconKind::User, class: "h-4 w-4 text-white" }
                }
                span { class: "hidden sm:inline font-medium", "{settings.user_name}" }
            }
        }
    }
}
