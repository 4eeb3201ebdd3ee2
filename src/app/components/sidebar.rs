//! Dashboard sidebar with mobile overlay and desktop minimize control.

use dioxus::prelude::*;

use super::icons::{Icon, IconKind};
use super::viewport::viewport_width;
use crate::app::{use_shell_settings, Route};
use crate::navigation::{NavEntry, SidebarState, NAV_ENTRIES};

#[component]
pub fn Sidebar(mut state: Signal<SidebarState>) -> Element {
    let settings = use_shell_settings();
    let current_path = use_route::<Route>().to_string();
    let breakpoint = settings.mobile_breakpoint_px;

    let sidebar = state();

    rsx! {
        // Mobile overlay
        if sidebar.shows_overlay() {
            div {
                class: "fixed inset-0 bg-gray-400 opacity-80 z-40 md:hidden",
                onclick: move |_| state.write().dismiss(),
            }
        }

        aside { class: sidebar.aside_class(),
            // Brand
            div { class: sidebar.brand_row_class(),
                if sidebar.shows_labels() {
                    div {
                        h1 { class: "text-xl font-bold text-gray-800", "{settings.brand}" }
                    }
                }
                // Minimize on desktop, close on mobile
                div { class: "flex items-center gap-2",
                    button {
                        class: "hidden md:flex p-1.5 hover:bg-gray-100 rounded-lg transition-colors duration-200",
                        aria_label: sidebar.minimize_label(),
                        onclick: move |_| state.write().toggle_minimized(),
                        Icon { kind: IconKind::ChevronLeft, class: sidebar.chevron_class() }
                    }
                    button {
                        class: "md:hidden p-1.5 hover:bg-gray-100 rounded-lg transition-colors duration-200",
                        aria_label: "Close sidebar",
                        onclick: move |_| state.write().dismiss(),
                        Icon { kind: IconKind::Close, class: "h-4 w-4 text-gray-600" }
                    }
                }
            }

            if sidebar.shows_labels() {
                div { class: "w-full h-px bg-gray-200 mb-4" }
            }

            nav { class: "flex flex-col gap-1 px-3",
                for entry in NAV_ENTRIES {
                    SidebarLink {
                        key: "{entry.target}",
                        entry,
                        active: entry.is_active(&current_path),
                        labels: sidebar.shows_labels(),
                        on_activate: move |_| state.write().link_activated(viewport_width(), breakpoint),
                    }
                }
            }

            if sidebar.shows_labels() {
                div { class: "absolute bottom-4 left-5 right-5",
                    p { class: "text-xs text-gray-400", "{settings.copyright}" }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(
    entry: NavEntry,
    active: bool,
    labels: bool,
    on_activate: EventHandler<()>,
) -> Element {
    rsx! {
        Link {
            to: entry.target,
            class: entry.link_class(active, !labels),
            title: entry.title(!labels),
            onclick: move |_| on_activate.call(()),
            div { class: entry.icon_class(active),
                Icon { kind: IconKind::from(entry.icon), class: "h-4 w-4" }
            }
            if labels {
                span { class: "text-sm", "{entry.label}" }
            }
        }
    }
}
