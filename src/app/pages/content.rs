use dioxus::prelude::*;

/// Placeholder for content management.
#[component]
pub fn ManageContent() -> Element {
    rsx! {
        div {
            h1 { class: "text-2xl font-semibold text-gray-800 mb-6", "Manage Content" }
            p { class: "text-gray-600", "Manage your learning content and resources here." }
        }
    }
}
