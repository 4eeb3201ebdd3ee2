//! Landing page.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 flex items-center justify-center",
            div { class: "text-center p-8 bg-white rounded-xl shadow-lg max-w-md",
                h1 { class: "text-3xl font-bold text-gray-800 mb-4", "Welcome to LearnHub" }
                p { class: "text-gray-600 mb-6", "Your learning journey starts here" }
                Link {
                    to: Route::DashboardIndex {},
                    class: "bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 transition-colors",
                    "Go to Dashboard"
                }
            }
        }
    }
}
