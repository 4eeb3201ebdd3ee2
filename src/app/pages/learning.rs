use dioxus::prelude::*;

/// Placeholder for the learner's courses.
#[component]
pub fn MyLearning() -> Element {
    rsx! {
        div {
            h1 { class: "text-2xl font-semibold text-gray-800 mb-6", "My Learning" }
            p { class: "text-gray-600", "Your learning progress and courses will appear here." }
        }
    }
}
