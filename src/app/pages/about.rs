use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50 p-8",
            div { class: "max-w-4xl mx-auto bg-white rounded-xl shadow-md p-8",
                h1 { class: "text-3xl font-bold text-gray-800 mb-6", "About LearnHub" }
                p { class: "text-gray-600 mb-4",
                    "LearnHub is a modern learning platform designed to help you achieve your educational goals."
                }
                p { class: "text-gray-600",
                    "We offer a wide range of courses and learning materials to help you expand your knowledge and skills."
                }
            }
        }
    }
}
