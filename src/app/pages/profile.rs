//! Profile pane with hardcoded account details and learning statistics.

use dioxus::prelude::*;

/// (label, value) pairs in the profile information grid.
const PROFILE_FIELDS: [(&str, &str); 6] = [
    ("Full Name", "John Doe"),
    ("Phone Number", "+1 (555) 123-4567"),
    ("Email Address", "john.doe@example.com"),
    ("Join Date", "January 15, 2024"),
    ("Role", "Student"),
    ("Location", "San Francisco, CA"),
];

/// (value, label, card classes) for the statistics grid.
const LEARNING_STATS: [(&str, &str, &str); 4] = [
    ("12", "Courses Completed", "bg-blue-50 text-blue-600"),
    ("156", "Hours Learned", "bg-green-50 text-green-600"),
    ("8", "Certificates Earned", "bg-yellow-50 text-yellow-600"),
    ("23", "Day Streak", "bg-purple-50 text-purple-600"),
];

/// `/dashboard` with no suffix shows the profile.
#[component]
pub fn DashboardIndex() -> Element {
    rsx! {
        Profile {}
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        div { class: "space-y-6",
            div { class: "bg-white p-6 rounded-lg shadow",
                h2 { class: "text-xl font-bold mb-4 text-gray-800", "Profile Information" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-4 text-gray-600",
                    for (label, value) in PROFILE_FIELDS {
                        ProfileField { key: "{label}", label, value }
                    }
                }
            }

            div { class: "bg-white p-6 rounded-lg shadow",
                h2 { class: "text-xl font-bold mb-4 text-gray-800", "Learning Statistics" }
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    for (number, label, tone) in LEARNING_STATS {
                        StatCard { key: "{label}", number, label, tone }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileField(label: &'static str, value: &'static str) -> Element {
    rsx! {
        div { class: "bg-gray-50 p-3 rounded-lg flex flex-col",
            span { class: "text-xs font-medium text-gray-500", "{label}" }
            span { class: "font-medium text-gray-800", "{value}" }
        }
    }
}

#[component]
fn StatCard(number: &'static str, label: &'static str, tone: &'static str) -> Element {
    rsx! {
        div { class: "p-4 rounded-lg flex flex-col items-start {tone}",
            span { class: "text-3xl font-bold", "{number}" }
            span { class: "text-sm font-medium", "{label}" }
        }
    }
}
