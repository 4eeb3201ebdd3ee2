//! Dioxus application entry point.
//!
//! This module provides the root App component and the route table. Pages
//! under `/dashboard` share the [`DashboardFrame`] layout; every other known
//! path renders a standalone page, and anything else redirects to `/home`.

use dioxus::prelude::*;

pub mod components;
pub mod pages;

use crate::config::ShellSettings;
use components::DashboardFrame;
use pages::{About, DashboardIndex, Home, ManageContent, MyLearning, NotFound, Profile};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_context_provider(ShellSettings::default);

    rsx! {
        document::Title { "LearnHub" }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}

/// Display settings provided at the app root.
pub fn use_shell_settings() -> ShellSettings {
    try_use_context::<ShellSettings>().unwrap_or_default()
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Full page routes (no dashboard frame)
    #[redirect("/", || Route::Home {})]
    #[route("/home")]
    Home {},
    #[route("/about")]
    About {},

    // Dashboard frame with nested panes
    #[nest("/dashboard")]
        #[layout(DashboardFrame)]
            #[route("/")]
            DashboardIndex {},
            #[route("/profile")]
            Profile {},
            #[route("/my-learning")]
            MyLearning {},
            #[route("/manage-content")]
            ManageContent {},
        #[end_layout]
    #[end_nest]

    // Everything else redirects home
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Where unmatched paths end up.
    pub fn fallback() -> Self {
        Route::Home {}
    }

    /// The route a path finally renders, with the fallback redirect applied.
    pub fn resolve(path: &str) -> Self {
        match path.parse::<Route>() {
            Ok(Route::NotFound { .. }) | Err(_) => Self::fallback(),
            Ok(route) => route,
        }
    }

    /// True for routes rendered inside the dashboard frame.
    pub fn in_dashboard(&self) -> bool {
        matches!(
            self,
            Route::DashboardIndex {}
                | Route::Profile {}
                | Route::MyLearning {}
                | Route::ManageContent {}
        )
    }
}
