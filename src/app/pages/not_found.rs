//! Fallback for unmatched paths.

use dioxus::prelude::*;

use crate::app::Route;

/// Replaces the current history entry with the fallback route.
///
/// Runs as an effect so it happens once the router is mounted on the
/// client; the server render of an unmatched path is empty.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = navigator();

    use_effect(move || {
        let path = format!("/{}", segments.join("/"));
        tracing::debug!(%path, "Unmatched path, redirecting");
        navigator.replace(Route::fallback());
    });

    rsx! {}
}
