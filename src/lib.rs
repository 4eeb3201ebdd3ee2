//! LearnHub Shell
//!
//! Navigational shell for the LearnHub learning platform, built with Dioxus.
//!
//! This library provides:
//! - The route table (landing, about, dashboard panes, home redirect)
//! - The dashboard frame (sidebar, header, breadcrumbs)
//! - Renderer-independent navigation logic used by the frame
//! - Launcher configuration for server builds

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Configuration (shell display settings; launcher config on server builds)
pub mod config;

// Breadcrumbs, nav entries and sidebar state (no rendering)
pub mod navigation;
