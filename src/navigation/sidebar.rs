//! Responsive sidebar state.
//!
//! Two independent flags: `open` drives the overlay on narrow viewports,
//! `minimized` drives the collapsed width on wide ones. Any combination is
//! reachable; the dashboard frame owns one instance for its mounted lifetime.

/// Viewports narrower than this (in CSS pixels) close the sidebar after a
/// navigation link is used. Matches Tailwind's `md` breakpoint.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    pub minimized: bool,
}

impl SidebarState {
    /// Hamburger button.
    pub fn show(&mut self) {
        tracing::debug!("Sidebar opened");
        self.open = true;
    }

    /// Backdrop click or close button.
    pub fn dismiss(&mut self) {
        tracing::debug!("Sidebar dismissed");
        self.open = false;
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
        tracing::debug!(minimized = self.minimized, "Sidebar width toggled");
    }

    /// A sidebar link was activated. Closes the overlay only on narrow
    /// viewports; an unknown width (no browser window) leaves it alone.
    pub fn link_activated(&mut self, viewport_width: Option<f64>, breakpoint: f64) {
        if matches!(viewport_width, Some(width) if width < breakpoint) {
            self.dismiss();
        }
    }

    /// Backdrop behind the sidebar on narrow viewports.
    pub fn shows_overlay(&self) -> bool {
        self.open
    }

    /// Brand title, separator, link labels and footer are hidden while
    /// minimized.
    pub fn shows_labels(&self) -> bool {
        !self.minimized
    }

    pub fn width_class(&self) -> &'static str {
        if self.minimized {
            "w-16"
        } else {
            "w-64"
        }
    }

    pub fn aside_class(&self) -> String {
        let slide = if self.open {
            "translate-x-0 shadow-lg"
        } else {
            "-translate-x-full"
        };
        format!(
            "fixed md:relative top-0 left-0 h-screen border-r border-gray-200/60 bg-white transform transition-all duration-300 z-50 {} {} md:translate-x-0 md:shadow-none",
            self.width_class(),
            slide
        )
    }

    /// Brand row: title and controls spread out, or controls centred.
    pub fn brand_row_class(&self) -> &'static str {
        if self.minimized {
            "flex justify-center px-5 pt-5 pb-4"
        } else {
            "flex justify-between items-center px-5 pt-5 pb-4"
        }
    }

    pub fn minimize_label(&self) -> &'static str {
        if self.minimized {
            "Expand sidebar"
        } else {
            "Minimize sidebar"
        }
    }

    pub fn chevron_class(&self) -> &'static str {
        if self.minimized {
            "h-4 w-4 text-gray-600 rotate-180"
        } else {
            "h-4 w-4 text-gray-600"
        }
    }
}
