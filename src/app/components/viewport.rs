//! Viewport width, read on demand.

/// Current `window.innerWidth` in CSS pixels.
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// No browser window outside WASM.
#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}
