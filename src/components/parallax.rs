use dioxus::prelude::*;

use crate::site::ParallaxSettings;

/// Background shift in pixels, derived from the live pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub x: f64,
    pub y: f64,
}

impl ParallaxOffset {
    /// Maps the pointer into `[-amplitude, amplitude]` on each axis, centred on the viewport.
    pub fn from_pointer(pointer: (f64, f64), viewport: (f64, f64), amplitude: f64) -> Self {
        Self {
            x: axis_offset(pointer.0, viewport.0, amplitude),
            y: axis_offset(pointer.1, viewport.1, amplitude),
        }
    }

    pub fn transform(&self, scale: f64) -> String {
        format!("translate({:.2}px, {:.2}px) scale({scale})", self.x, self.y)
    }
}

fn axis_offset(position: f64, extent: f64, amplitude: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    (position / extent) * amplitude * 2.0 - amplitude
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_size() -> Option<(f64, f64)> {
    let win = web_sys::window()?;
    Some((
        win.inner_width().ok()?.as_f64()?,
        win.inner_height().ok()?.as_f64()?,
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_size() -> Option<(f64, f64)> {
    None
}

#[derive(Clone, Copy)]
pub struct ParallaxSignal(pub Signal<ParallaxOffset>);

/// Decorative layer behind the page, shifted by the pointer.
#[component]
pub fn Background(settings: ParallaxSettings) -> Element {
    let offset = use_context::<ParallaxSignal>().0;
    let transform = offset().transform(settings.scale);

    rsx! {
        div { class: "background", transform: "{transform}" }
    }
}
