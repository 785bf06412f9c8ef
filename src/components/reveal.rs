use dioxus::prelude::*;

use crate::site::RevealSettings;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Elements that fade and slide in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".project-card, .about-text, .portfolio-item";

/// Inline style applied before an element has been seen.
pub fn hidden_style(settings: &RevealSettings) -> [(&'static str, String); 3] {
    let secs = settings.duration_secs;
    [
        ("opacity", "0".to_string()),
        ("transform", format!("translateY({}px)", settings.offset_px)),
        (
            "transition",
            format!("opacity {secs}s ease, transform {secs}s ease"),
        ),
    ]
}

/// Resting style once revealed. Elements never go back to hidden.
pub fn revealed_style() -> [(&'static str, String); 2] {
    [
        ("opacity", "1".to_string()),
        ("transform", "translateY(0)".to_string()),
    ]
}

#[cfg(target_arch = "wasm32")]
fn apply_style(element: &HtmlElement, properties: &[(&'static str, String)]) {
    let style = element.style();
    for (name, value) in properties {
        let _ = style.set_property(name, value);
    }
}

#[cfg(target_arch = "wasm32")]
fn observe_reveal_targets(settings: &RevealSettings) -> Result<(), JsValue> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Ok(());
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    apply_style(element, &revealed_style());
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let hidden = hidden_style(settings);
    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        apply_style(&element, &hidden);
        observer.observe(&element);
    }
    Ok(())
}

/// Hooks the reveal animation onto the rendered page.
#[component]
pub fn RevealController(settings: RevealSettings) -> Element {
    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if let Err(err) = observe_reveal_targets(&settings) {
            tracing::warn!("reveal animations disabled: {err:?}");
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = settings;

    rsx! {}
}
