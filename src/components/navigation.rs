use dioxus::prelude::*;

use crate::site::NavLink;

#[cfg(target_arch = "wasm32")]
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// The element id an in-page link points at, if it is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scroll the target of `href` to the top of the viewport. Missing targets are ignored.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_anchor(href: &str) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_anchor(_href: &str) {}

#[component]
pub fn NavBar(title: String, links: Vec<NavLink>) -> Element {
    rsx! {
        nav { class: "navbar",
            AnchorLink { class: "logo", href: "#top", label: title }
            ul { class: "nav-links",
                for link in links {
                    li { key: "{link.href}",
                        if anchor_target(&link.href).is_some() {
                            AnchorLink { class: "nav-link", href: link.href.clone(), label: link.label.clone() }
                        } else {
                            a { class: "nav-link", href: "{link.href}", "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// In-page link that scrolls instead of jumping.
#[component]
pub fn AnchorLink(href: String, label: String, #[props(default)] class: String) -> Element {
    let target = href.clone();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                scroll_to_anchor(&target);
            },
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_ids() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#contact-form"), Some("contact-form"));
    }

    #[test]
    fn bare_hash_and_external_links_have_no_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
        assert_eq!(anchor_target(""), None);
    }
}
