use dioxus::prelude::*;

use crate::components::{
    viewport_size, AnchorLink, AudioController, Background, ContactForm, NavBar, ParallaxOffset,
    ParallaxSignal, PortfolioGrid, RevealController, Samples,
};
use crate::site::site;

#[component]
pub fn PortfolioPage() -> Element {
    let site = site();
    let mut parallax = use_signal(ParallaxOffset::default);
    use_context_provider(|| ParallaxSignal(parallax));

    let amplitude = site.parallax.amplitude_px;
    let on_mouse_move = move |evt: MouseEvent| {
        let Some(viewport) = viewport_size() else {
            return;
        };
        let pointer = evt.client_coordinates();
        parallax.set(ParallaxOffset::from_pointer(
            (pointer.x, pointer.y),
            viewport,
            amplitude,
        ));
    };

    rsx! {
        div { id: "top", class: "page", onmousemove: on_mouse_move,
            Background { settings: site.parallax.clone() }
            NavBar { title: site.title.clone(), links: site.nav.clone() }

            header { class: "hero",
                h1 { class: "hero-title", "{site.title}" }
                if !site.tagline.is_empty() {
                    p { class: "hero-tagline", "{site.tagline}" }
                }
                AnchorLink { class: "cta-button", href: "#samples", label: "Listen to samples" }
            }

            section { id: "about", class: "section about",
                h2 { class: "section-title", "About" }
                div { class: "about-text",
                    for (index, paragraph) in site.about.iter().enumerate() {
                        p { key: "{index}", "{paragraph}" }
                    }
                }
            }

            Samples { tracks: site.tracks.clone(), labels: site.labels.clone() }
            PortfolioGrid { categories: site.categories.clone(), items: site.portfolio.clone() }
            ContactForm { settings: site.contact.clone() }

            footer { class: "footer", p { "© {site.title}" } }

            AudioController { labels: site.labels.clone() }
            RevealController { settings: site.reveal.clone() }
        }
    }
}
