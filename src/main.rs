use dioxus::prelude::*;

mod audio;
mod components;
mod site;

use components::PortfolioPage;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialize logging: {err}");
    }
    tracing::info!("🎵 Welcome backstage! 🎵");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let site = site::site();

    rsx! {
        document::Title { "{site.title}" }
        document::Meta { name: "theme-color", content: "#8a2be2" }
        document::Meta { name: "description", content: "{site.tagline}" }
        document::Stylesheet { href: APP_CSS }

        PortfolioPage {}
    }
}
