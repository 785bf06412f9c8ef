use dioxus::prelude::*;

use crate::site::{ControlLabels, Track};

#[cfg(target_arch = "wasm32")]
use std::cell::Cell;

const BUNDLED_SAMPLES: &[(&str, Asset)] = &[
    ("night-harbor.wav", asset!("/assets/audio/night-harbor.wav")),
    ("last-light.wav", asset!("/assets/audio/last-light.wav")),
    ("pulse-runner.wav", asset!("/assets/audio/pulse-runner.wav")),
];

fn bundled_sample(src: &str) -> Option<Asset> {
    BUNDLED_SAMPLES
        .iter()
        .find(|(name, _)| *name == src)
        .map(|(_, asset)| *asset)
}

/// Resolved `src` for the `<audio>` element. Unknown names pass through untouched.
fn track_src(src: &str) -> String {
    match bundled_sample(src) {
        Some(asset) => asset.to_string(),
        None => src.to_string(),
    }
}

/// DOM id of the play button for a track.
pub fn control_id_for(track_id: &str) -> String {
    format!("play-{track_id}")
}

#[component]
pub fn Samples(tracks: Vec<Track>, labels: ControlLabels) -> Element {
    rsx! {
        section { id: "samples", class: "section samples",
            h2 { class: "section-title", "Samples" }
            div { class: "samples-grid",
                for track in tracks {
                    TrackCard { key: "{track.id}", track: track.clone(), listen: labels.listen.clone() }
                }
            }
        }
    }
}

/// Static card: the audio player rewrites the button text, so this must not re-render.
#[component]
fn TrackCard(track: Track, listen: String) -> Element {
    let control_id = control_id_for(&track.id);
    let src = track_src(&track.src);

    rsx! {
        article { class: "project-card",
            h3 { class: "project-title", "{track.title}" }
            if !track.description.is_empty() {
                p { class: "project-description", "{track.description}" }
            }
            audio { id: "{track.id}", src: "{src}", preload: "metadata" }
            button {
                id: "{control_id}",
                class: "play-button",
                r#type: "button",
                "data-audio": "{track.id}",
                "{listen}"
            }
        }
    }
}

/// Binds the audio player to the rendered play buttons once the page is mounted.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController(labels: ControlLabels) -> Element {
    let _ = labels;
    rsx! {}
}

/// Binds the audio player to the rendered play buttons once the page is mounted.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController(labels: ControlLabels) -> Element {
    thread_local! {
        static MOUNTED: Cell<bool> = Cell::new(false);
    }

    use_effect(move || {
        if MOUNTED.with(|mounted| mounted.replace(true)) {
            return;
        }
        // Listeners hold the player for the rest of the page's life.
        if crate::audio::mount_audio_player(labels.clone()).is_none() {
            tracing::error!("no document available; sample playback disabled");
        }
    });

    rsx! {}
}
