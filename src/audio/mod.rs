//! Sample playback - keeps at most one track playing across every play button on the page.
//! The controller itself is platform independent; the browser backend lives in `dom`.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod controller;
#[cfg(target_arch = "wasm32")]
mod dom;
mod error;

pub use controller::*;
#[cfg(target_arch = "wasm32")]
pub use dom::*;
pub use error::PlayerError;
