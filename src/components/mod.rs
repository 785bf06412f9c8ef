//! Page sections and the browser effects wired into them.

mod app;
mod contact_form;
mod navigation;
mod parallax;
mod portfolio;
mod reveal;
mod samples;

pub use app::*;
pub use contact_form::*;
pub use navigation::*;
pub use parallax::*;
pub use portfolio::*;
pub use reveal::*;
pub use samples::*;
