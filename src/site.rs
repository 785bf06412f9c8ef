//! Site description: page copy, sample tracks, portfolio entries and effect tuning.
//! Embedded at compile time from `assets/site.json`; every field falls back to a default.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SITE_JSON: &str = include_str!("../assets/site.json");

/// Filter key that matches every portfolio item.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site description: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub nav: Vec<NavLink>,
    pub tracks: Vec<Track>,
    pub categories: Vec<Category>,
    pub portfolio: Vec<PortfolioItem>,
    pub labels: ControlLabels,
    pub parallax: ParallaxSettings,
    pub reveal: RevealSettings,
    pub contact: ContactSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Backstage".to_string(),
            tagline: String::new(),
            about: Vec::new(),
            nav: Vec::new(),
            tracks: Vec::new(),
            categories: vec![Category {
                key: ALL_CATEGORIES.to_string(),
                label: "All".to_string(),
            }],
            portfolio: Vec::new(),
            labels: ControlLabels::default(),
            parallax: ParallaxSettings::default(),
            reveal: RevealSettings::default(),
            contact: ContactSettings::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// A sample track. `id` doubles as the DOM id of its `<audio>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// File name of a sample bundled under `assets/audio`, or any URL the browser can fetch.
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Button text for each playback state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlLabels {
    pub listen: String,
    pub pause: String,
    pub resume: String,
    pub error: String,
}

impl Default for ControlLabels {
    fn default() -> Self {
        Self {
            listen: "▶ Listen".to_string(),
            pause: "⏸ Pause".to_string(),
            resume: "▶ Resume".to_string(),
            error: "❌ Error".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSettings {
    /// Maximum shift in pixels on each axis.
    pub amplitude_px: f64,
    pub scale: f64,
}

impl Default for ParallaxSettings {
    fn default() -> Self {
        Self {
            amplitude_px: 10.0,
            scale: 1.02,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    pub threshold: f64,
    pub offset_px: f64,
    pub duration_secs: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            offset_px: 30.0,
            duration_secs: 0.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub confirmation: String,
    pub dismiss_after_secs: u32,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            confirmation: "Thank you! Your request has been sent. I will get back to you soon."
                .to_string(),
            dismiss_after_secs: 5,
        }
    }
}

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(site) => site,
    Err(err) => {
        tracing::error!("{err}; falling back to the default site description");
        SiteConfig::default()
    }
});

/// The embedded site description, parsed once.
pub fn site() -> &'static SiteConfig {
    &SITE
}
