use dioxus::prelude::*;

use crate::site::{Category, PortfolioItem, ALL_CATEGORIES};

/// The active portfolio filter. Matching is exact; `all` shows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_key(key: &str) -> Self {
        if key == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(key) => key,
        }
    }

    pub fn shows(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => key == category,
        }
    }
}

#[component]
pub fn PortfolioGrid(categories: Vec<Category>, items: Vec<PortfolioItem>) -> Element {
    let mut active = use_signal(CategoryFilter::default);
    let filter = active();

    rsx! {
        section { id: "portfolio", class: "section portfolio",
            h2 { class: "section-title", "Portfolio" }
            div { class: "portfolio-filters",
                for category in categories {
                    FilterButton {
                        key: "{category.key}",
                        label: category.label.clone(),
                        filter_key: category.key.clone(),
                        active: filter.key() == category.key,
                        onclick: move |key: String| active.set(CategoryFilter::from_key(&key)),
                    }
                }
            }
            div { class: "portfolio-grid",
                for (index, item) in items.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "portfolio-item",
                        "data-category": "{item.category}",
                        display: display_for(&filter, &item.category),
                        h3 { "{item.title}" }
                        if !item.description.is_empty() {
                            p { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}

fn display_for(filter: &CategoryFilter, category: &str) -> &'static str {
    if filter.shows(category) {
        "block"
    } else {
        "none"
    }
}

#[component]
fn FilterButton(label: String, filter_key: String, active: bool, onclick: EventHandler<String>) -> Element {
    let class = if active { "filter-btn active" } else { "filter-btn" };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "data-filter": "{filter_key}",
            onclick: move |_| onclick.call(filter_key.clone()),
            "{label}"
        }
    }
}
