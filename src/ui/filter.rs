//! Category filter bar

use dioxus::prelude::*;

use crate::app::AppState;

/// "All" pill plus one pill per category known to the API
#[component]
pub fn CategoryFilter() -> Element {
    let state = use_context::<AppState>();
    let active_category = state.active_category;
    let categories = state.categories.read().clone();
    let selected = active_category();

    let handle_clear = {
        let state = state.clone();
        move |_| {
            let state = state.clone();
            spawn(async move {
                state.clear_filter().await;
            });
        }
    };

    rsx! {
        section { class: "filter-bar",
            FilterPill {
                active: selected.is_none(),
                label: "All".to_string(),
                onclick: handle_clear,
            }

            {categories.into_iter().map(|category| {
                let is_active = selected.as_deref() == Some(category.as_str());
                let label = category.clone();
                let mut active_category = active_category;

                rsx! {
                    FilterPill {
                        key: "{label}",
                        active: is_active,
                        label: label.clone(),
                        onclick: move |_| active_category.set(Some(category.clone())),
                    }
                }
            })}
        }
    }
}

#[component]
fn FilterPill(active: bool, label: String, onclick: EventHandler<MouseEvent>) -> Element {
    let classes = if active {
        "filter-pill filter-pill-active"
    } else {
        "filter-pill"
    };

    rsx! {
        button { class: classes, onclick: move |evt| onclick.call(evt), "{label}" }
    }
}
