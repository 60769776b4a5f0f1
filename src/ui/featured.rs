//! Featured quote spotlight

use dioxus::prelude::*;

use crate::app::AppState;
use crate::types::Quote;

/// Spotlight panel for the featured quote, with a refresh control
///
/// Refreshing replaces only this panel; the grid and the filter bar are
/// untouched.
#[component]
pub fn FeaturedQuote(quote: Quote) -> Element {
    let state = use_context::<AppState>();

    let handle_refresh = move |_| {
        let state = state.clone();
        spawn(async move {
            state.refresh_featured().await;
        });
    };

    rsx! {
        section { class: "featured",
            div { class: "featured-watermark", "“" }
            p { class: "featured-label", "Quote of the Moment" }
            blockquote { class: "featured-text", "“{quote.text}”" }
            div { class: "featured-row",
                p { class: "featured-author", "— {quote.author}" }
                button { class: "featured-refresh", onclick: handle_refresh, "New quote" }
            }
        }
    }
}
