//! Quote grid
//!
//! Renders the fetched quotes as cards, or the empty state when the last
//! fetch returned nothing.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::types::Quote;

#[component]
pub fn QuoteGrid() -> Element {
    let state = use_context::<AppState>();
    let quotes = state.quotes.read().clone();

    if quotes.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { "No quotes found. Is the API running?" }
            }
        };
    }

    rsx! {
        section { class: "quote-grid",
            {quotes.into_iter().map(|quote| {
                let key = quote.id;
                rsx! {
                    QuoteCard { key: "{key}", quote }
                }
            })}
        }
    }
}

#[component]
fn QuoteCard(quote: Quote) -> Element {
    rsx! {
        article { class: "quote-card",
            div { class: "quote-card-mark", "“" }
            p { class: "quote-card-text", "{quote.text}" }
            div { class: "quote-card-row",
                p { class: "quote-card-author", "{quote.author}" }
                span { class: "quote-card-badge", "{quote.category}" }
            }
        }
    }
}
