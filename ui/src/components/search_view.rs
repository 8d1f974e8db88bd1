use dioxus::prelude::*;

use tourestea_common::feed::ReviewStats;

use super::feed::use_feed;
use super::review_card::ReviewCard;

const POPULAR_DESTINATIONS: [&str; 6] = [
    "Bali", "Tokyo", "London", "Paris", "New York", "Singapore",
];

const RECENT_SEARCHES: [&str; 3] = ["British Airways", "Marriott", "Shinkansen"];

/// Opt-in search over the feed with a consensus card for the matches.
/// A blank query shows suggestions instead of results.
#[component]
pub fn SearchView() -> Element {
    let feed = use_feed();
    let mut query = use_signal(String::new);

    let results = feed.read().search(&query.read());
    let stats = ReviewStats::for_posts(&results);
    let showing_results = !query.read().trim().is_empty();
    let current_query = query.read().clone();

    rsx! {
        div { class: "search-view",
            h2 { "Search" }
            div { class: "search-bar",
                input {
                    r#type: "text",
                    placeholder: "Search hotels, airlines, cities...",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                if showing_results {
                    button { class: "clear-btn",
                        onclick: move |_| query.set(String::new()),
                        "✕"
                    }
                }
            }

            if !showing_results {
                div { class: "search-suggestions",
                    div { class: "suggestion-group",
                        h3 { "Popular Destinations" }
                        div { class: "suggestion-chips",
                            {POPULAR_DESTINATIONS.iter().map(|&city| rsx! {
                                button { class: "chip",
                                    key: "{city}",
                                    onclick: move |_| query.set(city.to_string()),
                                    "{city}"
                                }
                            })}
                        }
                    }
                    div { class: "suggestion-group",
                        h3 { "Recent Searches" }
                        {RECENT_SEARCHES.iter().map(|&item| rsx! {
                            button { class: "recent-search",
                                key: "{item}",
                                onclick: move |_| query.set(item.to_string()),
                                "{item}"
                            }
                        })}
                    }
                }
            } else {
                div { class: "search-results",
                    if let Some(stats) = stats {
                        {
                            let avg = stats.avg_rating_display();
                            rsx! {
                                div { class: "consensus-card",
                                    p { class: "consensus-title", "Consensus for \"{current_query}\"" }
                                    div { class: "consensus-row",
                                        span { class: "consensus-percent", "{stats.good_percent}%" }
                                        span { "Positive Experience" }
                                    }
                                    div { class: "consensus-row",
                                        span { class: "consensus-rating", "★ {avg}" }
                                        span { "From {stats.total} reviews" }
                                    }
                                }
                            }
                        }
                    }
                    if results.is_empty() {
                        div { class: "empty-state",
                            span { class: "empty-icon", "🔍" }
                            p { "We couldn't find any reviews for that." }
                            button { class: "clear-link",
                                onclick: move |_| query.set(String::new()),
                                "Try a different search"
                            }
                        }
                    } else {
                        {results.into_iter().map(|post| rsx! {
                            ReviewCard { key: "{post.id}", post }
                        })}
                    }
                }
            }
        }
    }
}
