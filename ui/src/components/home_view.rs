use dioxus::prelude::*;

use tourestea_common::post::Category;

use super::feed::use_feed;
use super::review_card::ReviewCard;

/// The explore feed: every post, newest first, with category chips.
#[component]
pub fn HomeView() -> Element {
    let feed = use_feed();
    let mut active_category = use_signal(|| None::<Category>);

    let posts = feed.read().by_category(*active_category.read());
    let all_class = if active_category.read().is_none() {
        "chip chip-active"
    } else {
        "chip"
    };

    rsx! {
        div { class: "home-view",
            header { class: "home-header",
                h2 { "Explore Feed" }
                p { "Discover honest travel insights" }
            }

            div { class: "category-chips",
                button { class: all_class,
                    onclick: move |_| active_category.set(None),
                    "All"
                }
                {Category::ALL.iter().map(|&cat| {
                    let chip_class = if *active_category.read() == Some(cat) {
                        "chip chip-active"
                    } else {
                        "chip"
                    };
                    rsx! {
                        button { class: chip_class,
                            key: "{cat}",
                            onclick: move |_| active_category.set(Some(cat)),
                            "{cat}s"
                        }
                    }
                })}
            }

            div { class: "feed-list",
                if posts.is_empty() {
                    div { class: "empty-state",
                        span { class: "empty-icon", "🏜️" }
                        p { "No experiences found for this category yet." }
                    }
                } else {
                    {posts.into_iter().map(|post| rsx! {
                        ReviewCard { key: "{post.id}", post }
                    })}
                }
            }
        }
    }
}
