use dioxus::prelude::*;

use super::feed::use_feed;
use super::review_card::ReviewCard;
use super::session::use_session;

/// The current user's profile: their posts, contribution stats and the
/// logout control.
#[component]
pub fn ProfileView() -> Element {
    let mut session = use_session();
    let feed = use_feed();

    // The layout gate guarantees a session here; render nothing while a
    // logout redirect is in flight.
    let Some(user) = session.read().current().cloned() else {
        return rsx! {};
    };

    let my_posts = feed.read().by_author(&user.id);
    let review_count = my_posts.len();
    let total_helpful: u32 = my_posts.iter().map(|p| p.helpful_count).sum();
    let country = user.country.clone().unwrap_or_else(|| "Worldwide".into());

    rsx! {
        div { class: "profile-view",
            div { class: "profile-header",
                img { class: "profile-photo", src: "{user.photo}", alt: "{user.name}" }
                button { class: "logout-btn",
                    onclick: move |_| { session.write().logout(); },
                    "Log out"
                }
            }

            h2 { "{user.name}" }
            p { class: "profile-origin", "Explorer from {country}" }

            div { class: "stats-grid",
                div { class: "stat-card",
                    span { class: "stat-value", "{review_count}" }
                    span { class: "stat-label", "Reviews" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{total_helpful}" }
                    span { class: "stat-label", "Helpful" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "🏅" }
                    span { class: "stat-label", "Verified" }
                }
            }

            div { class: "profile-posts",
                div { class: "profile-posts-header",
                    h3 { "My Experiences" }
                    span { class: "order-hint", "Recent first" }
                }
                if my_posts.is_empty() {
                    div { class: "empty-state",
                        span { class: "empty-icon", "✍️" }
                        p { "You haven't shared any experiences yet." }
                    }
                } else {
                    {my_posts.into_iter().map(|post| rsx! {
                        ReviewCard { key: "{post.id}", post }
                    })}
                }
            }
        }
    }
}
