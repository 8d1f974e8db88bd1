use dioxus::prelude::*;

use tourestea_common::insight::{self, SUMMARY_EMPTY};
use tourestea_common::post::Sentiment;

use super::app::Route;
use super::feed::use_feed;
use super::gemini;
use super::review_card::stars;

/// Full view of one post: photos, AI insight summary, the review text and
/// its (display-only) comments.
#[component]
pub fn PostDetailView(id: String) -> Element {
    let feed = use_feed();
    let nav = use_navigator();

    let post = feed.read().get(&id).cloned();
    let Some(post) = post else {
        // Unknown id: nothing to show, fall back to the feed.
        nav.replace(Route::Home {});
        return rsx! {};
    };

    // One summary request per displayed post. `use_resource` ties the task
    // to this component, so navigating away discards an in-flight result
    // instead of updating a torn-down view.
    let description = post.description.clone();
    let summary = use_resource(move || {
        let text = description.clone();
        async move {
            if insight::meets_min_len(&text) {
                gemini::summarize(&text).await
            } else {
                SUMMARY_EMPTY.to_string()
            }
        }
    });
    let summary_text: Option<String> = summary.read().clone();

    let sentiment_class = match post.sentiment {
        Sentiment::Good => "sentiment-good",
        Sentiment::Bad => "sentiment-bad",
    };
    let star_row = stars(post.rating);
    let posted_on = post.created_at.format("%b %e, %Y").to_string();
    let comment_count = post.comments.len();

    rsx! {
        div { class: "detail-view",
            header { class: "screen-header",
                button { class: "back-btn", onclick: move |_| { nav.go_back(); }, "‹" }
                span { "Post Detail" }
            }

            if !post.images.is_empty() {
                div { class: "photo-strip",
                    {post.images.iter().map(|img| rsx! {
                        img { key: "{img}", src: "{img}", alt: "Travel detail" }
                    })}
                }
            }

            div { class: "detail-body",
                span { class: "sentiment-badge {sentiment_class}", "{post.sentiment} Experience" }
                h1 { "{post.service_name}" }
                p { class: "detail-location", "{post.location}" }
                div { class: "rating-box",
                    span { class: "rating-value", "{post.rating}" }
                    span { class: "rating-stars", "{star_row}" }
                }

                div { class: "author-box",
                    img { class: "avatar", src: "{post.user_photo}", alt: "{post.user_name}" }
                    div {
                        h4 { "{post.user_name}" }
                        p { "Contributor • {posted_on}" }
                    }
                }

                div { class: "insight-card",
                    h4 { "AI Insight Summary" }
                    match summary_text {
                        Some(text) => rsx! { p { class: "insight-text", "\"{text}\"" } },
                        None => rsx! { p { class: "insight-loading", "Gemini is analyzing..." } },
                    }
                }

                div { class: "detail-description",
                    h4 { "Detailed Experience" }
                    p { "{post.description}" }
                }

                div { class: "interaction-bar",
                    button { class: "helpful-btn", "Helpful ({post.helpful_count})" }
                    button { class: "flag-btn", "Report" }
                }

                div { class: "comments-section",
                    h4 { "Comments ({comment_count})" }
                    if post.comments.is_empty() {
                        p { class: "empty-state", "No comments yet. Be the first!" }
                    } else {
                        {post.comments.iter().map(|comment| rsx! {
                            div { class: "comment",
                                key: "{comment.id}",
                                img { class: "avatar", src: "{comment.user_photo}", alt: "{comment.user_name}" }
                                div { class: "comment-body",
                                    span { "{comment.user_name}" }
                                    p { "{comment.text}" }
                                }
                            }
                        })}
                    }
                }
            }

            div { class: "comment-input",
                input { r#type: "text", placeholder: "Add a comment..." }
                button { class: "comment-send", "Send" }
            }
        }
    }
}
