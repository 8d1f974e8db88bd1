use dioxus::prelude::*;

use tourestea_common::insight;
use tourestea_common::post::{Category, PostDraft, Sentiment};

use super::app::Route;
use super::feed::use_feed;
use super::gemini;
use super::session::use_session;
use super::sleep_ms;

/// Simulated network delay between submitting and the post landing in the
/// feed, as in the original flow.
const SUBMIT_DELAY_MS: u32 = 1000;

/// The create-post form: draft fields, AI auto-sentiment, and a delayed
/// submit that prepends the new post and returns home.
#[component]
pub fn CreatePostView() -> Element {
    let session = use_session();
    let mut feed = use_feed();
    let nav = use_navigator();

    let mut category = use_signal(|| Category::Hotel);
    let mut service_name = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut sentiment = use_signal(|| Sentiment::Good);
    let mut rating = use_signal(|| 5u8);
    let mut description = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut analyzing = use_signal(|| false);

    // Image upload stays a visual affordance only; drafts carry no photos.
    let draft = move || PostDraft {
        category: *category.read(),
        service_name: service_name.read().trim().to_string(),
        location: location.read().trim().to_string(),
        rating: *rating.read(),
        sentiment: *sentiment.read(),
        description: description.read().trim().to_string(),
        images: Vec::new(),
    };
    let can_submit = use_memo(move || draft().is_valid());
    let can_analyze = use_memo(move || insight::meets_min_len(&description.read()));

    let suggest = move |_| {
        let text = description.read().trim().to_string();
        if !insight::meets_min_len(&text) || *analyzing.read() {
            return;
        }
        analyzing.set(true);
        // Component-scoped task: navigating away drops it, so a late
        // verdict never touches a torn-down form.
        spawn(async move {
            let judgment = gemini::classify_sentiment(&text).await;
            tracing::debug!(
                "auto-sentiment: {} ({:.2})",
                judgment.sentiment,
                judgment.confidence
            );
            sentiment.set(judgment.sentiment);
            analyzing.set(false);
        });
    };

    let submit = move |_| {
        let d = draft();
        if !d.is_valid() || *submitting.read() {
            return;
        }
        submitting.set(true);
        spawn(async move {
            sleep_ms(SUBMIT_DELAY_MS).await;
            let author = session.read().current().cloned();
            if let Some(author) = author {
                feed.write().create(&author, d);
            }
            submitting.set(false);
            nav.push(Route::Home {});
        });
    };

    rsx! {
        div { class: "create-view",
            header { class: "screen-header",
                button { class: "back-btn", onclick: move |_| { nav.go_back(); }, "‹" }
                h2 { "Post Experience" }
            }

            div { class: "create-form",
                div { class: "form-group",
                    label { "Choose Category" }
                    div { class: "category-chips",
                        {Category::ALL.iter().map(|&cat| {
                            let chip_class = if *category.read() == cat {
                                "chip chip-active"
                            } else {
                                "chip"
                            };
                            rsx! {
                                button { class: chip_class,
                                    key: "{cat}",
                                    onclick: move |_| category.set(cat),
                                    "{cat}"
                                }
                            }
                        })}
                    }
                }

                div { class: "form-group",
                    input {
                        r#type: "text",
                        placeholder: "Service Name (e.g. Hilton London)",
                        value: "{service_name}",
                        oninput: move |evt| service_name.set(evt.value()),
                    }
                }
                div { class: "form-group",
                    input {
                        r#type: "text",
                        placeholder: "City, Country",
                        value: "{location}",
                        oninput: move |evt| location.set(evt.value()),
                    }
                }

                div { class: "form-row",
                    div { class: "form-group",
                        label { "Sentiment" }
                        div { class: "sentiment-toggle",
                            button {
                                class: if *sentiment.read() == Sentiment::Good { "toggle toggle-good" } else { "toggle" },
                                onclick: move |_| sentiment.set(Sentiment::Good),
                                "Good"
                            }
                            button {
                                class: if *sentiment.read() == Sentiment::Bad { "toggle toggle-bad" } else { "toggle" },
                                onclick: move |_| sentiment.set(Sentiment::Bad),
                                "Bad"
                            }
                        }
                    }
                    div { class: "form-group",
                        label { "Rating" }
                        div { class: "star-picker",
                            {(1u8..=5).map(|star| {
                                let star_class = if star <= *rating.read() { "star star-filled" } else { "star" };
                                rsx! {
                                    button { class: star_class,
                                        key: "{star}",
                                        onclick: move |_| rating.set(star),
                                        "★"
                                    }
                                }
                            })}
                        }
                    }
                }

                div { class: "form-group",
                    label { "Your Story" }
                    textarea {
                        placeholder: "What happened? Be honest, it helps others.",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    button { class: "ai-suggest-btn",
                        disabled: !can_analyze() || *analyzing.read(),
                        onclick: suggest,
                        if *analyzing.read() { "Analyzing..." } else { "AI Auto-Sentiment" }
                    }
                }

                button { class: "submit-btn",
                    disabled: !can_submit() || *submitting.read(),
                    onclick: submit,
                    if *submitting.read() { "Posting..." } else { "Post Experience" }
                }
            }
        }
    }
}
