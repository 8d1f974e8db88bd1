use dioxus::prelude::*;

use tourestea_common::post::{Post, Sentiment};

use super::app::Route;

/// Feed card for a single review; tapping it opens the detail screen.
#[component]
pub fn ReviewCard(post: Post) -> Element {
    let nav = use_navigator();
    let id = post.id.clone();

    let sentiment_class = match post.sentiment {
        Sentiment::Good => "sentiment-good",
        Sentiment::Bad => "sentiment-bad",
    };
    let star_row = stars(post.rating);
    let comment_count = post.comments.len();
    let extra_photos = post.images.len().saturating_sub(1);

    rsx! {
        div { class: "review-card",
            onclick: move |_| { nav.push(Route::Detail { id: id.clone() }); },
            div { class: "card-header",
                img { class: "avatar", src: "{post.user_photo}", alt: "{post.user_name}" }
                div { class: "card-author",
                    h4 { "{post.user_name}" }
                    p { class: "card-location", "{post.location}" }
                }
                span { class: "sentiment-badge {sentiment_class}", "{post.sentiment}" }
            }
            h3 { "{post.service_name}" }
            p { class: "card-rating", "{star_row} ({post.category})" }
            p { class: "card-excerpt", "{post.description}" }
            if let Some(first) = post.images.first() {
                div { class: "card-photo",
                    img { src: "{first}", alt: "Travel photo" }
                    if extra_photos > 0 {
                        span { class: "photo-count", "+{extra_photos} photos" }
                    }
                }
            }
            div { class: "card-footer",
                span { "{post.helpful_count} Helpful" }
                span { "{comment_count} Comments" }
            }
        }
    }
}

/// Five-star strip, e.g. 4 -> "★★★★☆".
pub(crate) fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(9), "★★★★★");
    }
}
