//! Static fixtures the feed is seeded from at startup.

use chrono::{Duration, Utc};

use crate::post::{Category, Post, Sentiment};

/// The seed collection, in literal order (conceptually newest first).
pub fn seed_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: "1".into(),
            user_id: "u1".into(),
            user_name: "Sarah Jenkins".into(),
            user_photo: "https://picsum.photos/seed/sarah/100/100".into(),
            category: Category::Hotel,
            service_name: "The Grand Palace Resort".into(),
            rating: 5,
            sentiment: Sentiment::Good,
            description: "Absolutely incredible stay! The staff went above and beyond \
                          for our anniversary. The ocean view from the suite was \
                          breathtaking. Highly recommend the breakfast buffet!"
                .into(),
            images: vec![
                "https://picsum.photos/seed/hotel1/800/400".into(),
                "https://picsum.photos/seed/hotel2/800/400".into(),
            ],
            location: "Bali, Indonesia".into(),
            helpful_count: 24,
            created_at: now - Duration::days(2),
            comments: vec![],
        },
        Post {
            id: "2".into(),
            user_id: "u2".into(),
            user_name: "Marco Rossi".into(),
            user_photo: "https://picsum.photos/seed/marco/100/100".into(),
            category: Category::Train,
            service_name: "Eurostar Brussels to London".into(),
            rating: 2,
            sentiment: Sentiment::Bad,
            description: "Train was delayed by 3 hours with very little communication. \
                          The air conditioning was broken in coach 7. Very cramped and \
                          unhappy journey."
                .into(),
            images: vec!["https://picsum.photos/seed/train1/800/400".into()],
            location: "Brussels, Belgium".into(),
            helpful_count: 15,
            created_at: now - Duration::days(5),
            comments: vec![],
        },
        Post {
            id: "3".into(),
            user_id: "u3".into(),
            user_name: "Liam Chen".into(),
            user_photo: "https://picsum.photos/seed/liam/100/100".into(),
            category: Category::Flight,
            service_name: "SkyHigh Airways SH402".into(),
            rating: 4,
            sentiment: Sentiment::Good,
            description: "Smooth flight, great legroom in economy. The food was \
                          surprisingly edible and the entertainment selection was vast."
                .into(),
            images: vec![],
            location: "Singapore Changi".into(),
            helpful_count: 8,
            created_at: now - Duration::hours(4),
            comments: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let posts = seed_posts();
        for (i, a) in posts.iter().enumerate() {
            for b in &posts[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_seed_is_well_formed() {
        let posts = seed_posts();
        assert_eq!(posts.len(), 3);
        for post in &posts {
            assert!((1..=5).contains(&post.rating));
            assert!(!post.service_name.is_empty());
            assert!(!post.location.is_empty());
            assert!(post.created_at <= Utc::now());
        }
    }
}
