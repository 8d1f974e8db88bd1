use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::user::User;

/// Type of travel service a review is about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Hotel,
    Train,
    Flight,
    Taxi,
    Tour,
    Restaurant,
    Other,
}

impl Category {
    /// All categories, in the order the UI presents them.
    pub const ALL: [Category; 7] = [
        Category::Hotel,
        Category::Train,
        Category::Flight,
        Category::Taxi,
        Category::Tour,
        Category::Restaurant,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Hotel => "Hotel",
            Category::Train => "Train",
            Category::Flight => "Flight",
            Category::Taxi => "Taxi",
            Category::Tour => "Tour",
            Category::Restaurant => "Restaurant",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Binary verdict on a review, either user-chosen or AI-suggested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[default]
    Good,
    Bad,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Good => "Good",
            Sentiment::Bad => "Bad",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A comment left under a post. Append-only; no edit or delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_photo: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A single travel-service review.
///
/// Author fields are denormalized from the posting user so cards render
/// without a user lookup. `created_at` is set once at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_photo: String,
    pub category: Category,
    pub service_name: String,
    pub rating: u8,
    pub sentiment: Sentiment,
    pub description: String,
    pub images: Vec<String>,
    pub location: String,
    pub helpful_count: u32,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Build a post from a submitted draft. Rating is clamped to 1..=5;
    /// helpful count starts at zero and comments start empty.
    pub fn from_draft(draft: PostDraft, author: &User, id: String, created_at: DateTime<Utc>) -> Self {
        Post {
            id,
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_photo: author.photo.clone(),
            category: draft.category,
            service_name: draft.service_name,
            rating: draft.rating.clamp(1, 5),
            sentiment: draft.sentiment,
            description: draft.description,
            images: draft.images,
            location: draft.location,
            helpful_count: 0,
            created_at,
            comments: Vec::new(),
        }
    }
}

/// Caller-supplied fields for a new post, before id/timestamp/author are
/// attached.
#[derive(Clone, Debug, Default)]
pub struct PostDraft {
    pub category: Category,
    pub service_name: String,
    pub location: String,
    pub rating: u8,
    pub sentiment: Sentiment,
    pub description: String,
    pub images: Vec<String>,
}

impl PostDraft {
    /// A draft can be submitted once service name, location and description
    /// are all non-blank. Unmet, submission is blocked locally; there is no
    /// system-level error.
    pub fn is_valid(&self) -> bool {
        !self.service_name.trim().is_empty()
            && !self.location.trim().is_empty()
            && !self.description.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    fn draft() -> PostDraft {
        PostDraft {
            category: Category::Hotel,
            service_name: "Hilton London".into(),
            location: "London, UK".into(),
            rating: 4,
            sentiment: Sentiment::Good,
            description: "Great stay overall.".into(),
            images: vec![],
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(draft().is_valid());

        let mut d = draft();
        d.service_name = "   ".into();
        assert!(!d.is_valid());

        let mut d = draft();
        d.location = String::new();
        assert!(!d.is_valid());

        let mut d = draft();
        d.description = "\n\t".into();
        assert!(!d.is_valid());
    }

    #[test]
    fn test_from_draft_initial_state() {
        let author = User::demo();
        let post = Post::from_draft(draft(), &author, "p1".into(), Utc::now());
        assert_eq!(post.id, "p1");
        assert_eq!(post.user_id, author.id);
        assert_eq!(post.user_name, author.name);
        assert_eq!(post.helpful_count, 0);
        assert!(post.comments.is_empty());
        assert_eq!(post.rating, 4);
    }

    #[test]
    fn test_from_draft_clamps_rating() {
        let author = User::demo();
        let mut d = draft();
        d.rating = 0;
        assert_eq!(Post::from_draft(d, &author, "a".into(), Utc::now()).rating, 1);
        let mut d = draft();
        d.rating = 9;
        assert_eq!(Post::from_draft(d, &author, "b".into(), Utc::now()).rating, 5);
    }

    #[test]
    fn test_category_labels_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_sentiment_serde_round_trip() {
        let json = serde_json::to_string(&Sentiment::Good).unwrap();
        assert_eq!(json, "\"Good\"");
        let back: Sentiment = serde_json::from_str("\"Bad\"").unwrap();
        assert_eq!(back, Sentiment::Bad);
    }
}
