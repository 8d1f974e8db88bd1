use chrono::{DateTime, Utc};

use crate::post::{Category, Post, PostDraft, Sentiment};
use crate::user::User;

/// The in-memory post collection, newest first.
///
/// Owned by the application root; screens read through the query methods
/// and mutate only through [`Feed::create`], keeping a single writer.
#[derive(Clone, Debug, Default)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        Feed { posts }
    }

    /// The startup collection, pre-populated from the static fixtures in
    /// their literal order.
    pub fn seeded() -> Self {
        Feed::new(crate::seed::seed_posts())
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Create a post from a draft and prepend it: the new post becomes the
    /// head and everything else keeps its relative order.
    pub fn create(&mut self, author: &User, draft: PostDraft) -> Post {
        let id = uuid::Uuid::new_v4().to_string();
        self.create_at(author, draft, id, Utc::now())
    }

    /// Deterministic inner half of [`Feed::create`]: id and timestamp are
    /// supplied by the caller.
    pub fn create_at(
        &mut self,
        author: &User,
        draft: PostDraft,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Post {
        let post = Post::from_draft(draft, author, id, created_at);
        self.posts.insert(0, post.clone());
        post
    }

    /// Posts in the given category, order preserved. `None` means "All"
    /// and returns the whole collection.
    pub fn by_category(&self, category: Option<Category>) -> Vec<Post> {
        match category {
            None => self.posts.clone(),
            Some(cat) => self
                .posts
                .iter()
                .filter(|p| p.category == cat)
                .cloned()
                .collect(),
        }
    }

    /// Case-insensitive substring search over service name, location and
    /// category label. Search is opt-in: a blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Post> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.posts
            .iter()
            .filter(|p| {
                p.service_name.to_lowercase().contains(&query)
                    || p.location.to_lowercase().contains(&query)
                    || p.category.label().to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Posts authored by the given user, order preserved.
    pub fn by_author(&self, user_id: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect()
    }
}

/// Aggregate consensus over a set of matching posts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReviewStats {
    /// Share of Good-sentiment posts, rounded to a whole percent.
    pub good_percent: u32,
    /// Mean rating, rounded to one decimal.
    pub avg_rating: f64,
    pub total: usize,
}

impl ReviewStats {
    /// `None` when there are no matches, so there is never a division by
    /// zero and the UI can skip the consensus card entirely.
    pub fn for_posts(posts: &[Post]) -> Option<ReviewStats> {
        if posts.is_empty() {
            return None;
        }
        let total = posts.len();
        let good = posts.iter().filter(|p| p.sentiment == Sentiment::Good).count();
        let rating_sum: u32 = posts.iter().map(|p| u32::from(p.rating)).sum();
        let avg = rating_sum as f64 / total as f64;
        Some(ReviewStats {
            good_percent: ((good as f64 / total as f64) * 100.0).round() as u32,
            avg_rating: (avg * 10.0).round() / 10.0,
            total,
        })
    }

    /// Rating formatted the way the consensus card shows it, e.g. `"3.0"`.
    pub fn avg_rating_display(&self) -> String {
        format!("{:.1}", self.avg_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, category: Category, rating: u8, sentiment: Sentiment) -> Post {
        Post {
            id: id.into(),
            user_id: "u1".into(),
            user_name: "Tester".into(),
            user_photo: "photo".into(),
            category,
            service_name: format!("Service {id}"),
            rating,
            sentiment,
            description: "desc".into(),
            images: vec![],
            location: "Bali, Indonesia".into(),
            helpful_count: 0,
            created_at: Utc::now(),
            comments: vec![],
        }
    }

    fn sample_feed() -> Feed {
        Feed::new(vec![
            post("1", Category::Hotel, 5, Sentiment::Good),
            post("2", Category::Train, 2, Sentiment::Bad),
            post("3", Category::Hotel, 4, Sentiment::Good),
        ])
    }

    #[test]
    fn test_all_filter_is_identity() {
        let feed = sample_feed();
        assert_eq!(feed.by_category(None), feed.posts().to_vec());
    }

    #[test]
    fn test_category_filter_keeps_order() {
        let feed = sample_feed();
        let hotels = feed.by_category(Some(Category::Hotel));
        let ids: Vec<_> = hotels.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
        assert!(hotels.iter().all(|p| p.category == Category::Hotel));
        assert!(feed.by_category(Some(Category::Taxi)).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let feed = sample_feed();
        assert_eq!(feed.search("SERVICE 2").len(), 1);
        assert_eq!(feed.search("bali").len(), 3);
        assert_eq!(feed.search("hoTel").len(), 2);
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let feed = sample_feed();
        assert!(feed.search("").is_empty());
        assert!(feed.search("   ").is_empty());
    }

    #[test]
    fn test_search_misses() {
        assert!(sample_feed().search("submarine").is_empty());
    }

    #[test]
    fn test_create_prepends() {
        let mut feed = sample_feed();
        let before = feed.posts().to_vec();
        let author = User::demo();
        let draft = PostDraft {
            category: Category::Flight,
            service_name: "SkyHigh".into(),
            location: "Singapore".into(),
            rating: 5,
            sentiment: Sentiment::Good,
            description: "Smooth".into(),
            images: vec![],
        };
        let created = feed.create(&author, draft);
        assert_eq!(feed.posts()[0].id, created.id);
        assert_eq!(&feed.posts()[1..], &before[..]);
        assert_eq!(created.helpful_count, 0);
        assert!(created.comments.is_empty());
    }

    #[test]
    fn test_create_ids_are_unique() {
        let mut feed = Feed::default();
        let author = User::demo();
        let a = feed.create(&author, PostDraft::default());
        let b = feed.create(&author, PostDraft::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_get_by_id() {
        let feed = sample_feed();
        assert_eq!(feed.get("2").map(|p| p.category), Some(Category::Train));
        assert!(feed.get("nope").is_none());
    }

    #[test]
    fn test_by_author() {
        let mut feed = sample_feed();
        let author = User::demo();
        feed.create(&author, PostDraft::default());
        let mine = feed.by_author(&author.id);
        assert_eq!(mine.len(), 1);
        assert_eq!(feed.by_author("u1").len(), 3);
        assert!(feed.by_author("stranger").is_empty());
    }

    #[test]
    fn test_stats_empty_is_none() {
        assert_eq!(ReviewStats::for_posts(&[]), None);
    }

    #[test]
    fn test_stats_values() {
        let posts = vec![
            post("a", Category::Hotel, 5, Sentiment::Good),
            post("b", Category::Hotel, 1, Sentiment::Bad),
        ];
        let stats = ReviewStats::for_posts(&posts).unwrap();
        assert_eq!(stats.good_percent, 50);
        assert_eq!(stats.avg_rating_display(), "3.0");
        assert_eq!(stats.total, 2);
    }

    #[test]
    fn test_stats_rounding() {
        let posts = vec![
            post("a", Category::Tour, 4, Sentiment::Good),
            post("b", Category::Tour, 4, Sentiment::Good),
            post("c", Category::Tour, 5, Sentiment::Bad),
        ];
        let stats = ReviewStats::for_posts(&posts).unwrap();
        // 2/3 good = 66.67% -> 67; mean 13/3 = 4.333 -> 4.3
        assert_eq!(stats.good_percent, 67);
        assert_eq!(stats.avg_rating_display(), "4.3");
    }
}
