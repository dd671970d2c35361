//! In-process search over a fetched post listing.

use crate::domain::Post;

/// Keep the posts matching `term`, in their original order.
///
/// A post is kept at most once, however many of its fields match.
pub fn filter_by_term(posts: Vec<Post>, term: &str) -> Vec<Post> {
    if term.is_empty() {
        return posts;
    }
    posts.into_iter().filter(|post| post.matches(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostId;

    fn post(id: i32, title: &str, tags: &[&str]) -> Post {
        let now = chrono::Utc::now().naive_utc();
        Post {
            id: PostId::new(id).unwrap(),
            title: title.to_string(),
            content: String::from("body"),
            category: String::from("misc"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    fn ids(posts: &[Post]) -> Vec<i32> {
        posts.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn empty_term_returns_all() {
        let posts = vec![post(1, "a", &[]), post(2, "b", &[])];
        assert_eq!(ids(&filter_by_term(posts, "")), vec![1, 2]);
    }

    #[test]
    fn matches_title_or_tag() {
        let posts = vec![post(1, "Intro", &["go", "web"]), post(2, "Snakes", &["python"])];
        assert_eq!(ids(&filter_by_term(posts, "go")), vec![1]);
    }

    #[test]
    fn multiple_matching_tags_keep_one_copy() {
        let posts = vec![post(1, "x", &["golang", "go", "gopher"])];
        assert_eq!(ids(&filter_by_term(posts, "go")), vec![1]);
    }

    #[test]
    fn preserves_input_order() {
        let posts = vec![
            post(3, "rust three", &[]),
            post(1, "rust one", &[]),
            post(2, "other", &[]),
            post(5, "rust five", &[]),
        ];
        assert_eq!(ids(&filter_by_term(posts, "rust")), vec![3, 1, 5]);
    }

    #[test]
    fn no_match_yields_empty() {
        let posts = vec![post(1, "Golang Basics", &[])];
        assert!(filter_by_term(posts, "LANG").is_empty());
    }
}
