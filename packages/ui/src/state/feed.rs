//! Post collection store: the currently displayed archive page.

use api::{PostInfo, POSTS_PER_PAGE};

/// Loading status of the displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Idle,
    Loading,
    Resolved,
}

/// One page of posts plus the window that selected it.
///
/// Invariant: `items` always mirrors the gateway result for
/// `ORDER BY created_at DESC OFFSET page * 3 LIMIT 3`. All reducers are
/// synchronous and total; a miss (unknown id) is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFeed {
    pub items: Vec<PostInfo>,
    pub status: FeedStatus,
    pub page: usize,
}

impl Default for PostFeed {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: FeedStatus::Idle,
            page: 0,
        }
    }
}

impl PostFeed {
    /// Replace the displayed set wholesale with a freshly fetched page.
    pub fn replace_page(&mut self, posts: Vec<PostInfo>) {
        self.items = posts;
        self.status = FeedStatus::Resolved;
    }

    pub fn set_loading(&mut self) {
        self.status = FeedStatus::Loading;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Unshift a newly created post so it shows immediately, before any
    /// re-fetch.
    pub fn insert_at_front(&mut self, post: PostInfo) {
        self.items.insert(0, post);
    }

    /// Remove exactly the entry with this id; absent ids are a no-op.
    pub fn remove_by_id(&mut self, id: i64) {
        self.items.retain(|p| p.id != id);
    }

    /// Replace the entry with the same id; unknown ids are a no-op.
    pub fn replace_by_id(&mut self, post: PostInfo) {
        if let Some(slot) = self.items.iter_mut().find(|p| p.id == post.id) {
            *slot = post;
        }
    }

    /// Row offset of the current page window.
    pub fn offset(&self) -> usize {
        self.page * POSTS_PER_PAGE
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    /// A full page suggests more rows may exist. This is a heuristic: a page
    /// that ends exactly at the last row still lights the control, and the
    /// next page comes back empty.
    pub fn has_next(&self) -> bool {
        self.items.len() == POSTS_PER_PAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64) -> PostInfo {
        PostInfo {
            id,
            title: format!("Issue {id}"),
            content: String::new(),
            user_id: "u-1".into(),
            image_url: None,
            created_at: "2026-08-29T00:00:00+00:00".into(),
        }
    }

    #[test]
    fn replace_page_is_wholesale_and_resolves() {
        let mut feed = PostFeed::default();
        feed.set_loading();
        feed.replace_page(vec![post(1), post(2), post(3)]);
        assert_eq!(feed.status, FeedStatus::Resolved);
        assert_eq!(feed.items.len(), 3);

        // An empty follow-up page empties the display, it does not append.
        feed.replace_page(Vec::new());
        assert_eq!(feed.status, FeedStatus::Resolved);
        assert!(feed.items.is_empty());
    }

    #[test]
    fn remove_by_id_removes_exactly_one_entry() {
        let mut feed = PostFeed::default();
        feed.replace_page(vec![post(1), post(2), post(3)]);
        feed.remove_by_id(2);
        assert_eq!(
            feed.items.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut feed = PostFeed::default();
        feed.replace_page(vec![post(1)]);
        feed.remove_by_id(99);
        assert_eq!(feed.items.len(), 1);
    }

    #[test]
    fn replace_by_id_swaps_in_place() {
        let mut feed = PostFeed::default();
        feed.replace_page(vec![post(1), post(2)]);
        let mut edited = post(2);
        edited.title = "Revised".into();
        feed.replace_by_id(edited);
        assert_eq!(feed.items[1].title, "Revised");
        assert_eq!(feed.items[0].title, "Issue 1");
    }

    #[test]
    fn replace_unknown_id_is_a_noop() {
        let mut feed = PostFeed::default();
        feed.replace_page(vec![post(1)]);
        feed.replace_by_id(post(42));
        assert_eq!(feed.items.len(), 1);
        assert_eq!(feed.items[0].id, 1);
    }

    #[test]
    fn insert_at_front_unshifts() {
        let mut feed = PostFeed::default();
        feed.replace_page(vec![post(1)]);
        feed.insert_at_front(post(2));
        assert_eq!(feed.items[0].id, 2);
    }

    #[test]
    fn window_offset_tracks_page() {
        let mut feed = PostFeed::default();
        assert_eq!(feed.offset(), 0);
        feed.set_page(4);
        assert_eq!(feed.offset(), 12);
    }

    #[test]
    fn pagination_controls_follow_the_window() {
        let mut feed = PostFeed::default();

        // Page 0, full page: Next on, Previous off.
        feed.replace_page(vec![post(1), post(2), post(3)]);
        assert!(!feed.has_prev());
        assert!(feed.has_next());

        // Page 0, short page: Next off.
        feed.replace_page(vec![post(1), post(2)]);
        assert!(!feed.has_next());

        // Any later page enables Previous.
        feed.set_page(1);
        assert!(feed.has_prev());
    }
}
