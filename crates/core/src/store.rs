use std::collections::HashMap;

use crate::error::StoreError;
use crate::pagination::window;
use crate::post::{Post, PostDraft};

/// In-memory collection of posts and the authority over id assignment
///
/// `last_id` only ever grows, so ids retired by [`CollectionStore::delete`] are
/// never handed out again.
#[derive(Debug, Default, Clone)]
pub struct CollectionStore {
    posts: HashMap<u64, Post>,
    last_id: u64,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an ordered sequence of posts that already carry ids
    ///
    /// Later entries replace earlier ones with the same id. The id counter starts
    /// at the largest id seen, or 0 when `posts` is empty.
    pub fn from_posts<I>(posts: I) -> Self
    where
        I: IntoIterator<Item = Post>,
    {
        let mut store = Self::new();
        for post in posts {
            store.last_id = store.last_id.max(post.id);
            store.posts.insert(post.id, post);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The most recently assigned (or largest seeded) id
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Posts whose title contains `title` (case-insensitive), sorted by id
    fn matching(&self, title: &str) -> Vec<&Post> {
        let needle = title.to_lowercase();
        let mut selected: Vec<&Post> = self
            .posts
            .values()
            .filter(|post| needle.is_empty() || post.title.to_lowercase().contains(&needle))
            .collect();
        selected.sort_unstable_by_key(|post| post.id);
        selected
    }

    /// Number of posts a [`query`](Self::query) with this filter would page over
    pub fn count(&self, title: &str) -> usize {
        self.matching(title).len()
    }

    /// Filter by title substring, sort by id and return one page of copies
    ///
    /// An empty `title` selects every post. A page past the end of the
    /// selection is empty. `page` and `limit` must both be at least 1.
    pub fn query(&self, title: &str, page: usize, limit: usize) -> Result<Vec<Post>, StoreError> {
        let selected = self.matching(title);
        let range =
            window(selected.len(), page, limit).ok_or(StoreError::InvalidWindow { page, limit })?;

        Ok(selected[range].iter().map(|post| (*post).clone()).collect())
    }

    pub fn get(&self, id: u64) -> Result<Post, StoreError> {
        self.posts.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// Store a new post under a fresh id and return that id
    ///
    /// Fails without touching the store once the id counter has reached `u64::MAX`.
    pub fn insert(&mut self, draft: PostDraft) -> Result<u64, StoreError> {
        let id = self.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        self.last_id = id;
        self.posts.insert(id, draft.into_post(id));
        Ok(id)
    }

    /// Replace the title, content and author of an existing post
    pub fn update(&mut self, id: u64, draft: PostDraft) -> Result<(), StoreError> {
        let post = self.posts.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        post.apply(draft);
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.posts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
