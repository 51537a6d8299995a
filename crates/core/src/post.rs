use serde::{Deserialize, Serialize};

/// A stored blog post
///
/// The `id` is assigned by the [`CollectionStore`](crate::store::CollectionStore)
/// and never changes afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl Post {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    /// Overwrite every non-id field with the values from `draft`
    pub(crate) fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
    }
}

/// Client-supplied post fields, before an id is assigned
///
/// Used as the payload for both inserts and updates. All three fields must be
/// present when deserialized; empty strings are accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        }
    }

    pub(crate) fn into_post(self, id: u64) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
        }
    }
}
