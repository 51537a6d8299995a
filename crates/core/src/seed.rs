//! Bootstrap loader
//!
//! Reads the JSON seed document the service starts from:
//!
//! ```json
//! { "posts": [ { "id": 1, "title": "...", "content": "...", "author": "..." } ] }
//! ```
//!
//! Entries keep their order; missing fields default to `0` or an empty string.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::post::Post;
use crate::store::CollectionStore;

#[derive(Debug, Deserialize)]
struct SeedFile {
    posts: Vec<SeedEntry>,
}

/// Seed record as written on disk
#[derive(Debug, Deserialize)]
struct SeedEntry {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    author: String,
}

impl From<SeedEntry> for Post {
    fn from(entry: SeedEntry) -> Self {
        Post {
            id: entry.id,
            title: entry.title,
            content: entry.content,
            author: entry.author,
        }
    }
}

/// Decode a seed document into its ordered list of posts
pub fn parse_seed(contents: &str) -> Result<Vec<Post>, LoadError> {
    let file: SeedFile = serde_json::from_str(contents)?;
    Ok(file.posts.into_iter().map(Post::from).collect())
}

/// Read and decode the seed file at `path` into a ready-to-serve store
pub fn load_seed(path: &Path) -> Result<CollectionStore, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let posts = parse_seed(&contents)?;
    if let Some(max) = posts.iter().map(|post| post.id).max() {
        if max == u64::MAX {
            return Err(LoadError::IdsExhausted(max));
        }
    }

    let entries = posts.len();
    let store = CollectionStore::from_posts(posts);

    log::info!(
        "loaded {} posts from {} ({} seed entries, last id {})",
        store.len(),
        path.display(),
        entries,
        store.last_id()
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SEED: &str = r#"{
        "posts": [
            {"id": 1, "title": "Alpha", "content": "a", "author": "ann"},
            {"id": 7, "title": "Beta", "content": "b", "author": "bob"},
            {"id": 3, "title": "Gamma", "content": "c", "author": "cid"}
        ]
    }"#;

    fn seed_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_seed_keeps_order() {
        let posts = parse_seed(SEED).unwrap();
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![1, 7, 3]);
        assert_eq!(posts[1], Post::new(7, "Beta", "b", "bob"));
    }

    #[test]
    fn test_parse_seed_missing_fields_default() {
        let posts = parse_seed(r#"{"posts": [{"title": "no id"}]}"#).unwrap();
        assert_eq!(posts, vec![Post::new(0, "no id", "", "")]);
    }

    #[test]
    fn test_parse_seed_empty_list() {
        assert!(parse_seed(r#"{"posts": []}"#).unwrap().is_empty());
    }

    #[test]
    fn test_parse_seed_malformed() {
        let result = parse_seed("{ not json");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_seed_missing_posts_key() {
        let result = parse_seed(r#"{"items": []}"#);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_seed_sets_counter_to_max_id() {
        let file = seed_file(SEED);
        let mut store = load_seed(file.path()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.last_id(), 7);
        assert_eq!(
            store.insert(crate::post::PostDraft::new("d", "", "")),
            Ok(8)
        );
    }

    #[test]
    fn test_load_seed_duplicate_ids_last_wins() {
        let file = seed_file(
            r#"{"posts": [
                {"id": 2, "title": "old", "content": "", "author": ""},
                {"id": 2, "title": "new", "content": "", "author": ""}
            ]}"#,
        );
        let store = load_seed(file.path()).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(2).unwrap().title, "new");
    }

    #[test]
    fn test_load_seed_empty_file_list() {
        let file = seed_file(r#"{"posts": []}"#);
        let store = load_seed(file.path()).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.last_id(), 0);
    }

    #[test]
    fn test_load_seed_rejects_max_id() {
        let file = seed_file(&format!(
            r#"{{"posts": [
                {{"id": 0, "title": "zero"}},
                {{"id": {}, "title": "max"}}
            ]}}"#,
            u64::MAX
        ));

        let err = load_seed(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::IdsExhausted(id) if id == u64::MAX));
    }

    #[test]
    fn test_load_seed_accepts_id_below_max() {
        let file = seed_file(&format!(
            r#"{{"posts": [{{"id": {}, "title": "almost"}}]}}"#,
            u64::MAX - 1
        ));

        let mut store = load_seed(file.path()).unwrap();
        assert_eq!(
            store.insert(crate::post::PostDraft::new("last", "", "")),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn test_load_seed_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = load_seed(&missing).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_load_seed_malformed_file() {
        let file = seed_file(r#"{"posts": [{"id": "one"}]}"#);
        assert!(matches!(load_seed(file.path()), Err(LoadError::Parse(_))));
    }
}
