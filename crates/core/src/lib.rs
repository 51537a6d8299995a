//! Core library for blogposts
//!
//! This crate implements the **Functional Core** of the blogposts service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The blogposts project uses a two-crate architecture:
//!
//! - **`blogposts_core`** (this crate): the post collection, identity assignment,
//!   filtering and pagination, plus the seed loader
//! - **`blogposts`**: the HTTP and CLI transports (the Imperative Shell)
//!
//! The [`store::CollectionStore`] is a plain owned value. It performs no locking of
//! its own: reads take `&self` and mutations take `&mut self`, so whoever owns it
//! decides how access is serialized. The HTTP server wraps it in a
//! `tokio::sync::RwLock`, the CLI owns it outright.
//!
//! # Module Organization
//!
//! - [`post`]: the stored record and the client-supplied draft
//! - [`store`]: the collection with its five operations
//! - [`pagination`]: page window arithmetic and query normalization
//! - [`seed`]: the bootstrap loader reading a JSON seed file
//! - [`error`]: store and loader errors
//!
//! # Example Usage
//!
//! ```rust
//! use blogposts_core::post::{Post, PostDraft};
//! use blogposts_core::store::CollectionStore;
//!
//! let mut store = CollectionStore::from_posts(vec![
//!     Post::new(1, "Alpha", "", ""),
//!     Post::new(2, "Beta", "", ""),
//! ]);
//!
//! let id = store.insert(PostDraft::new("Gamma", "c", "a")).unwrap();
//! assert_eq!(id, 3);
//!
//! let page = store.query("gam", 1, 2).unwrap();
//! let ids: Vec<u64> = page.iter().map(|p| p.id).collect();
//! assert_eq!(ids, vec![3]);
//! ```

pub mod error;
pub mod pagination;
pub mod post;
pub mod seed;
pub mod store;

pub use error::{LoadError, StoreError};
pub use post::{Post, PostDraft};
pub use store::CollectionStore;
