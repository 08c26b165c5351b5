//! Articles: loading markdown sources into renderable pages.
//!
//! ```text
//! {content}/*.md ──► frontmatter::parse ──► markdown::render ──► Article
//! ```
//!
//! [`load_articles`] reads the whole content directory in parallel and
//! returns articles newest first.

mod article;
mod loader;

pub use article::{Article, DEFAULT_AUTHOR};
pub use loader::{load_articles, sort_newest_first};
