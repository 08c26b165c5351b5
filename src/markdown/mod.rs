//! Markdown to HTML rendering.
//!
//! A fixed grammar: headings, emphasis, fenced and inline code, lists,
//! blockquotes, links, images, horizontal rules and the `{{youtube:...}}`
//! directive. Rendering runs the [`STAGES`] table in order over a
//! [`Document`]; code produced early is stashed so later stages never
//! rewrite it.
//!
//! ```ignore
//! assert_eq!(render("**x**"), "<p><strong>x</strong></p>");
//! ```

mod embed;
mod stage;
mod stash;


pub use embed::{extract_youtube_id, video_embed};
pub use stage::{STAGES, Stage};
pub use stash::Stash;

use crate::frontmatter::normalize_newlines;

/// Working text plus the fragments stashed out of it.
#[derive(Debug, Default)]
pub struct Document {
    text: String,
    stash: Stash,
}

impl Document {
    /// Start a document from markdown, normalizing line endings.
    pub fn new(markdown: &str) -> Self {
        Self {
            text: normalize_newlines(markdown).into_owned(),
            stash: Stash::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }

    /// Final HTML with every placeholder restored.
    pub fn finish(self) -> String {
        self.stash.restore(&self.text)
    }
}

/// Render markdown to HTML. Total: every input produces output.
pub fn render(markdown: &str) -> String {
    let mut doc = Document::new(markdown);
    for stage in STAGES {
        stage.apply(&mut doc);
    }
    doc.finish()
}
