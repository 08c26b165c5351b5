//! Embedded HTML resources.
//!
//! - `build` - templates used while generating the site (category pages)
//! - `serve` - pages the local server answers with
//!
//! ```ignore
//! use embed::serve::{NOT_FOUND_HTML, NotFoundVars};
//! let html = NOT_FOUND_HTML.render(&NotFoundVars { path: "/missing".into() });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};
    use crate::generator::template::{Vars, render};

    /// Variables for category.html. All values are inserted verbatim, so
    /// callers escape text fields.
    pub struct CategoryVars {
        pub vars: Vars,
    }

    impl TemplateVars for CategoryVars {
        fn apply(&self, content: &str) -> String {
            render(content, &self.vars)
        }
    }

    /// Category listing page.
    pub const CATEGORY_HTML: Template<CategoryVars> =
        Template::new(include_str!("category.html"));
}

pub mod serve {
    use super::{Template, TemplateVars};
    use crate::utils::html::escape;

    pub struct NotFoundVars {
        pub path: String,
    }

    impl TemplateVars for NotFoundVars {
        fn apply(&self, content: &str) -> String {
            content.replace("{{path}}", &escape(&self.path))
        }
    }

    /// Fallback page for missing files.
    pub const NOT_FOUND_HTML: Template<NotFoundVars> =
        Template::new(include_str!("not_found.html"));
}
