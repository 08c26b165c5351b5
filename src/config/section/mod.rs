//! Configuration section definitions.
//!
//! Each module corresponds to a section in `blogi.toml`:
//!
//! | Module     | TOML Section          | Purpose                          |
//! |------------|-----------------------|----------------------------------|
//! | `site`     | `[site]`              | Title, description, base URL     |
//! | `build`    | `[build]`             | Paths, feed, sitemap, minify     |
//! | `category` | `[categories.<slug>]` | Category pages                   |
//! | `publish`  | `[publish]`           | Publish endpoint and lockout     |
//! | `serve`    | `[serve]`             | Local server                     |

pub mod build;
mod category;
pub mod publish;
mod serve;
mod site;

pub use build::{BuildSectionConfig, FeedConfig, SitemapConfig};
pub use category::{CategoriesConfig, CategoryConfig};
pub use publish::PublishConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
