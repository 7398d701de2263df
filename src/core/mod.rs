pub mod config;
pub mod copy;
pub mod markup;
pub mod nav;
pub mod parallax;
pub mod target;

pub use config::SiteConfig;
pub use target::{CodeBlock, ResetTimer, StyleTarget};
