//! Post-build hook for the cosimulation documentation site.
//!
//! The site generator does not carry the interactive viewer pages into its
//! output tree; this crate copies them from the docs source root into the
//! generated site once the build has finished.

pub mod config;
pub mod hook;

pub use config::{ConfigError, SiteConfig};
pub use hook::{copy_file_safe, on_post_build, HookError};
