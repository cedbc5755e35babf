//! portfolio - Validated content store for a personal portfolio site
//!
//! Holds the data a portfolio site renders: an introduction, employment
//! history, projects and a skills taxonomy. The content is authored as YAML,
//! compiled into the crate, and validated once at load time. After that it
//! is immutable and every accessor is infallible.
//!
//! # Modules
//!
//! - `domain`: Record types (Introduction, Experience, Project, Skills)
//! - `core`: Loading, validation, lints, search and JSON export
//! - `config`: Content source and lint configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```rust,no_run
//! let store = portfolio::store()?;
//! println!("{}", store.get_introduction().name);
//! for exp in store.list_experience() {
//!     println!("{} at {}", exp.role, exp.company);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use crate::core::{store, ContentError, ContentStore, Lint, LoadOptions, SearchHit, Violation};
pub use crate::domain::{Experience, ExperienceStatus, Introduction, Project, SkillCategory, Skills};
