//! Domain types for the portfolio content store.
//!
//! Four independent collections, none referencing another:
//! - Introduction: singleton biography and social links
//! - Experience: employment history, most recent first
//! - Project: showcased work with optional links
//! - Skills: category -> skill names

pub mod experience;
pub mod introduction;
pub mod project;
pub mod skills;

// Re-export commonly used types
pub use experience::{Experience, ExperienceStatus};
pub use introduction::Introduction;
pub use project::Project;
pub use skills::{SkillCategory, Skills};
