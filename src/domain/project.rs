//! Showcased projects.

use serde::{Deserialize, Serialize};

/// One showcased work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Display title (not required to be unique)
    pub title: String,

    /// Short summary
    pub description: String,

    /// Technology tags, in display order
    #[serde(default)]
    pub technologies: Vec<String>,

    /// Live site or demo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Source repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Project {
    /// Create a project with no tags or links
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            technologies: Vec::new(),
            link: None,
            github: None,
        }
    }

    /// Add multiple technology tags
    pub fn with_technologies(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.technologies.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the live link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the repository link
    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }

    /// Check whether a technology tag is listed (case-insensitive)
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(technology))
    }
}
