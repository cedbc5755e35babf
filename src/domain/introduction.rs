//! The introduction shown at the top of the site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Biographical summary and social links (singleton)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Introduction {
    /// Display name
    pub name: String,

    /// Free-text biography
    pub description: String,

    /// Platform name -> profile URL (e.g. "github", "linkedin")
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

impl Introduction {
    /// Create an introduction without social links
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            social: BTreeMap::new(),
        }
    }

    /// Add a social link
    pub fn with_social(mut self, platform: impl Into<String>, url: impl Into<String>) -> Self {
        self.social.insert(platform.into(), url.into());
        self
    }

    /// Profile URL for a platform, if listed
    pub fn social_link(&self, platform: &str) -> Option<&str> {
        self.social.get(platform).map(String::as_str)
    }
}
