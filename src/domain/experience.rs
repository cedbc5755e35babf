//! Employment history records.

use serde::{Deserialize, Serialize};

/// One employment period
///
/// Records carry no identifier; their position in the collection is the
/// display order (most recent first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// Employer
    pub company: String,

    /// Job title
    pub role: String,

    /// Human-readable date range, e.g. "2020 → 2023"
    pub period: String,

    /// "Remote", "Hybrid", "On-site", or a place
    pub location: String,

    /// Whether this is the present position
    pub status: ExperienceStatus,

    /// Free-text summary of the position
    pub description: String,

    /// Notable results, in display order
    #[serde(default)]
    pub achievements: Vec<String>,

    /// Technology tags, in display order
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl Experience {
    /// Check whether this is the present position
    pub fn is_current(&self) -> bool {
        self.status == ExperienceStatus::Current
    }

    /// Check whether a technology tag is listed (case-insensitive)
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies
            .iter()
            .any(|t| t.eq_ignore_ascii_case(technology))
    }
}

/// Status of an employment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceStatus {
    /// Present employment
    Current,

    /// Past employment
    Completed,
}

impl std::fmt::Display for ExperienceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExperienceStatus::Current => write!(f, "current"),
            ExperienceStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ExperienceStatus {
    type Err = anyhow::Error;

    /// Accepts exactly the spellings the YAML documents accept
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "current" => Ok(ExperienceStatus::Current),
            "completed" => Ok(ExperienceStatus::Completed),
            _ => anyhow::bail!("Unknown experience status: {}", s),
        }
    }
}
