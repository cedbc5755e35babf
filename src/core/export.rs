//! JSON export for the rendering layer.
//!
//! The bundle is the whole store in one document:
//!
//! ```json
//! {
//!   "introduction": { "name": "...", "description": "...", "social": { ... } },
//!   "experience": [ ... ],
//!   "projects": [ ... ],
//!   "skills": { "Languages": [ ... ], ... }
//! }
//! ```
//!
//! Serialization is deterministic: the same content always yields the same
//! bytes, so the fingerprint can be used to detect content changes.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::fs;

use super::store::ContentStore;
use crate::domain::{Experience, Introduction, Project, Skills};

/// Borrowed view of the full store for serialization
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Export<'a> {
    pub introduction: &'a Introduction,
    pub experience: &'a [Experience],
    pub projects: &'a [Project],
    pub skills: &'a Skills,
}

impl ContentStore {
    /// View the store as an export bundle
    pub fn export(&self) -> Export<'_> {
        Export {
            introduction: self.get_introduction(),
            experience: self.list_experience(),
            projects: self.list_projects(),
            skills: self.get_skills(),
        }
    }

    /// Serialize the export bundle
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(&self.export())
        } else {
            serde_json::to_string(&self.export())
        }
    }

    /// SHA256 of the compact export, hex encoded
    pub fn fingerprint(&self) -> serde_json::Result<String> {
        let json = self.to_json(false)?;
        Ok(hex::encode(Sha256::digest(json.as_bytes())))
    }
}

/// Write the export bundle to a file, creating parent directories
pub async fn write_export(store: &ContentStore, path: &Path, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut content = store.to_json(pretty)?;
    content.push('\n');

    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write export: {}", path.display()))?;

    Ok(())
}
