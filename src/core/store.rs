//! The read-only content store.
//!
//! Content is authored as four YAML documents. The copies under `content/`
//! are compiled into the binary; a directory holding the same four files can
//! replace them at runtime.
//!
//! ```text
//! content/
//! ├── introduction.yaml   # Introduction (singleton)
//! ├── experience.yaml     # [Experience], most recent first
//! ├── projects.yaml       # [Project]
//! └── skills.yaml         # { category: [skill] }
//! ```
//!
//! Loading parses, validates and lints in one pass. Any parse error or schema
//! violation fails the load; nothing partially valid is ever served.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::lint::{lint, Lint};
use super::validation::{validate, Violation};
use crate::config::ResolvedConfig;
use crate::domain::{Experience, Introduction, Project, Skills};

pub const INTRODUCTION_FILE: &str = "introduction.yaml";
pub const EXPERIENCE_FILE: &str = "experience.yaml";
pub const PROJECTS_FILE: &str = "projects.yaml";
pub const SKILLS_FILE: &str = "skills.yaml";

/// A store loaded at most once; the load error is kept as text
pub type StoreCell = OnceLock<Result<ContentStore, String>>;

/// Process-wide store, loaded once from the resolved configuration
static STORE: StoreCell = OnceLock::new();

/// Errors that can occur while loading content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Content failed validation ({} violations):\n{}", .0.len(), bullet_list(.0))]
    Invalid(Vec<Violation>),

    #[error("Strict lint mode rejected content ({} findings):\n{}", .0.len(), bullet_list(.0))]
    Lint(Vec<Lint>),
}

fn bullet_list<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("  - {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Options applied while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treat lint findings as fatal
    pub strict_lints: bool,
}

/// Raw YAML text of the four documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSources {
    pub introduction: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
}

impl ContentSources {
    /// The documents compiled into the binary
    pub fn bundled() -> Self {
        Self {
            introduction: include_str!("../../content/introduction.yaml").to_string(),
            experience: include_str!("../../content/experience.yaml").to_string(),
            projects: include_str!("../../content/projects.yaml").to_string(),
            skills: include_str!("../../content/skills.yaml").to_string(),
        }
    }

    /// Read the four documents from a directory
    pub fn read_dir(dir: &Path) -> Result<Self, ContentError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ContentError::Io { path, source })
        };

        Ok(Self {
            introduction: read(INTRODUCTION_FILE)?,
            experience: read(EXPERIENCE_FILE)?,
            projects: read(PROJECTS_FILE)?,
            skills: read(SKILLS_FILE)?,
        })
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    document: &'static str,
    text: &str,
) -> Result<T, ContentError> {
    serde_yaml::from_str(text).map_err(|source| ContentError::Parse { document, source })
}

/// Validated, immutable portfolio content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    introduction: Introduction,
    experience: Vec<Experience>,
    projects: Vec<Project>,
    skills: Skills,
    lints: Vec<Lint>,
}

impl ContentStore {
    /// Build a store from records, validating and linting them
    pub fn new(
        introduction: Introduction,
        experience: Vec<Experience>,
        projects: Vec<Project>,
        skills: Skills,
        options: LoadOptions,
    ) -> Result<Self, ContentError> {
        validate(&introduction, &experience, &projects, &skills).map_err(ContentError::Invalid)?;

        let lints = lint(&experience, &projects, &skills);
        for finding in &lints {
            warn!("Content lint: {}", finding);
        }
        if options.strict_lints && !lints.is_empty() {
            return Err(ContentError::Lint(lints));
        }

        info!(
            experience = experience.len(),
            projects = projects.len(),
            skill_categories = skills.len(),
            lints = lints.len(),
            "Loaded portfolio content"
        );

        Ok(Self {
            introduction,
            experience,
            projects,
            skills,
            lints,
        })
    }

    /// Parse and validate the four documents
    pub fn from_sources(sources: &ContentSources, options: LoadOptions) -> Result<Self, ContentError> {
        Self::new(
            parse(INTRODUCTION_FILE, &sources.introduction)?,
            parse(EXPERIENCE_FILE, &sources.experience)?,
            parse(PROJECTS_FILE, &sources.projects)?,
            parse(SKILLS_FILE, &sources.skills)?,
            options,
        )
    }

    /// Load the compiled-in content
    pub fn bundled() -> Result<Self, ContentError> {
        debug!("Loading bundled content");
        Self::from_sources(&ContentSources::bundled(), LoadOptions::default())
    }

    /// Load content from a directory on disk
    pub fn from_dir(dir: &Path, options: LoadOptions) -> Result<Self, ContentError> {
        debug!("Loading content from {}", dir.display());
        Self::from_sources(&ContentSources::read_dir(dir)?, options)
    }

    /// The introduction singleton
    pub fn get_introduction(&self) -> &Introduction {
        &self.introduction
    }

    /// Employment records in declared order (most recent first)
    pub fn list_experience(&self) -> &[Experience] {
        &self.experience
    }

    /// The one authoritative project list, in declared order
    pub fn list_projects(&self) -> &[Project] {
        &self.projects
    }

    /// Full skills map in declared category order
    pub fn get_skills(&self) -> &Skills {
        &self.skills
    }

    /// Data-quality findings from load time
    pub fn lints(&self) -> &[Lint] {
        &self.lints
    }

    /// The present position, if any
    pub fn current_experience(&self) -> Option<&Experience> {
        self.experience.iter().find(|e| e.is_current())
    }

    /// Employment records oldest first
    pub fn experience_oldest_first(&self) -> Vec<&Experience> {
        self.experience.iter().rev().collect()
    }
}

/// Load content according to configuration
pub fn load(config: &ResolvedConfig) -> Result<ContentStore, ContentError> {
    let options = config.load_options();

    match &config.content_dir {
        Some(dir) => ContentStore::from_dir(dir, options),
        None => ContentStore::from_sources(&ContentSources::bundled(), options),
    }
}

/// Load into `cell` on first use; later calls return the cached outcome
/// whatever `config` they pass
pub fn load_once<'a>(cell: &'a StoreCell, config: &ResolvedConfig) -> anyhow::Result<&'a ContentStore> {
    let result = cell.get_or_init(|| load(config).map_err(|e| e.to_string()));

    match result {
        Ok(store) => Ok(store),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Get the global store (loads once from the resolved configuration, then cached)
pub fn store() -> anyhow::Result<&'static ContentStore> {
    load_once(&STORE, crate::config::config()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> ContentSources {
        ContentSources {
            introduction: "name: Jane\ndescription: Engineer\nsocial:\n  github: https://github.com/jane/\n"
                .to_string(),
            experience: r#"
- company: Acme
  role: Engineer
  period: "2021 → Present"
  location: Remote
  status: current
  description: Building
  technologies: [Rust]
"#
            .to_string(),
            projects: "- title: Demo\n  description: A demo\n  technologies: [Rust]\n".to_string(),
            skills: "Languages: [Rust]\n".to_string(),
        }
    }

    #[test]
    fn test_from_sources() {
        let store = ContentStore::from_sources(&sources(), LoadOptions::default()).unwrap();

        assert_eq!(store.get_introduction().name, "Jane");
        assert_eq!(store.list_experience().len(), 1);
        assert_eq!(store.list_projects()[0].title, "Demo");
        assert_eq!(store.get_skills().get("Languages").unwrap(), ["Rust"]);
        assert!(store.lints().is_empty());
        assert_eq!(store.current_experience().unwrap().company, "Acme");
    }

    #[test]
    fn test_parse_error_names_document() {
        let mut sources = sources();
        sources.projects = "- title: Demo\n  descripton: typo\n".to_string();

        let err = ContentStore::from_sources(&sources, LoadOptions::default()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { document: PROJECTS_FILE, .. }));
        assert!(err.to_string().starts_with("Failed to parse projects.yaml"));
    }

    #[test]
    fn test_invalid_status_is_parse_error() {
        let mut sources = sources();
        sources.experience = sources.experience.replace("status: current", "status: ongoing");

        let err = ContentStore::from_sources(&sources, LoadOptions::default()).unwrap_err();
        assert!(matches!(err, ContentError::Parse { document: EXPERIENCE_FILE, .. }));
    }

    #[test]
    fn test_violations_fail_the_whole_load() {
        let mut sources = sources();
        sources.introduction =
            "name: Jane\ndescription: Engineer\nsocial:\n  github: http://github.com/jane/\n"
                .to_string();

        let err = ContentStore::from_sources(&sources, LoadOptions::default()).unwrap_err();
        match err {
            ContentError::Invalid(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].path, "introduction.social.github");
            }
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_lints() {
        let mut sources = sources();
        sources.skills = "Languages: [rust]\n".to_string();

        let lenient = ContentStore::from_sources(&sources, LoadOptions::default()).unwrap();
        assert_eq!(lenient.lints().len(), 1);

        let strict = ContentStore::from_sources(&sources, LoadOptions { strict_lints: true });
        assert!(matches!(strict, Err(ContentError::Lint(ref lints)) if lints.len() == 1));
    }

    #[test]
    fn test_load_honors_strict_config() {
        let strict = ResolvedConfig {
            strict_lints: true,
            ..ResolvedConfig::default()
        };

        assert!(matches!(load(&strict), Err(ContentError::Lint(_))));
        assert!(load(&ResolvedConfig::default()).is_ok());
    }

    #[test]
    fn test_load_once_caches_first_outcome() {
        let cell = StoreCell::new();
        let first = load_once(&cell, &ResolvedConfig::default()).unwrap();
        let second = load_once(&cell, &ResolvedConfig::default()).unwrap();
        assert!(std::ptr::eq(first, second));

        let failed = StoreCell::new();
        let strict = ResolvedConfig {
            strict_lints: true,
            ..ResolvedConfig::default()
        };
        let err = load_once(&failed, &strict).unwrap_err();
        assert!(err.to_string().starts_with("Strict lint mode rejected content"));
        assert!(load_once(&failed, &ResolvedConfig::default()).is_err());
    }

    #[test]
    fn test_error_lists_every_violation() {
        let err = ContentError::Invalid(vec![
            Violation::new("a", "first"),
            Violation::new("b", "second"),
        ]);
        assert_eq!(
            err.to_string(),
            "Content failed validation (2 violations):\n  - a: first\n  - b: second"
        );
    }

    #[test]
    fn test_oldest_first() {
        let mut sources = sources();
        sources.experience.push_str(
            r#"
- company: Initech
  role: Intern
  period: "2019 → 2021"
  location: On-site
  status: completed
  description: Learning
"#,
        );

        let store = ContentStore::from_sources(&sources, LoadOptions::default()).unwrap();
        let oldest: Vec<_> = store
            .experience_oldest_first()
            .into_iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(oldest, vec!["Initech", "Acme"]);
    }
}
