//! Schema validation for loaded content.
//!
//! Every check appends a [`Violation`] instead of returning early, so a
//! single load reports all problems at once. Any violation makes the whole
//! store invalid.
//!
//! Checks:
//! - Required text fields are non-blank
//! - Tag and achievement lists contain only non-blank strings
//! - Social, project link and repository URLs are absolute `https` URLs
//! - Skill category labels and skill names are non-blank

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::domain::{Experience, Introduction, Project, Skills};

/// A single schema failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Location of the offending value, e.g. `projects[1].github`
    pub path: String,

    /// What is wrong with it
    pub reason: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Check that a URL is absolute and served over https
pub fn validate_url(path: &str, value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        return Err(Violation::new(path, "URL cannot be empty"));
    }

    let url = Url::parse(value)
        .map_err(|e| Violation::new(path, format!("Invalid URL {:?}: {}", value, e)))?;

    if url.scheme() != "https" {
        return Err(Violation::new(
            path,
            format!("Unsupported URL scheme {:?} (https required)", url.scheme()),
        ));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(Violation::new(path, format!("URL {:?} has no host", value)));
    }

    Ok(())
}

/// Accumulates violations across all collections
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn non_blank(&mut self, path: String, value: &str) {
        if value.trim().is_empty() {
            self.violations
                .push(Violation::new(path, "Value cannot be empty or whitespace-only"));
        }
    }

    fn entries(&mut self, path: &str, values: &[String]) {
        for (i, value) in values.iter().enumerate() {
            self.non_blank(format!("{}[{}]", path, i), value);
        }
    }

    fn url(&mut self, path: String, value: &str) {
        if let Err(violation) = validate_url(&path, value) {
            self.violations.push(violation);
        }
    }

    /// Check the introduction record
    pub fn introduction(&mut self, intro: &Introduction) -> &mut Self {
        self.non_blank("introduction.name".into(), &intro.name);
        self.non_blank("introduction.description".into(), &intro.description);

        for (platform, link) in &intro.social {
            let path = format!("introduction.social.{}", platform);
            self.non_blank(format!("{} (platform name)", path), platform);
            self.url(path, link);
        }
        self
    }

    /// Check every employment record
    pub fn experience(&mut self, records: &[Experience]) -> &mut Self {
        for (i, exp) in records.iter().enumerate() {
            let base = format!("experience[{}]", i);
            self.non_blank(format!("{}.company", base), &exp.company);
            self.non_blank(format!("{}.role", base), &exp.role);
            self.non_blank(format!("{}.period", base), &exp.period);
            self.non_blank(format!("{}.location", base), &exp.location);
            self.non_blank(format!("{}.description", base), &exp.description);
            self.entries(&format!("{}.achievements", base), &exp.achievements);
            self.entries(&format!("{}.technologies", base), &exp.technologies);
        }
        self
    }

    /// Check every project record
    pub fn projects(&mut self, records: &[Project]) -> &mut Self {
        for (i, project) in records.iter().enumerate() {
            let base = format!("projects[{}]", i);
            self.non_blank(format!("{}.title", base), &project.title);
            self.non_blank(format!("{}.description", base), &project.description);
            self.entries(&format!("{}.technologies", base), &project.technologies);

            if let Some(link) = &project.link {
                self.url(format!("{}.link", base), link);
            }
            if let Some(github) = &project.github {
                self.url(format!("{}.github", base), github);
            }
        }
        self
    }

    /// Check the skills map
    pub fn skills(&mut self, skills: &Skills) -> &mut Self {
        for (i, category) in skills.categories().iter().enumerate() {
            self.non_blank(format!("skills[{}] (category name)", i), &category.name);
            self.entries(&format!("skills[{:?}]", category.name), &category.skills);
        }
        self
    }

    /// Violations found so far
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Finish validation
    pub fn finish(self) -> Result<(), Vec<Violation>> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(self.violations)
        }
    }
}

/// Validate all four collections together
pub fn validate(
    introduction: &Introduction,
    experience: &[Experience],
    projects: &[Project],
    skills: &Skills,
) -> Result<(), Vec<Violation>> {
    let mut validator = Validator::new();
    validator
        .introduction(introduction)
        .experience(experience)
        .projects(projects)
        .skills(skills);
    validator.finish()
}
