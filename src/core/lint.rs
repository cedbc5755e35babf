//! Data-quality lints.
//!
//! Lints flag content that is schema-valid but probably unintended. They are
//! logged and kept on the store; only strict mode turns them into a load
//! failure. Tag spelling is never rewritten here.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use thiserror::Error;

use crate::domain::{Experience, Project, Skills};

/// A data-quality finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lint {
    #[error("{count} experience records are marked current (at most one expected)")]
    MultipleCurrent { count: usize },

    #[error("No experience record is marked current")]
    NoCurrent,

    #[error("Tag spelled inconsistently: {}", .variants.join(" / "))]
    InconsistentTagSpelling { variants: Vec<String> },

    #[error("Tag {tag:?} repeated in {location}")]
    DuplicateTag { location: String, tag: String },
}

/// Run every lint over the collections
pub fn lint(experience: &[Experience], projects: &[Project], skills: &Skills) -> Vec<Lint> {
    let mut lints = Vec::new();

    let current = experience.iter().filter(|e| e.is_current()).count();
    match current {
        0 if !experience.is_empty() => lints.push(Lint::NoCurrent),
        0 | 1 => {}
        count => lints.push(Lint::MultipleCurrent { count }),
    }

    let lists = tag_lists(experience, projects, skills);

    for (location, tags) in &lists {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for tag in *tags {
            if !seen.insert(tag.as_str()) && reported.insert(tag.as_str()) {
                lints.push(Lint::DuplicateTag {
                    location: location.clone(),
                    tag: tag.clone(),
                });
            }
        }
    }

    // Spelling variants keyed by lowercase form, first-seen order within a key
    let mut spellings: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for tag in lists.iter().flat_map(|(_, tags)| tags.iter()) {
        let variants = spellings.entry(tag.to_ascii_lowercase()).or_default();
        if !variants.contains(&tag.as_str()) {
            variants.push(tag.as_str());
        }
    }
    for variants in spellings.into_values().filter(|v| v.len() > 1) {
        lints.push(Lint::InconsistentTagSpelling {
            variants: variants.into_iter().map(String::from).collect(),
        });
    }

    lints
}

/// Every tag list in the store, labelled by location
fn tag_lists<'a>(
    experience: &'a [Experience],
    projects: &'a [Project],
    skills: &'a Skills,
) -> Vec<(String, &'a [String])> {
    let mut lists = Vec::new();

    for (i, exp) in experience.iter().enumerate() {
        lists.push((
            format!("experience[{}].technologies", i),
            exp.technologies.as_slice(),
        ));
    }
    for (i, project) in projects.iter().enumerate() {
        lists.push((
            format!("projects[{}].technologies", i),
            project.technologies.as_slice(),
        ));
    }
    for category in skills.categories() {
        lists.push((
            format!("skills[{:?}]", category.name),
            category.skills.as_slice(),
        ));
    }

    lists
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExperienceStatus;

    fn job(status: ExperienceStatus, tags: &[&str]) -> Experience {
        Experience {
            company: "Acme".into(),
            role: "Engineer".into(),
            period: "2020".into(),
            location: "Remote".into(),
            status,
            description: "Work".into(),
            achievements: Vec::new(),
            technologies: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_clean_content_has_no_lints() {
        let experience = vec![
            job(ExperienceStatus::Current, &["Rust"]),
            job(ExperienceStatus::Completed, &["Rust", "Go"]),
        ];
        let skills = Skills::new().with_category("Languages", ["Rust", "Go"]);

        assert!(lint(&experience, &[], &skills).is_empty());
    }

    #[test]
    fn test_multiple_current() {
        let experience = vec![
            job(ExperienceStatus::Current, &[]),
            job(ExperienceStatus::Current, &[]),
        ];

        assert_eq!(
            lint(&experience, &[], &Skills::new()),
            vec![Lint::MultipleCurrent { count: 2 }]
        );
    }

    #[test]
    fn test_no_current() {
        let experience = vec![job(ExperienceStatus::Completed, &[])];
        assert_eq!(lint(&experience, &[], &Skills::new()), vec![Lint::NoCurrent]);

        // An empty history is not a finding
        assert!(lint(&[], &[], &Skills::new()).is_empty());
    }

    #[test]
    fn test_inconsistent_spelling_across_collections() {
        let experience = vec![job(ExperienceStatus::Current, &["MySQL", "helm"])];
        let projects = vec![Project::new("Demo", "Demo").with_technologies(["HELM"])];
        let skills = Skills::new().with_category("Databases", ["MysQL"]);

        let lints = lint(&experience, &projects, &skills);

        assert_eq!(
            lints,
            vec![
                Lint::InconsistentTagSpelling {
                    variants: vec!["helm".into(), "HELM".into()],
                },
                Lint::InconsistentTagSpelling {
                    variants: vec!["MySQL".into(), "MysQL".into()],
                },
            ]
        );
        assert_eq!(lints[1].to_string(), "Tag spelled inconsistently: MySQL / MysQL");
    }

    #[test]
    fn test_duplicate_tag_reported_once() {
        let projects =
            vec![Project::new("Demo", "Demo").with_technologies(["Rust", "Rust", "Rust"])];

        assert_eq!(
            lint(&[], &projects, &Skills::new()),
            vec![Lint::DuplicateTag {
                location: "projects[0].technologies".into(),
                tag: "Rust".into(),
            }]
        );
    }

    #[test]
    fn test_lint_json_is_tagged_by_kind() {
        let value = serde_json::to_value(Lint::MultipleCurrent { count: 2 }).unwrap();
        assert_eq!(value, serde_json::json!({ "kind": "multiple_current", "count": 2 }));
    }
}
