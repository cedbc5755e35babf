//! Case-insensitive lookup across all collections.

use std::collections::BTreeMap;

use super::store::ContentStore;
use crate::domain::{Experience, Project};

/// A record matching a search query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchHit<'a> {
    /// Matched on company, role or a technology
    Experience(&'a Experience),

    /// Matched on title, description or a technology
    Project(&'a Project),

    /// A skill name within a category
    Skill { category: &'a str, skill: &'a str },
}

impl std::fmt::Display for SearchHit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchHit::Experience(exp) => {
                write!(f, "[experience] {} at {} ({})", exp.role, exp.company, exp.period)
            }
            SearchHit::Project(project) => write!(f, "[project] {}", project.title),
            SearchHit::Skill { category, skill } => write!(f, "[skill] {} ({})", skill, category),
        }
    }
}

/// ASCII case folding, matching the tag filters and the spelling lint
fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle_lower)
}

impl ContentStore {
    /// Search records by substring (case-insensitive)
    ///
    /// Hits come back grouped by collection (experience, projects, skills),
    /// each group in declared order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        let query_lower = query.trim().to_ascii_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }

        let experience = self
            .list_experience()
            .iter()
            .filter(|exp| {
                contains(&exp.company, &query_lower)
                    || contains(&exp.role, &query_lower)
                    || exp.technologies.iter().any(|t| contains(t, &query_lower))
            })
            .map(SearchHit::Experience);

        let projects = self
            .list_projects()
            .iter()
            .filter(|project| {
                contains(&project.title, &query_lower)
                    || contains(&project.description, &query_lower)
                    || project.technologies.iter().any(|t| contains(t, &query_lower))
            })
            .map(SearchHit::Project);

        let skills = self.get_skills().categories().iter().flat_map(|category| {
            category
                .skills
                .iter()
                .filter(|skill| contains(skill, &query_lower))
                .map(move |skill| SearchHit::Skill {
                    category: &category.name,
                    skill,
                })
        });

        experience.chain(projects).chain(skills).collect()
    }

    /// Projects listing a technology (case-insensitive exact tag)
    pub fn projects_using(&self, technology: &str) -> Vec<&Project> {
        self.list_projects()
            .iter()
            .filter(|p| p.uses(technology))
            .collect()
    }

    /// Employment records listing a technology (case-insensitive exact tag)
    pub fn experience_using(&self, technology: &str) -> Vec<&Experience> {
        self.list_experience()
            .iter()
            .filter(|e| e.uses(technology))
            .collect()
    }

    /// Every distinct tag (exact spelling) with the number of lists naming it
    pub fn technologies(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();

        let lists = self
            .list_experience()
            .iter()
            .map(|e| e.technologies.as_slice())
            .chain(self.list_projects().iter().map(|p| p.technologies.as_slice()))
            .chain(self.get_skills().categories().iter().map(|c| c.skills.as_slice()));

        for list in lists {
            for tag in list {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        counts
    }
}
