//! Skills taxonomy: category label -> skill names.
//!
//! Categories keep their declared order and their labels are unique. Both
//! hold by construction: `insert` replaces an existing category and the
//! deserializer rejects a document that repeats a label.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One category with its skills
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    /// Category label, e.g. "DevOps & Cloud"
    pub name: String,

    /// Skill names, in display order
    pub skills: Vec<String>,
}

/// Ordered mapping from category label to skill names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills {
    categories: Vec<SkillCategory>,
}

impl Skills {
    /// Create an empty skills map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category, replacing (in place) any category with the same label.
    ///
    /// Returns the previous skills for that label.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        skills: impl IntoIterator<Item = impl Into<String>>,
    ) -> Option<Vec<String>> {
        let name = name.into();
        let skills: Vec<String> = skills.into_iter().map(Into::into).collect();

        if let Some(existing) = self.categories.iter_mut().find(|c| c.name == name) {
            Some(std::mem::replace(&mut existing.skills, skills))
        } else {
            self.categories.push(SkillCategory { name, skills });
            None
        }
    }

    /// Builder form of [`Skills::insert`]
    pub fn with_category(
        mut self,
        name: impl Into<String>,
        skills: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(name, skills);
        self
    }

    /// Skills of a category
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.skills.as_slice())
    }

    /// Categories in declared order
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Category labels in declared order
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Check whether any category lists a skill (case-insensitive)
    pub fn contains_skill(&self, skill: &str) -> bool {
        self.categories
            .iter()
            .flat_map(|c| c.skills.iter())
            .any(|s| s.eq_ignore_ascii_case(skill))
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if there are no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SkillsVisitor)
    }
}

struct SkillsVisitor;

impl<'de> Visitor<'de> for SkillsVisitor {
    type Value = Skills;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of skill category to a list of skills")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Skills, A::Error> {
        let mut skills = Skills::new();

        while let Some((name, list)) = access.next_entry::<String, Vec<String>>()? {
            if skills.get(&name).is_some() {
                return Err(de::Error::custom(format!(
                    "duplicate skill category: {}",
                    name
                )));
            }
            skills.insert(name, list);
        }

        Ok(skills)
    }
}
