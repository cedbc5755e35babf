//! Bundled Content Integration Tests
//!
//! Data-quality properties of the content compiled into the crate.

use std::collections::HashSet;

use portfolio::config::ResolvedConfig;
use portfolio::core::{load_once, validate_url, StoreCell};
use portfolio::{ContentStore, ExperienceStatus, Lint};

fn store() -> ContentStore {
    ContentStore::bundled().expect("bundled content must load")
}

#[test]
fn test_introduction() {
    let store = store();
    let intro = store.get_introduction();

    assert_eq!(intro.name, "Miguel Sánchez Deleyto");
    assert!(intro.description.starts_with("I’m a DevOps Engineer"));
    assert!(intro
        .social_link("github")
        .unwrap()
        .starts_with("https://github.com/"));
    assert!(intro.social_link("linkedin").is_some());
}

#[test]
fn test_first_experience_is_current() {
    let store = store();
    let first = &store.list_experience()[0];

    assert_eq!(first.company, "XING");
    assert_eq!(first.role, "Senior DevOps Engineer");
    assert_eq!(first.status, ExperienceStatus::Current);
}

#[test]
fn test_experience_in_declared_order() {
    let store = store();
    let companies: Vec<_> = store
        .list_experience()
        .iter()
        .map(|e| e.company.as_str())
        .collect();

    assert_eq!(companies, vec!["XING", "XING", "SmallWorld", "Redsys"]);
}

#[test]
fn test_at_most_one_current() {
    let store = store();
    let current = store
        .list_experience()
        .iter()
        .filter(|e| e.status == ExperienceStatus::Current)
        .count();

    assert_eq!(current, 1);
    assert!(!store
        .lints()
        .iter()
        .any(|l| matches!(l, Lint::MultipleCurrent { .. } | Lint::NoCurrent)));
}

#[test]
fn test_list_entries_are_non_empty() {
    let store = store();

    for exp in store.list_experience() {
        for entry in exp.achievements.iter().chain(exp.technologies.iter()) {
            assert!(!entry.trim().is_empty(), "blank entry in {}", exp.company);
        }
    }
    for project in store.list_projects() {
        for tag in &project.technologies {
            assert!(!tag.trim().is_empty(), "blank tag in {}", project.title);
        }
    }
}

#[test]
fn test_all_urls_are_absolute_https() {
    let store = store();

    for (platform, url) in &store.get_introduction().social {
        assert!(validate_url(platform, url).is_ok(), "{}: {}", platform, url);
    }
    for project in store.list_projects() {
        for url in project.link.iter().chain(project.github.iter()) {
            assert!(validate_url(&project.title, url).is_ok(), "{}", url);
        }
    }
}

#[test]
fn test_single_project_collection() {
    let store = store();
    let titles: Vec<_> = store
        .list_projects()
        .iter()
        .map(|p| p.title.as_str())
        .collect();

    assert_eq!(
        titles,
        vec!["Homelab Infrastructure", "Homelab Services", "Profile Website"]
    );

    // One repository owner across the whole collection
    let owners: HashSet<_> = store
        .list_projects()
        .iter()
        .filter_map(|p| p.github.as_deref())
        .filter_map(|url| url.strip_prefix("https://github.com/"))
        .filter_map(|path| path.split('/').next())
        .collect();
    assert_eq!(owners, HashSet::from(["msdeleyto"]));
}

#[test]
fn test_skills_categories() {
    let store = store();
    let names: Vec<_> = store.get_skills().category_names().collect();

    assert_eq!(names, vec!["Languages", "Databases", "DevOps & Cloud", "Tools"]);

    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn test_known_spelling_inconsistencies_are_linted() {
    let store = store();

    assert!(store.lints().contains(&Lint::InconsistentTagSpelling {
        variants: vec!["MySQL".to_string(), "MysQL".to_string()],
    }));
    assert!(store.lints().contains(&Lint::InconsistentTagSpelling {
        variants: vec!["helm".to_string(), "Helm".to_string()],
    }));

    // Original spelling is preserved
    assert_eq!(store.get_skills().get("Databases").unwrap()[0], "MysQL");
}

#[test]
fn test_reload_is_byte_identical() {
    let first = store().to_json(true).unwrap();
    let second = store().to_json(true).unwrap();

    assert_eq!(first, second);
    assert_eq!(store().fingerprint().unwrap(), store().fingerprint().unwrap());
    assert_eq!(store(), store());
}

#[test]
fn test_store_is_loaded_once_and_shared() {
    static CELL: StoreCell = StoreCell::new();
    let config = ResolvedConfig::default();

    let a = load_once(&CELL, &config).unwrap();
    let b = load_once(&CELL, &config).unwrap();

    assert!(std::ptr::eq(a, b));
    assert_eq!(a.get_introduction().name, "Miguel Sánchez Deleyto");
}
