//! Command-line interface for the portfolio content store.
//!
//! Provides commands for printing each collection, searching, validating
//! the content and exporting it as JSON for the site generator.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{self, ResolvedConfig};
use crate::core::{self, write_export, ContentError, ContentStore};
use crate::domain::Experience;

/// portfolio - Validated content store for a personal portfolio site
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load content from this directory instead of the bundled content
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the introduction and social links
    Intro,

    /// List employment history
    Experience {
        /// Oldest position first (default is most recent first)
        #[arg(long)]
        oldest_first: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List projects
    Projects {
        /// Only projects using this technology
        #[arg(short, long)]
        technology: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List skills by category
    Skills {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search all collections
    Search {
        /// Search query
        query: String,
    },

    /// List every technology tag with its usage count
    Technologies,

    /// Validate content and report lints
    Validate,

    /// Export all content as one JSON document
    Export {
        /// Output file (stdout if not provided)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compact JSON (overrides the configured format)
        #[arg(long)]
        compact: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let mut config = config::config()?.clone();
        if let Some(dir) = self.content_dir {
            config = config.with_content_dir(dir);
        }

        let load = || core::load(&config).context("Failed to load portfolio content");

        match self.command {
            Commands::Intro => show_intro(&load()?),
            Commands::Experience { oldest_first, json } => {
                let store = load()?;
                let records: Vec<&Experience> = if oldest_first {
                    store.experience_oldest_first()
                } else {
                    store.list_experience().iter().collect()
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(&records)?);
                } else {
                    show_experience(&records);
                }
            }
            Commands::Projects { technology, json } => {
                let store = load()?;
                let projects = match technology.as_deref() {
                    Some(tag) => store.projects_using(tag),
                    None => store.list_projects().iter().collect(),
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(&projects)?);
                } else {
                    show_projects(&projects);
                }
            }
            Commands::Skills { json } => {
                let store = load()?;
                if json {
                    println!("{}", serde_json::to_string_pretty(store.get_skills())?);
                } else {
                    for category in store.get_skills().categories() {
                        println!("{}: {}", category.name, category.skills.join(", "));
                    }
                }
            }
            Commands::Search { query } => {
                let store = load()?;
                let hits = store.search(&query);
                if hits.is_empty() {
                    println!("No results for '{}'", query);
                } else {
                    for hit in &hits {
                        println!("{}", hit);
                    }
                    println!("\nFound {} results", hits.len());
                }
            }
            Commands::Technologies => {
                let store = load()?;
                println!("{:<30} {:>5}", "TECHNOLOGY", "USES");
                println!("{}", "-".repeat(36));
                for (tag, count) in store.technologies() {
                    println!("{:<30} {:>5}", tag, count);
                }
            }
            Commands::Validate => validate(&config)?,
            Commands::Export { output, compact } => {
                let store = load()?;
                let pretty = config.pretty_export && !compact;
                match output {
                    Some(path) => {
                        write_export(&store, &path, pretty).await?;
                        eprintln!("Exported content to {}", path.display());
                    }
                    None => println!("{}", store.to_json(pretty)?),
                }
            }
            Commands::Config => show_config(&config),
        }

        Ok(())
    }
}

fn show_intro(store: &ContentStore) {
    let intro = store.get_introduction();

    println!("{}", intro.name);
    println!();
    println!("{}", intro.description);
    if !intro.social.is_empty() {
        println!();
        for (platform, url) in &intro.social {
            println!("  {:<10} {}", platform, url);
        }
    }
}

fn show_experience(records: &[&Experience]) {
    for exp in records {
        println!("{} - {} [{}]", exp.role, exp.company, exp.status);
        println!("  {} | {}", exp.period, exp.location);
        println!("  {}", exp.description);
        for achievement in &exp.achievements {
            println!("  * {}", achievement);
        }
        if !exp.technologies.is_empty() {
            println!("  Tech: {}", exp.technologies.join(", "));
        }
        println!();
    }
}

fn show_projects(projects: &[&crate::domain::Project]) {
    if projects.is_empty() {
        println!("No projects found");
        return;
    }

    for project in projects {
        println!("{}", project.title);
        println!("  {}", project.description);
        if !project.technologies.is_empty() {
            println!("  Tech:   {}", project.technologies.join(", "));
        }
        if let Some(link) = &project.link {
            println!("  Link:   {}", link);
        }
        if let Some(github) = &project.github {
            println!("  GitHub: {}", github);
        }
        println!();
    }
}

/// Validate content, print the outcome, exit non-zero on failure
fn validate(config: &ResolvedConfig) -> Result<()> {
    let source = config
        .content_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(bundled)".to_string());
    println!("Content: {}", source);

    match core::load(config) {
        Ok(store) => {
            if store.lints().is_empty() {
                println!("No lints");
            } else {
                println!("Lints ({}):", store.lints().len());
                for finding in store.lints() {
                    println!("  - {}", finding);
                }
            }
            println!(
                "OK: {} experience, {} projects, {} skill categories",
                store.list_experience().len(),
                store.list_projects().len(),
                store.get_skills().len()
            );
            println!("Fingerprint: {}", store.fingerprint()?);
            Ok(())
        }
        Err(e @ (ContentError::Invalid(_) | ContentError::Lint(_) | ContentError::Parse { .. })) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Failed to load portfolio content"),
    }
}

fn show_config(cfg: &ResolvedConfig) {
    println!("Portfolio Configuration");
    println!();
    println!(
        "Config file:   {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!(
        "Content:       {}",
        cfg.content_dir
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(bundled)".to_string())
    );
    println!("Strict lints:  {}", cfg.strict_lints);
    println!("Pretty export: {}", cfg.pretty_export);
}
