use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::catalog::domain::Dimension;

/// The `--history` value that picks the newest snapshot.
pub const LATEST_SNAPSHOT: &str = "latest";

/// Explore a JSON catalogue of JVM project dependencies with cross-filters
#[derive(Parser, Debug)]
#[command(name = "dep-catalog")]
#[command(version)]
#[command(about = "Explore a JSON catalogue of JVM project dependencies with cross-filters", long_about = None)]
pub struct Args {
    /// Catalogue document: a file path or an http(s) URL
    #[arg(short, long, conflicts_with = "history")]
    pub source: Option<String>,

    /// Load a history snapshot by label ("2024-03-12 18:05:01") or "latest"
    #[arg(long, value_name = "LABEL")]
    pub history: Option<String>,

    /// List the available history snapshots and exit
    #[arg(long)]
    pub list_history: bool,

    /// Filter by Java version
    #[arg(long)]
    pub java: Option<String>,

    /// Filter by Kotlin version ("None" for projects without Kotlin)
    #[arg(long)]
    pub kotlin: Option<String>,

    /// Filter by Gradle version
    #[arg(long)]
    pub gradle: Option<String>,

    /// Filter by Spring Boot version ("None" for projects without Spring Boot)
    #[arg(long)]
    pub spring: Option<String>,

    /// Case-insensitive search over dependency name, group, version and projects
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Output format: json, markdown, gradle or maven
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the dropdown state to stderr after the filters settle
    #[arg(long)]
    pub show_filters: bool,

    /// Path to a config file (defaults to ./dep-catalog.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Filter flags in dimension order, skipping the ones not given.
    pub fn filters(&self) -> Vec<(Dimension, String)> {
        Dimension::ALL
            .into_iter()
            .filter_map(|dimension| {
                let value = match dimension {
                    Dimension::Java => self.java.as_ref(),
                    Dimension::Kotlin => self.kotlin.as_ref(),
                    Dimension::Gradle => self.gradle.as_ref(),
                    Dimension::SpringBoot => self.spring.as_ref(),
                }?;
                Some((dimension, value.clone()))
            })
            .collect()
    }
}
