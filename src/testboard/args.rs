use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "testboard", version)]
#[command(about = "Filter, sort and page test-automation dashboard lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the list snapshots (<collection>.json)
    #[arg(long, global = true, env = "TESTBOARD_DATA")]
    pub data: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Executions,
    Results,
    Users,
    Secteurs,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatsEntity {
    Executions,
    Results,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of a list
    #[command(alias = "ls")]
    List {
        entity: Entity,

        /// Filter field, as field=value (repeatable)
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,

        /// Click a sort header (repeat a key to flip its direction)
        #[arg(short, long = "sort")]
        sorts: Vec<String>,

        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Rows per page (overrides the configured page size)
        #[arg(long)]
        per_page: Option<usize>,
    },

    /// Show summary figures of a run list
    Stats { entity: StatsEntity },

    /// List the values a filter field can take
    Options { entity: Entity, field: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., page-size.users)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected field=value, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_filters_and_sorts() {
        let cli = Cli::try_parse_from([
            "testboard",
            "list",
            "executions",
            "-f",
            "statut=error",
            "--filter",
            "date_debut=2024-01-01",
            "-s",
            "duration",
            "-s",
            "duration",
            "--page",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::List {
                entity,
                filters,
                sorts,
                page,
                per_page,
            } => {
                assert_eq!(entity, Entity::Executions);
                assert_eq!(
                    filters,
                    vec![
                        ("statut".to_string(), "error".to_string()),
                        ("date_debut".to_string(), "2024-01-01".to_string())
                    ]
                );
                assert_eq!(sorts, vec!["duration", "duration"]);
                assert_eq!(page, Some(2));
                assert_eq!(per_page, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn filter_values_may_be_empty_or_contain_equals() {
        assert_eq!(parse_filter("nom="), Ok(("nom".into(), String::new())));
        assert_eq!(parse_filter("nom=a=b"), Ok(("nom".into(), "a=b".into())));
        assert!(parse_filter("statut").is_err());
        assert!(parse_filter("=error").is_err());
    }

    #[test]
    fn stats_only_accepts_run_lists() {
        assert!(Cli::try_parse_from(["testboard", "stats", "users"]).is_err());
        assert!(Cli::try_parse_from(["testboard", "stats", "results"]).is_ok());
    }
}
