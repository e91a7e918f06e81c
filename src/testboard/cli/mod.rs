//! # CLI Layer
//!
//! One possible UI client for testboard. The only place that parses
//! arguments, writes to the terminal or picks an exit code.
//!
//! - `run()`: builds the context and dispatches
//! - `handle_*()`: call the API and format the result
//! - `print`: tables, stats, messages

mod print;

use crate::args::{Cli, Commands, Entity, StatsEntity};
use clap::Parser;
use directories::ProjectDirs;
use print::{print_config, print_listing, print_messages, print_options, print_stats, TableRow};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use testboard::api::{BoardApi, ConfigAction, ListRequest};
use testboard::config::TestboardConfig;
use testboard::error::{Result, TestboardError};
use testboard::model::{Execution, ExecutionResult, Secteur, User};
use testboard::store::fs::FileStore;
use testboard::view::Record;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: BoardApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::List {
            entity,
            filters,
            sorts,
            page,
            per_page,
        } => {
            let request = ListRequest {
                filters,
                sorts,
                page,
                per_page,
            };
            handle_list(&ctx, entity, &request)
        }
        Commands::Stats { entity } => handle_stats(&ctx, entity),
        Commands::Options { entity, field } => handle_options(&ctx, entity, &field),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = cli.data.clone().unwrap_or_else(|| PathBuf::from("."));
    let config_dir = config_dir()?;
    let config = TestboardConfig::load(&config_dir)?;
    tracing::debug!(
        data = %data_dir.display(),
        config = %config_dir.display(),
        "initialized context"
    );

    let api = BoardApi::new(FileStore::new(data_dir), config, config_dir);
    Ok(AppContext { api })
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("TESTBOARD_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "testboard", "testboard")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TestboardError::Config("Could not determine config dir".to_string()))
}

fn handle_list(ctx: &AppContext, entity: Entity, request: &ListRequest) -> Result<()> {
    match entity {
        Entity::Executions => list_as::<Execution>(ctx, request),
        Entity::Results => list_as::<ExecutionResult>(ctx, request),
        Entity::Users => list_as::<User>(ctx, request),
        Entity::Secteurs => list_as::<Secteur>(ctx, request),
    }
}

fn list_as<R>(ctx: &AppContext, request: &ListRequest) -> Result<()>
where
    R: Record + TableRow + DeserializeOwned + Clone,
{
    let listing = ctx.api.list::<R>(request)?;
    print_listing(&listing);
    print_messages(&listing.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext, entity: StatsEntity) -> Result<()> {
    let result = match entity {
        StatsEntity::Executions => ctx.api.execution_stats()?,
        StatsEntity::Results => ctx.api.result_stats()?,
    };
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_options(ctx: &AppContext, entity: Entity, field: &str) -> Result<()> {
    let result = match entity {
        Entity::Executions => ctx.api.options::<Execution>(field)?,
        Entity::Results => ctx.api.options::<ExecutionResult>(field)?,
        Entity::Users => ctx.api.options::<User>(field)?,
        Entity::Secteurs => ctx.api.options::<Secteur>(field)?,
    };
    print_options(&result.options);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
