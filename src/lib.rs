//! timetrack library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::ReportOptions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::ui::messages::error;
use crate::utils::date;
use clap::{CommandFactory, Parser};

/// Central dispatcher: record first, then print, then commit.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.print_config {
        cli::commands::config::handle(cfg)?;
    }

    if !cli.needs_database() {
        return Ok(());
    }

    let opts = ReportOptions::from_config(cfg)?;

    let reference = match &cli.datetime {
        Some(arg) => match date::parse_datetime_arg(arg, date::today()) {
            Ok(dt) => dt,
            Err(e) => {
                // a bad --datetime aborts the run without touching the store
                error(e);
                return Ok(());
            }
        },
        None => date::now(),
    };

    let pool = DbPool::new(&cfg.database_file()?)?;

    let record_kind = if cli.wakeup {
        Some(EventKind::Wakeup)
    } else if cli.sleep {
        Some(EventKind::Sleep)
    } else {
        None
    };

    if let Some(kind) = record_kind {
        cli::commands::record::handle(&pool.conn, kind, reference, cli.force, &opts, cfg)?;
    }

    if cli.print_stats {
        cli::commands::stats::handle(&pool.conn, reference, &opts, cfg)?;
    }

    if cli.log {
        cli::commands::log::handle(&pool.conn)?;
    }

    pool.close()
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ nothing to do → usage
    if !cli.has_action() {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    // 3️⃣ load config once, then apply the command line override
    let mut cfg = Config::load()?;
    if let Some(location) = &cli.database {
        cfg.database = location.clone();
    }

    dispatch(&cli, &cfg)
}
