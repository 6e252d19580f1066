#![allow(clippy::print_stdout, clippy::print_stderr)]

mod args;
mod commands;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use slugeq::SlugEq;
use slugeq::domain::config::{LogConfig, SlugEqConfig};
use slugeq::kernel::config::load_config;
use slugeq::registry::StaticCatalog;
use slugeq_logger::{Logger, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: SlugEqConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = init_logging(&cfg.log)?;
    tracing::debug!(command = ?cli.command, "Dispatching command");

    let slugeq = SlugEq::init(&cfg, &StaticCatalog::new())?;

    match cli.command {
        Command::Get { id } => commands::get(&slugeq, id)?,
        Command::Set { id, enabled } => commands::set(&slugeq, id, enabled)?,
        Command::List { json } => commands::list(&slugeq, json)?,
        Command::Check { class_id, handle, id } => commands::check(&slugeq, &class_id, &handle, id),
    }

    Ok(())
}

/// Console and file output as configured; `None` when both are off.
fn init_logging(cfg: &LogConfig) -> Result<Option<Logger>> {
    if !cfg.console && cfg.path.is_none() {
        return Ok(None);
    }

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(cfg.console)
        .stderr(true)
        .level(parse_level(&cfg.level)?);

    let logger = match &cfg.path {
        Some(path) => builder.path(path).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(Some(logger))
}
