//! Library side of the `cellout` command.
//!
//! [`run`] does all the work against injectable stdin and output so the
//! binary stays a thin shell around it.

pub mod cli;
pub mod input;

use std::io::Write;

use anyhow::{Context, Result};
use cellout::{empty_resultset, register_plugins, CellOutput, Dispatcher, RenderConfig};

use crate::cli::Cli;
use crate::input::StdinReader;

/// Builds a dispatcher from the configuration and plugin files named on the
/// command line.
pub fn build_dispatcher(cli: &Cli) -> Result<Dispatcher> {
    let config = match &cli.config {
        Some(path) => input::load_config(path)?,
        None => RenderConfig::default(),
    };
    let mut dispatcher = Dispatcher::new(config);
    for path in &cli.plugins {
        let defs = input::load_plugins(path)?;
        let count = register_plugins(&mut dispatcher, defs)
            .with_context(|| format!("failed to register plugins from {}", path.display()))?;
        log::debug!("{} plugin handler(s) from {}", count, path.display());
    }
    Ok(dispatcher)
}

/// Runs one invocation, writing HTML (or the handler list) to `out`.
pub fn run(cli: &Cli, stdin: &dyn StdinReader, out: &mut dyn Write) -> Result<()> {
    let dispatcher = build_dispatcher(cli)?;

    if cli.list_handlers {
        for name in dispatcher.registry().names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(());
    }

    let file = cli.file.as_deref();
    let source = input::read_source(file, stdin)?;
    let value = input::parse_value(&source, input::detect_format(cli.format, file))?;
    log::info!("rendering {} value", value.kind());

    let element = if cli.hidden {
        empty_resultset()
    } else if cli.in_container {
        dispatcher
            .render_value(&value, true)?
            .unwrap_or_else(empty_resultset)
    } else {
        CellOutput::shown(value).to_element(&dispatcher)?
    };
    writeln!(out, "{}", element)?;
    Ok(())
}
