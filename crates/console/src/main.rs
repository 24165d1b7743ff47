//! `orderdesk` console entry point.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use orderdesk_console::{Console, ConsoleCommand, ConsoleConfig, Response};

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env().context("failed to load configuration")?;
    orderdesk_observability::init_with(config.log_format);

    tracing::info!(
        seed_demo = config.seed_demo,
        max_distance = config.max_distance,
        assign_max_distance = config.assign_max_distance,
        "starting orderdesk console"
    );

    let mut console = Console::from_config(&config);
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    write!(out, "{}", console.welcome().render())?;
    prompt(&mut out)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;

        match ConsoleCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                let response = console.execute(command);
                write!(out, "{}", response.render())?;
                if response.exit {
                    break;
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "unparseable console line");
                write!(out, "{}", Response::parse_error(&err).render())?;
            }
        }

        prompt(&mut out)?;
    }

    tracing::info!(total = console.desk().stats().total, "orderdesk console closed");
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
