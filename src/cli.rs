// src/cli.rs
// The crawl has no knobs: hub URL and pause are fixed. Only `--help` is accepted.
use std::io;

use color_eyre::eyre::{Result, WrapErr, bail};

use crate::config::options::RunOptions;
use crate::core::HttpFetcher;
use crate::progress::LogProgress;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run,
    Help,
}

pub fn run() -> Result<()> {
    if parse_args(std::env::args().skip(1))? == Command::Help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }

    let opts = RunOptions::default();
    let fetch = HttpFetcher::new().wrap_err("Could not build the HTTP client")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut progress = LogProgress::default();

    let summary = crate::runner::run(&fetch, &opts, &mut out, Some(&mut progress))?;
    logf!("{summary:?}");
    Ok(())
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command> {
    let mut command = Command::Run;
    for a in args {
        match a.as_str() {
            "-h" | "--help" => command = Command::Help,
            _ => bail!("Unknown arg: {a} (club_facts takes no options)"),
        }
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_runs_the_fixed_crawl() {
        assert_eq!(parse(&[]).unwrap(), Command::Run);
    }

    #[test]
    fn help_is_the_only_flag() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn crawl_settings_cannot_be_overridden() {
        assert!(parse(&["--pause-ms", "0"]).is_err());
        assert!(parse(&["--hub", "https://example.org/list"]).is_err());
        assert!(parse(&["--limit", "3"]).is_err());
    }
}
