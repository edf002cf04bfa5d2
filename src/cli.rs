// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::{
    complete::complete,
    config::{consts::FINISHED, options::Options},
    core::{Fetch, HttpFetcher},
    output::{self, Format},
    progress::{ConsoleProgress, Progress},
    query::{self, QueryOutcome, QueryRequest},
    store::{CacheStore, FileStore},
};

#[derive(Parser, Debug)]
#[command(name = "csp_lookup", version)]
#[command(about = "Look up Windows edition support for MDM configuration service provider policies")]
pub struct Cli {
    /// Documentation base URL the CSP pages live under
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Where the CSP list is cached [default: <temp>/policiesFound.json]
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_file: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rebuild the CSP list, then show one CSP's support table
    Query(QueryArgs),
    /// Print cached CSP names matching PARTIAL (shell completion hook)
    Complete {
        #[arg(default_value = "")]
        partial: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// CSP page name, e.g. policy-csp-abovelock
    pub slug: Option<String>,

    /// Print every known CSP name instead
    #[arg(long)]
    pub display_all: bool,

    #[arg(long, value_enum, default_value = "table")]
    pub format: Format,
}

impl Cli {
    pub fn options(&self) -> Options {
        let mut o = Options::default();
        if let Some(url) = &self.base_url {
            o.set_base_url(url);
        }
        if let Some(path) = &self.cache_file {
            o.cache_path = path.clone();
        }
        if let Some(secs) = self.timeout {
            o.timeout = Duration::from_secs(secs);
        }
        o
    }
}

/// Operational failures are printed, not returned; only stdout errors bubble up.
pub fn run(cli: Cli) -> io::Result<()> {
    let options = cli.options();
    let mut store = FileStore::new(&options.cache_path);
    let stdout = io::stdout();
    let out = stdout.lock();

    match cli.command {
        Command::Query(args) => {
            let mut progress = ConsoleProgress;
            match HttpFetcher::new(options.timeout) {
                Ok(fetcher) => run_query(&args, &options, &fetcher, &mut store, out, &mut progress),
                Err(e) => {
                    progress.log(&e.to_string());
                    progress.finish(FINISHED);
                    Ok(())
                }
            }
        }
        Command::Complete { partial } => write_completions(out, &store, &partial),
    }
}

/// Query, print the outcome, then the closing status once the output is flushed.
pub fn run_query<W: Write>(
    args: &QueryArgs,
    options: &Options,
    fetcher: &dyn Fetch,
    store: &mut dyn CacheStore,
    mut out: W,
    progress: &mut dyn Progress,
) -> io::Result<()> {
    let request = QueryRequest { slug: args.slug.clone(), display_all: args.display_all };
    let written = match query::run(fetcher, store, options, &request, progress) {
        QueryOutcome::Rows(rows) => output::write_rows(&mut out, &rows, args.format),
        QueryOutcome::Slugs(slugs) => output::write_slugs(&mut out, &slugs, args.format),
        QueryOutcome::Failed(_) => Ok(()),
    }
    .and_then(|_| out.flush());

    progress.finish(FINISHED);
    written
}

pub fn write_completions<W: Write>(mut out: W, store: &dyn CacheStore, partial: &str) -> io::Result<()> {
    for s in complete(store, partial) {
        writeln!(out, "{}\t{}\t{}", s.label, s.value, s.hint)?;
    }
    out.flush()
}
