use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use facet::Facet;
use facet_args as args;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use pare::cli::{self, RunOptions};

const DEFAULT_LOG_FILTER: &str = "pare=info,pare_minify=info";

/// Minify HTML files along with their inline CSS and JavaScript
#[derive(Facet, Debug)]
struct Args {
    /// HTML files to minify
    #[facet(args::positional, default)]
    inputs: Vec<String>,

    /// Output path (only with a single input)
    #[facet(args::named, args::short = 'o', default)]
    output: Option<String>,

    /// Config file to use instead of discovering `.config/pare.yaml`
    #[facet(args::named, args::short = 'c', default)]
    config: Option<String>,

    /// Don't print the per-file report
    #[facet(args::named, args::short = 'q')]
    quiet: bool,

    /// Minify and report without writing anything
    #[facet(args::named)]
    dry_run: bool,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();

    facet_args::from_slice(&args_refs).map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        "Failed to parse arguments".to_string()
    })
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok();

    init_tracing();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let opts = RunOptions {
        inputs: args.inputs.into_iter().map(Utf8PathBuf::from).collect(),
        output: args.output.map(Utf8PathBuf::from),
        config: args.config.map(Utf8PathBuf::from),
        quiet: args.quiet,
        dry_run: args.dry_run,
        color: io::stdout().is_terminal(),
    };

    let result = cli::run(&opts, &mut io::stdout().lock(), &mut io::stderr().lock());
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}: {:?}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
