//! CLI entry point for jls

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use jls::{
    KindFilter, ListingConfig, ListingError, ListingFormatter, OutputConfig, init_logging, list,
    load_tree, print_error, tree::input_path,
};
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "jls")]
#[command(about = "List the contents of a filesystem tree described in JSON")]
#[command(version)]
struct Args {
    /// Path inside the tree to list
    #[arg(default_value = ".")]
    path: String,

    /// Do not ignore entries starting with .
    #[arg(short = 'A', long = "all")]
    all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// Reverse the order of the results
    #[arg(short = 'r')]
    reverse: bool,

    /// Sort by time_modified
    #[arg(short = 't')]
    sort_by_time: bool,

    /// Filter the output based on file or directory
    #[arg(long = "filter", value_name = "KIND")]
    filter: Option<KindFilter>,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Tree description to read (default: Structure.json)
    #[arg(long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<(), ListingError> {
    let input = input_path(args.input.clone());
    let tree = load_tree(&input)?;

    let listing_config = ListingConfig {
        show_all: args.all,
        kind_filter: args.filter,
        ignore_patterns: args.ignore.clone(),
        sort_by_time: args.sort_by_time,
        reverse: args.reverse,
    };
    let output_config = OutputConfig {
        long_format: args.long,
        use_color: should_use_color(args.color),
    };

    let entries = list(&tree, &args.path, &listing_config)?;
    debug!(count = entries.len(), "printing entries");
    ListingFormatter::new(output_config).print(&entries)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        match &err {
            ListingError::PathNotFound { .. } => {
                if let Err(e) = print_error(&err) {
                    eprintln!("jls: error writing output: {}", e);
                }
            }
            _ => eprintln!("jls: {}", err),
        }
        process::exit(err.exit_code());
    }
}
