//! CLI entry point for dirmap

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirmap::{
    JSON_OUTPUT_FILE, MapResult, TEXT_OUTPUT_FILE, TreeWalker, WalkerConfig, write_outputs,
};
use tracing::debug;

/// Diagnostic verbosity on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    /// No diagnostics at all
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(about = "Write a directory's tree as directory_tree.txt and directory_tree.json")]
#[command(version)]
struct Args {
    /// Directory to map
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Directory the two output files are written to
    #[arg(short = 'o', long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Sort entries by name instead of keeping filesystem order
    #[arg(long = "sort")]
    sort: bool,

    /// Diagnostic log level
    #[arg(long = "log-level", short = 'l', value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn run(args: &Args) -> MapResult<()> {
    let mut config = WalkerConfig::default();
    if args.sort {
        config = config.sorted();
    }

    let tree = TreeWalker::new(config).walk(&args.path)?;
    write_outputs(&tree, &args.out_dir)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("parsed arguments: {:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("dirmap: {}", e);
        process::exit(1);
    }

    println!(
        "Directory mapping completed. Check '{}' and '{}'",
        TEXT_OUTPUT_FILE, JSON_OUTPUT_FILE
    );
}
