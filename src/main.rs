//! CLI entry point for treedoc

use std::fs::{self, File};
use std::io::{BufWriter, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{ColorChoice, NoColor, StandardStream};
use tracing::{debug, info};
use treedoc::{
    BuildConfig, DEFAULT_IGNORE_FILE, OutputConfig, OutputFormat, PatternList, TreeBuilder,
    TreedocError, exit_code, load_ignore_patterns, write_output,
};

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
            // https://no-color.org/
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

/// Diagnostic verbosity on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
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
#[command(name = "treedoc")]
#[command(about = "Render a directory tree and the contents of its files as one document")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Ignore file with glob patterns, relative to the scanned directory
    #[arg(long = "ignore", value_name = "PATH", default_value = DEFAULT_IGNORE_FILE)]
    ignore: PathBuf,

    /// Write to this file instead of stdout. A `.md` file also gets file contents
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Also list this file in the tree without its contents (can be used multiple times)
    #[arg(long = "skip-content", value_name = "GLOB")]
    skip_content: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Diagnostic verbosity on stderr
    #[arg(short = 'l', long = "log-level", value_enum, default_value = "warn")]
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

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    if let Err(e) = run(&args) {
        eprintln!("treedoc: {}", e);
        process::exit(exit_code(&e));
    }
}

fn run(args: &Args) -> Result<(), TreedocError> {
    let root = std::path::absolute(&args.path)?;
    if !root.try_exists()? {
        return Err(TreedocError::RootNotFound(args.path.clone()));
    }

    let ignore_path = root.join(&args.ignore);
    let ignore_patterns = load_ignore_patterns(&ignore_path);

    let mut skip_content = PatternList::default_skip_content();
    skip_content.extend(args.skip_content.iter().cloned());

    let mut config = BuildConfig::default()
        .with_ignore_patterns(ignore_patterns)
        .with_skip_content_patterns(skip_content);
    if let Some(excluded) = args.output.as_deref().and_then(resolve_output_path) {
        debug!("excluding {} from the scan", excluded.display());
        config = config.with_exclude_path(excluded);
    }

    let build = TreeBuilder::new(config).build(&root)?;
    if let Some(node) = &build.root {
        info!(
            "{} directories, {} files, {} with contents",
            node.dir_count(),
            node.file_count(),
            build.content_files.len()
        );
    }

    let format = OutputFormat::for_destination(args.output.as_deref(), args.json);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| TreedocError::Output {
                path: path.clone(),
                source,
            })?;
            let config = OutputConfig {
                format,
                use_color: false,
            };
            let mut out = NoColor::new(BufWriter::new(file));
            write_output(&root, &build, &config, &mut out).map_err(|e| match e {
                TreedocError::Io(source) => TreedocError::Output {
                    path: path.clone(),
                    source,
                },
                other => other,
            })
        }
        None => {
            let use_color = should_use_color(args.color);
            let choice = if use_color {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            };
            let config = OutputConfig { format, use_color };
            let stdout = StandardStream::stdout(choice);
            let mut out = stdout.lock();
            write_output(&root, &build, &config, &mut out)
        }
    }
}

/// Canonical location of the output file, so the walk can skip it.
///
/// The file may not exist yet, in which case its parent is canonicalized.
fn resolve_output_path(path: &Path) -> Option<PathBuf> {
    if let Ok(canonical) = fs::canonicalize(path) {
        return Some(canonical);
    }
    let absolute = std::path::absolute(path).ok()?;
    let parent = fs::canonicalize(absolute.parent()?).ok()?;
    Some(parent.join(absolute.file_name()?))
}
