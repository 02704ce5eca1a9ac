// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use bibscan::app_config::{self, Config};
use bibscan::app_controller::{Controller, RunOptions};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a CSV listing of articles or books (default command)
    Analyze(AnalyzeArgs),

    /// Generate shell completions for bibscan
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Clone)]
struct AnalyzeArgs {
    /// CSV file to analyze
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Translate English titles after the analysis
    #[arg(long)]
    translate: bool,

    /// Export the full listing to this CSV file
    #[arg(long, value_name = "PATH")]
    export_all: Option<PathBuf>,

    /// Export the duplicate records to this CSV file
    #[arg(long, value_name = "PATH")]
    export_duplicates: Option<PathBuf>,

    /// Field delimiter of the input file
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Source language code of titles to translate (e.g., 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code of the dataset (e.g., 'pt')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// bibscan - academic listing analyzer
///
/// Finds duplicate records in CSV listings of articles and books and can
/// translate English titles into the dataset's language.
#[derive(Parser, Debug)]
#[command(name = "bibscan")]
#[command(version)]
#[command(about = "Duplicate detection and title translation for academic listings")]
#[command(long_about = "bibscan checks CSV listings of articles and books for duplicate records.

EXAMPLES:
    bibscan papers.csv                               # Analyze using default config
    bibscan analyze papers.csv --translate           # Also translate English titles
    bibscan papers.csv --export-duplicates dups.csv  # Export duplicate records
    bibscan -d ';' papers.csv                        # Semicolon-separated input
    bibscan completions bash > bibscan.bash          # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// CSV file to analyze
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Translate English titles after the analysis
    #[arg(long)]
    translate: bool,

    /// Export the full listing to this CSV file
    #[arg(long, value_name = "PATH")]
    export_all: Option<PathBuf>,

    /// Export the duplicate records to this CSV file
    #[arg(long, value_name = "PATH")]
    export_duplicates: Option<PathBuf>,

    /// Field delimiter of the input file
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Source language code of titles to translate (e.g., 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code of the dataset (e.g., 'pt')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger; filtering follows `log::max_level()` so the level
// can change after the config is loaded
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (color, tag) = Self::style_for_level(record.level());
            let _ = writeln!(std::io::stderr(), "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config or the command line says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "bibscan", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Analyze(args)) => run_analyze(args).await,
        None => {
            // Bare `bibscan FILE` uses the top-level arguments
            let input_file = cli.input_file.ok_or_else(|| {
                anyhow!("INPUT_FILE is required when no subcommand is specified")
            })?;

            let args = AnalyzeArgs {
                input_file,
                translate: cli.translate,
                export_all: cli.export_all,
                export_duplicates: cli.export_duplicates,
                delimiter: cli.delimiter,
                source_language: cli.source_language,
                target_language: cli.target_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_analyze(args).await
        }
    }
}

async fn run_analyze(options: AnalyzeArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = load_or_create_config(&options.config_path)?;

    if options.translate {
        config.translation.enabled = true;
    }
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    if !options.delimiter.is_ascii() {
        return Err(anyhow!("Delimiter must be a single ASCII character, got '{}'", options.delimiter));
    }

    let run_options = RunOptions {
        translate: config.translation.enabled,
        export_all: options.export_all.clone(),
        export_duplicates: options.export_duplicates.clone(),
        delimiter: options.delimiter as u8,
    };

    let controller = Controller::with_config(config)?;
    controller.run(options.input_file, run_options).await
}

/// Load the configuration, writing a default file when none exists
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        return Ok(config);
    }

    warn!("Config file not found at '{}', creating default config.", config_path);
    let config = Config::default();

    let config_json = serde_json::to_string_pretty(&config)
        .context("Failed to serialize default config to JSON")?;

    std::fs::write(config_path, config_json)
        .context(format!("Failed to write default config to file: {}", config_path))?;

    Ok(config)
}
