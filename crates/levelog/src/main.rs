use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use levelog_core::{FilteringLogger, Flags, LevelResult, Severity, FATAL_EXIT_CODE};
use levelog_utils::{debug, init_logging, trace};

/// Exit status for usage and configuration errors
const USAGE_EXIT_CODE: i32 = 2;

/// Leveled logging for shell scripts, filtered by LOG_LEVEL.
#[derive(Parser, Debug)]
#[command(name = "levelog")]
#[command(version)]
#[command(about = "Leveled logging for shell scripts, filtered by LOG_LEVEL", long_about = None)]
struct Cli
{
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct OutputArgs
{
    /// Threshold name, overriding LOG_LEVEL (unknown names mean ERROR)
    #[arg(long, global = true, conflicts_with = "threshold_value")]
    threshold: Option<String>,

    /// Threshold as a raw value 0-6, overriding LOG_LEVEL
    #[arg(long, global = true)]
    threshold_value: Option<u8>,

    /// Text written at the start of every line
    #[arg(long, global = true, default_value = "")]
    prefix: String,

    /// Omit the date and time header
    #[arg(long, global = true, default_value_t = false)]
    no_timestamp: bool,

    /// Use UTC timestamps
    #[arg(long, global = true, default_value_t = false)]
    utc: bool,

    /// Add microseconds to timestamps
    #[arg(long, global = true, default_value_t = false)]
    micros: bool,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Write a message at the given level if the threshold permits it
    Emit
    {
        /// Level of the message
        #[arg(value_enum, ignore_case = true)]
        level: Level,
        /// Message text; multiple words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Exit 0 if a message at the given level would be written, 1 otherwise
    Enabled
    {
        /// Level to check
        #[arg(value_enum, ignore_case = true)]
        level: Level,
    },
    /// List the levels and mark the active threshold
    Levels,
    /// Write a message regardless of the threshold and exit 1
    Fatal
    {
        /// Message text; multiple words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
}

/// Levels a message can be written at
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Level
{
    #[value(alias = "notice")]
    Mandatory,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<Level> for Severity
{
    fn from(level: Level) -> Self
    {
        match level {
            Level::Mandatory => Severity::Mandatory,
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warn,
            Level::Info => Severity::Info,
            Level::Debug => Severity::Debug,
            Level::Trace => Severity::Trace,
        }
    }
}

fn main()
{
    // Tool diagnostics only; silent unless RUST_LOG asks for them
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();

    match run_command(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(USAGE_EXIT_CODE);
        }
    }
}

fn build_logger(args: &OutputArgs) -> LevelResult<FilteringLogger>
{
    let mut flags = Flags::empty();
    if !args.no_timestamp {
        flags |= Flags::STD;
        if args.utc {
            flags |= Flags::UTC;
        }
        if args.micros {
            flags |= Flags::MICROSECONDS;
        }
    }

    // Seeded from LOG_LEVEL; explicit options win.
    let logger = FilteringLogger::stderr(args.prefix.as_str(), flags);
    if let Some(name) = &args.threshold {
        logger.set_threshold_by_name(name);
    }
    if let Some(raw) = args.threshold_value {
        logger.set_threshold(raw)?;
    }

    debug!(threshold = %logger.current_threshold(), ?flags, "built logger");
    Ok(logger)
}

fn run_command(cli: Cli) -> LevelResult<i32>
{
    let logger = build_logger(&cli.output)?;

    match cli.command {
        Commands::Emit { level, message } => {
            let text = message.join(" ");
            trace!(?level, enabled = logger.is_enabled(level.into()), "emit");
            match level {
                Level::Mandatory => logger.mandatory(&text),
                Level::Error => logger.error_fmt(format_args!("{text}")),
                Level::Warn => logger.warn(&text),
                Level::Info => logger.info(&text),
                Level::Debug => logger.debug(&text),
                Level::Trace => logger.trace(&text),
            }
            Ok(0)
        }
        Commands::Enabled { level } => {
            let enabled = logger.is_enabled(level.into());
            Ok(if enabled { 0 } else { 1 })
        }
        Commands::Levels => {
            let threshold = logger.current_threshold();
            for severity in Severity::ALL {
                let marker = if severity == threshold { "  <- threshold" } else { "" };
                println!("{} {}{}", severity.as_u8(), severity, marker);
            }
            Ok(0)
        }
        Commands::Fatal { message } => {
            logger.print(message.join(" "));
            Ok(FATAL_EXIT_CODE)
        }
    }
}
