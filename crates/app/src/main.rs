use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizConfig;
use quiz_core::time::{DEFAULT_TIME_LIMIT_SECS, format_countdown};
use services::AppServices;
use tokio::runtime::Handle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeLimit { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeLimit { raw } => {
                write!(f, "invalid --time-limit value: {raw} (expected whole seconds > 0)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    runtime: Handle,
}

impl UiApp for DesktopApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn runtime(&self) -> Handle {
        self.runtime.clone()
    }
}

struct Args {
    time_limit_secs: u32,
    log_level: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--time-limit <secs>] [--log-level <filter>]");
    eprintln!("  cargo run -p app -- check [--log-level <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --time-limit {DEFAULT_TIME_LIMIT_SECS}");
    eprintln!("  --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TIME_LIMIT_SECS, QUIZ_LOG (RUST_LOG takes precedence)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut time_limit_secs = std::env::var("QUIZ_TIME_LIMIT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIME_LIMIT_SECS);
        let mut log_level = std::env::var("QUIZ_LOG").unwrap_or_else(|_| "info".into());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--time-limit" => {
                    let value = require_value(args, "--time-limit")?;
                    time_limit_secs = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or(ArgsError::InvalidTimeLimit { raw: value })?;
                }
                "--log-level" => {
                    log_level = require_value(args, "--log-level")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            time_limit_secs,
            log_level,
        })
    }
}

fn init_logging(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(&parsed.log_level);

    let config = QuizConfig::with_time_limit(parsed.time_limit_secs)?;
    let services = AppServices::builtin(config)?;

    match cmd {
        Command::Ui => {
            tracing::info!(
                questions = services.bank().len(),
                time_limit = %format_countdown(config.time_limit_secs()),
                "launching quiz window"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services,
                runtime: Handle::current(),
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Тест по веб-разработке")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Check => {
            let bank = services.bank();
            for (idx, question) in bank.iter().enumerate() {
                println!(
                    "{:>2}. {} ({} options, answer: {})",
                    idx + 1,
                    question.text(),
                    question.option_count(),
                    question.options()[question.correct_index()],
                );
            }
            println!(
                "{} questions OK, time limit {}",
                bank.len(),
                format_countdown(config.time_limit_secs())
            );
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
