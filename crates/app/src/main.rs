use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionSet;
use services::{Clock, load_question_set};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const WINDOW_TITLE: &str = "Self-Education Test";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionsPath { raw: String },
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionsPath { raw } => {
                write!(f, "invalid --questions value: {raw:?}")
            }
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log value: {raw}"),
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
    questions: Arc<QuestionSet>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn question_set(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

#[derive(Debug, Default)]
struct Args {
    questions: Option<PathBuf>,
    log_filter: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path>] [--log <filter>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --questions <path>  JSON question pack (default: bundled questions)");
    eprintln!("  --log <filter>      tracing filter, e.g. debug or services=trace (default: info)");
    eprintln!("  -h, --help          print this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, RUST_LOG");
}

enum Parsed {
    Run(Args),
    Help,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Parsed, ArgsError> {
        let mut parsed = Self {
            questions: std::env::var_os("QUIZ_QUESTIONS")
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            log_filter: None,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(&mut args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidQuestionsPath { raw: value });
                    }
                    parsed.questions = Some(PathBuf::from(value));
                }
                "--log" => {
                    let value = require_value(&mut args, "--log")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidLogFilter { raw: value });
                    }
                    parsed.log_filter = Some(value);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(parsed))
    }
}

fn init_tracing(filter: Option<&str>) -> Result<(), ArgsError> {
    let filter = match filter {
        Some(raw) => EnvFilter::try_new(raw).map_err(|_| ArgsError::InvalidLogFilter {
            raw: raw.to_string(),
        })?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing(args.log_filter.as_deref())?;

    // Malformed tables stop the launch before any window is created.
    let questions = Arc::new(load_question_set(args.questions.as_deref())?);
    tracing::info!(questions = questions.len(), "question set ready");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questions,
        clock: Clock::system(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
