use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use fraction_core::Fraction;
use services::TraceReport;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    InvalidFraction { raw: String },
    MissingTerms,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::InvalidFraction { raw } => {
                write!(f, "invalid --fraction value: {raw} (expected <n>/<d>)")
            }
            ArgsError::MissingTerms => write!(f, "trace requires <numerator> <denominator>"),
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
    random_seed: Option<u64>,
    initial_fraction: Option<(String, String)>,
}

impl UiApp for DesktopApp {
    fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    fn initial_fraction(&self) -> Option<(String, String)> {
        self.initial_fraction.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--seed <u64>] [--fraction <n>/<d>]");
    eprintln!("  cargo run -p app -- trace <numerator> <denominator> [--json]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FRACTION_SEED, FRACTION_INITIAL (as <n>/<d>), RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Trace,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct UiArgs {
    seed: Option<u64>,
    initial_fraction: Option<(String, String)>,
}

#[derive(Debug, PartialEq, Eq)]
struct TraceArgs {
    numerator: String,
    denominator: String,
    json: bool,
}

impl UiArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut seed = match std::env::var("FRACTION_SEED") {
            Ok(raw) => Some(parse_seed(raw)?),
            Err(_) => None,
        };
        let mut initial_fraction = match std::env::var("FRACTION_INITIAL") {
            Ok(raw) => Some(split_fraction(raw)?),
            Err(_) => None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    seed = Some(parse_seed(require_value(args, "--seed")?)?);
                }
                "--fraction" => {
                    initial_fraction = Some(split_fraction(require_value(args, "--fraction")?)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            seed,
            initial_fraction,
        })
    }
}

impl TraceArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut terms = Vec::new();
        let mut json = false;

        for arg in args {
            match arg.as_str() {
                "--json" => json = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                // Leading '-' is allowed so negative terms reach validation.
                _ if terms.len() < 2 && !arg.starts_with("--") => terms.push(arg),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let mut terms = terms.into_iter();
        match (terms.next(), terms.next()) {
            (Some(numerator), Some(denominator)) => Ok(Self {
                numerator,
                denominator,
                json,
            }),
            _ => Err(ArgsError::MissingTerms),
        }
    }
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

fn split_fraction(raw: String) -> Result<(String, String), ArgsError> {
    match raw.split_once('/') {
        Some((numerator, denominator)) => {
            Ok((numerator.trim().to_string(), denominator.trim().to_string()))
        }
        None => Err(ArgsError::InvalidFraction { raw }),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
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
    let report_args_error = |e: ArgsError| {
        eprintln!("{e}");
        print_usage();
        e
    };

    match cmd {
        Command::Ui => {
            let parsed = UiArgs::parse(&mut iter).map_err(report_args_error)?;
            tracing::info!(
                seed = ?parsed.seed,
                initial = ?parsed.initial_fraction,
                "launching desktop ui"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                random_seed: parsed.seed,
                initial_fraction: parsed.initial_fraction,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Fraction Simplifier")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Trace => {
            let parsed = TraceArgs::parse(&mut iter).map_err(report_args_error)?;
            let fraction = Fraction::parse(&parsed.numerator, &parsed.denominator)?;
            let report = TraceReport::new(fraction);
            tracing::debug!(fraction = %fraction, gcd = report.gcd, "traced");
            if parsed.json {
                println!("{}", report.to_json()?);
            } else {
                println!("{report}");
            }
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
