//! randorg - get random numbers from random.org
//!
//! Subcommands map one-to-one onto the API's generation methods; flags map
//! one-to-one onto request parameters. Anything not supplied on the command
//! line falls back to the config file's per-method defaults, and from there
//! to the built-in defaults.
//!
//! # Usage
//!
//! ```bash
//! # five dice rolls
//! randorg --key <api-key> -n 5 integers --min 1 --max 6
//!
//! # two signed 10-character strings from lowercase + digits
//! randorg -S -n 2 strings -l 10 -c lower digits
//!
//! # remaining quota
//! randorg usage
//! ```
//!
//! # Configuration
//!
//! A TOML file given via `--config` or `$RANDORG_CONFIG`:
//!
//! ```toml
//! api_key = "00000000-0000-0000-0000-000000000000"
//! signed = true
//!
//! [defaults.integers]
//! min = 1
//! max = 6
//! ```
//!
//! # Exit codes
//!
//! 0 on success (including provider-reported errors, which are printed),
//! 2 when no subcommand is given (help is printed), 1 on validation,
//! transport, id-mismatch or verification failures.

mod output;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use randorg_client::{ClientConfig, Method, RandomClient};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "randorg", version, about = "Get random numbers from random.org")]
struct Cli {
    /// Use the signed API and verify response signatures
    #[arg(short = 'S', long, global = true)]
    signed: bool,

    /// Number of randoms to generate
    #[arg(short, long, global = true, default_value_t = 1)]
    number: u32,

    /// random.org API key (overrides the config file)
    #[arg(long, global = true)]
    key: Option<String>,

    /// Path to a TOML config file (default: $RANDORG_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate random integers
    Integers {
        /// Minimum of the random numbers (-1e9 to 1e9)
        #[arg(short = 'm', long)]
        min: Option<i64>,
        /// Maximum of the random numbers (-1e9 to 1e9)
        #[arg(short = 'M', long)]
        max: Option<i64>,
        /// Pick without replacement
        #[arg(short = 'r', long)]
        no_replacement: bool,
        /// Base to display numbers in (2, 8, 10 or 12)
        #[arg(short = 'b', long)]
        base: Option<i64>,
    },
    /// Generate decimal fractions in [0, 1)
    Decimals {
        /// Number of decimal places (1-20)
        #[arg(short = 'd', long)]
        decimal_places: Option<i64>,
        /// Pick without replacement
        #[arg(short = 'r', long)]
        no_replacement: bool,
    },
    /// Generate numbers from a gaussian distribution
    Gaussians {
        /// Mean of the distribution (-1e6 to 1e6)
        #[arg(short = 'm', long)]
        mean: Option<f64>,
        /// Standard deviation of the distribution (-1e6 to 1e6)
        #[arg(short = 's', long)]
        standard_deviation: Option<f64>,
        /// Significant digits (2-20)
        #[arg(short = 'd', long)]
        significant_digits: Option<i64>,
    },
    /// Generate random strings
    Strings {
        /// Length of each string (1-20)
        #[arg(short = 'l', long)]
        length: Option<i64>,
        /// Allowed alphabet: named tags or literal characters (max 80)
        #[arg(short = 'c', long, num_args = 1..)]
        characters: Option<Vec<String>>,
        /// Pick without replacement
        #[arg(short = 'r', long)]
        no_replacement: bool,
    },
    /// Generate version-4 UUIDs
    Uuids,
    /// Generate binary blobs
    Blobs {
        /// Size of each blob in bits (1-1048576, divisible by 8)
        #[arg(short = 's', long)]
        size: Option<i64>,
        /// Blob return format (base64 or hex)
        #[arg(short = 'f', long)]
        format: Option<String>,
    },
    /// Show usage statistics for the API key
    Usage,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Cli {
        signed,
        number,
        key,
        config,
        command,
    } = Cli::parse();

    // No subcommand: print help, exit 2
    let Some(command) = command else {
        let _ = Cli::command().print_help();
        return ExitCode::from(2);
    };

    match run(signed, number, key, config.as_deref(), command) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(
    signed: bool,
    number: u32,
    key: Option<String>,
    config_path: Option<&Path>,
    command: Command,
) -> anyhow::Result<String> {
    let mut config = load_config(config_path)?;
    if let Some(key) = key {
        config.api_key = key;
    }
    if signed {
        config.signed = true;
    }
    anyhow::ensure!(
        !config.api_key.is_empty(),
        "no API key configured; pass --key or set api_key in the config file"
    );

    let (method, params) = request_params(command);
    tracing::debug!(%method, n = number, signed = config.signed, "dispatching subcommand");
    let client = RandomClient::new(config);

    let text = if method == Method::Usage {
        client.generate_with(method, 0, Value::Null, output::error_text, output::usage_text)?
    } else {
        client.generate_with(
            method,
            number,
            Value::Object(params),
            output::error_text,
            output::data_lines,
        )?
    };
    Ok(text)
}

/// Map a subcommand onto its method and explicitly supplied parameters
///
/// Only flags the user actually passed land in the override map; the
/// client's defaults cover the rest.
fn request_params(command: Command) -> (Method, Map<String, Value>) {
    let mut params = Map::new();
    let mut set = |name: &str, value: Option<Value>| {
        if let Some(value) = value {
            params.insert(name.to_string(), value);
        }
    };

    let method = match command {
        Command::Integers {
            min,
            max,
            no_replacement,
            base,
        } => {
            set("min", min.map(Value::from));
            set("max", max.map(Value::from));
            set("base", base.map(Value::from));
            set("replacement", no_replacement.then_some(Value::from(false)));
            Method::Integers
        }
        Command::Decimals {
            decimal_places,
            no_replacement,
        } => {
            set("decimalPlaces", decimal_places.map(Value::from));
            set("replacement", no_replacement.then_some(Value::from(false)));
            Method::Decimals
        }
        Command::Gaussians {
            mean,
            standard_deviation,
            significant_digits,
        } => {
            set("mean", mean.map(Value::from));
            set("standardDeviation", standard_deviation.map(Value::from));
            set("significantDigits", significant_digits.map(Value::from));
            Method::Gaussians
        }
        Command::Strings {
            length,
            characters,
            no_replacement,
        } => {
            set("length", length.map(Value::from));
            set("characters", characters.map(Value::from));
            set("replacement", no_replacement.then_some(Value::from(false)));
            Method::Strings
        }
        Command::Uuids => Method::Uuids,
        Command::Blobs { size, format } => {
            set("size", size.map(Value::from));
            set("format", format.map(Value::from));
            Method::Blobs
        }
        Command::Usage => Method::Usage,
    };

    (method, params)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    let path = path
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("RANDORG_CONFIG").map(PathBuf::from));
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("parsing config file {}", path.display()))
        }
        None => Ok(ClientConfig::default()),
    }
}
