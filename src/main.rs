use cayley::algebra::{AlgebraError, HypercomplexNumber};
use cayley::display::{Config, DisplayConfig};
use cayley::notation;
use cayley::operation::{self, Operation};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG: &str = "cayley.toml";

#[derive(Parser)]
#[command(name = "cayley")]
#[command(about = "Arithmetic on Cayley-Dickson numbers (complex, quaternion, octonion, ...)", long_about = None)]
struct Cli {
    /// Display configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a binary operation to two numbers
    Eval {
        /// add, subtract, multiply or divide
        operation: Operation,

        /// Left operand (e.g., "2+3i")
        #[arg(allow_hyphen_values = true)]
        p: String,

        /// Right operand (e.g., "1-1i")
        #[arg(allow_hyphen_values = true)]
        q: String,

        /// Print exactly this many decimals
        #[arg(short, long)]
        decimals: Option<usize>,

        /// Print every coefficient at full precision
        #[arg(long, conflicts_with = "decimals")]
        full: bool,

        /// Print the whole evaluation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a notation string is read
    Parse {
        /// Notation string (e.g., "3+2i-1j+0k")
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Print the terms as JSON
        #[arg(long)]
        json: bool,
    },

    /// Conjugate a number
    Conjugate {
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[arg(short, long)]
        decimals: Option<usize>,
    },

    /// Multiplicative inverse of a number
    Invert {
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[arg(short, long)]
        decimals: Option<usize>,
    },

    /// Euclidean norm of a number
    Norm {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Check that a number has a power-of-two dimension
    Check {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            operation,
            p,
            q,
            decimals,
            full,
            json,
        } => load_display(cli.config.as_deref()).and_then(|display| {
            let display = match (decimals, full) {
                (Some(places), _) => DisplayConfig::fixed(places),
                (None, true) => DisplayConfig::full(),
                (None, false) => display,
            };
            eval(operation, &p, &q, &display, json)
        }),
        Commands::Parse { text, json } => parse(&text, json),
        Commands::Conjugate { text, decimals } => {
            unary(&text, decimals, |x| Ok(x.conjugate()))
        }
        Commands::Invert { text, decimals } => unary(&text, decimals, HypercomplexNumber::invert),
        Commands::Norm { text } => norm(&text),
        Commands::Check { text } => check(&text),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_display(path: Option<&str>) -> Result<DisplayConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .map_err(|e| format!("Failed to load config '{}': {}", path, e))?,
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load_from_file(DEFAULT_CONFIG)
            .map_err(|e| format!("Failed to load config '{}': {}", DEFAULT_CONFIG, e))?,
        None => Config::empty(),
    };
    log::debug!("display config: {:?}", config.display);
    Ok(config.display)
}

fn eval(
    op: Operation,
    p: &str,
    q: &str,
    display: &DisplayConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let evaluation = operation::evaluate(op, p, q, display)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", evaluation.summary());
    }

    Ok(())
}

fn parse(text: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let number = notation::parse_and_build(text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&number)?);
        return Ok(());
    }

    println!("Number: {}", number);
    println!(
        "Dimension: {} ({})",
        number.dimension(),
        if number.is_valid_dimension() {
            "valid"
        } else {
            "not a power of two"
        }
    );
    println!("Precision: {} decimals", notation::precision_of(&number));
    println!("\nTerms ({}):", number.dimension());
    for term in number.terms() {
        let unit = if term.unit.is_empty() { "(real)" } else { term.unit.as_str() };
        println!("  - {}: {}", unit, term.coefficient);
    }

    Ok(())
}

fn unary(
    text: &str,
    decimals: Option<usize>,
    op: impl Fn(&HypercomplexNumber) -> Result<HypercomplexNumber, AlgebraError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let number = notation::parse_and_build(text)?;
    if !number.is_valid_dimension() {
        return Err(AlgebraError::InvalidDimension(number.dimension()).into());
    }

    let result = op(&number)?;
    println!("{}", notation::format(&result, decimals));
    Ok(())
}

fn norm(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let number = notation::parse_and_build(text)?;
    println!("{}", number.norm());
    Ok(())
}

fn check(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let number = notation::parse_and_build(text)?;
    if !number.is_valid_dimension() {
        return Err(AlgebraError::InvalidDimension(number.dimension()).into());
    }

    println!("Dimension {}: valid", number.dimension());
    Ok(())
}
