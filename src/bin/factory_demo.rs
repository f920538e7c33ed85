use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use colored::Colorize;
use creational_patterns::config::DEFAULT_LOG_FILTER;
use creational_patterns::logging::init_logging;
use creational_patterns::{
    creator_for, factory_for, ConfigParser, CreationRegistry, FactoryConfig, FactoryError,
    ProductType, SimpleFactory, Tier,
};
use tracing::error;

const USAGE: &str = "usage: factory_demo [simple|method|abstract|registry|all] [--config PATH]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Simple,
    Method,
    Abstract,
    Registry,
    All,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Mode::Simple),
            "method" => Ok(Mode::Method),
            "abstract" => Ok(Mode::Abstract),
            "registry" => Ok(Mode::Registry),
            "all" => Ok(Mode::All),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

#[derive(Debug, PartialEq)]
struct Args {
    mode: Mode,
    config: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut mode = Mode::All;
    let mut config = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().ok_or("--config needs a path")?;
            config = Some(PathBuf::from(path));
        } else {
            mode = arg.parse()?;
        }
    }

    Ok(Args { mode, config })
}

// =============================================================================
// Milestone 1: Simple factory
// =============================================================================

fn simple_lines() -> Vec<String> {
    let factory = SimpleFactory::new();
    ProductType::ALL
        .iter()
        .map(|&product_type| factory.create(product_type).describe())
        .collect()
}

// =============================================================================
// Milestone 2: Factory method
// =============================================================================

fn method_lines() -> Vec<String> {
    ProductType::ALL
        .iter()
        .map(|&product_type| creator_for(product_type).create().describe())
        .collect()
}

// =============================================================================
// Milestone 3: Abstract factory
// =============================================================================

fn abstract_lines(tiers: &[Tier]) -> Vec<String> {
    tiers
        .iter()
        .flat_map(|&tier| factory_for(tier).create_family().describe())
        .collect()
}

// =============================================================================
// Milestone 4: Registry driven by config
// =============================================================================

fn registry_lines(config: &FactoryConfig) -> Result<Vec<String>, FactoryError> {
    let registry = CreationRegistry::standard();
    config
        .products
        .iter()
        .map(|product_type| registry.create(product_type).map(|p| p.describe()))
        .collect()
}

fn print_section(title: &str, lines: &[String]) {
    println!("{}", format!("=== {title} ===").bold());
    for line in lines {
        println!("  {}", line.green());
    }
}

fn run(args: &Args, config: &FactoryConfig) -> Result<(), FactoryError> {
    let wants = |mode: Mode| args.mode == mode || args.mode == Mode::All;

    if wants(Mode::Simple) {
        print_section("Simple factory", &simple_lines());
    }
    if wants(Mode::Method) {
        print_section("Factory method", &method_lines());
    }
    if wants(Mode::Abstract) {
        print_section("Abstract factory", &abstract_lines(&Tier::ALL));
    }
    if wants(Mode::Registry) {
        let title = format!("Registry ({} tier configured)", config.tier);
        print_section(&title, &registry_lines(config)?);
        print_section(
            "Configured family",
            &abstract_lines(std::slice::from_ref(&config.tier)),
        );
    }
    Ok(())
}

/// Reads the config without logging, so its log filter can be applied first.
fn load_config(path: Option<&Path>) -> Result<FactoryConfig, FactoryError> {
    path.map(ConfigParser::read_file)
        .transpose()
        .map(Option::unwrap_or_default)
}

fn exit_code(err: &FactoryError) -> i32 {
    if err.is_unknown_variant() {
        2
    } else {
        1
    }
}

fn report(err: &FactoryError) -> i32 {
    eprintln!("{} {err}", "error:".red());
    if err.is_unknown_variant() {
        eprintln!("supported products: A, B, C; tiers: low, high");
    }
    exit_code(err)
}

fn main() {
    let raw: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{} {err}", "error:".red());
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let loaded = load_config(args.config.as_deref());
    let filter = loaded
        .as_ref()
        .map_or(DEFAULT_LOG_FILTER, |config| config.log_filter.as_str());
    init_logging(filter);

    let config = match loaded {
        Ok(config) => {
            if let Some(path) = &args.config {
                config.log_loaded(path);
            }
            config
        }
        Err(err) => {
            error!(error = %err, "failed to load factory config");
            process::exit(report(&err));
        }
    };

    if let Err(err) = run(&args, &config) {
        error!(error = %err, "demo failed");
        process::exit(report(&err));
    }
}
